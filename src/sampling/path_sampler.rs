//! Abtastung eines ganzen Pfads zu einer Bogenlängen-indizierten Punktfolge.

use super::segment_sampler::{sample_segment, DEFAULT_STEP_COUNT};
use crate::core::error::validate_density;
use crate::core::{Path, PathError};
use crate::shared::SamplerOptions;
use glam::DVec2;
use serde::Serialize;

/// Ein Punkt der dichten Abtastung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// Position auf der Kurve
    pub position: DVec2,
    /// Bogenlänge vom Pfadanfang bis hierher
    pub cumulative_length: f64,
    /// Ausrichtung, nur bei Original-Endpunkten gesetzt
    pub heading: Option<f64>,
    /// Index des Ursprungssegments
    pub segment_index: usize,
    /// Lokaler Kurvenparameter im Ursprungssegment
    pub t: f64,
    /// true = Position eines Endpunkt-Kontrollpunkts
    pub is_original_endpoint: bool,
}

impl Sample {
    /// Letzter Abtastpunkt seines Segments (End-Endpunkt).
    pub fn is_terminal(&self) -> bool {
        self.is_original_endpoint && self.t >= 1.0
    }

    /// Erster Abtastpunkt seines Segments (Start-Endpunkt).
    pub fn is_leading(&self) -> bool {
        self.is_original_endpoint && self.t <= 0.0
    }
}

/// Ergebnis der Pfad-Abtastung.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PathSampleResult {
    /// Alle Abtastpunkte in Bogenlängen-Reihenfolge
    pub points: Vec<Sample>,
    /// Gesamtlänge des Pfads
    pub total_length: f64,
    /// Bogenlänge je Segment, gleiche Schrittanzahl wie `points`
    pub segment_lengths: Vec<f64>,
}

impl PathSampleResult {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.segment_lengths.len()
    }
}

/// Tastet Pfade mit fester Schrittanzahl je Segment ab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSampler {
    step_count: usize,
}

impl Default for PathSampler {
    fn default() -> Self {
        Self {
            step_count: DEFAULT_STEP_COUNT,
        }
    }
}

impl PathSampler {
    pub fn new(step_count: usize) -> Self {
        Self { step_count }
    }

    pub fn from_options(options: &SamplerOptions) -> Self {
        Self::new(options.step_count)
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Tastet alle Segmente in Reihenfolge ab und verkettet die Bogenlängen.
    ///
    /// Der erste Abtastpunkt von Segment `i + 1` ist derselbe Punkt wie der
    /// letzte von Segment `i`; beide bleiben erhalten. `density` dient nur der
    /// Kapazitätsschätzung.
    pub fn sample_path(&self, path: &Path, density: f64) -> Result<PathSampleResult, PathError> {
        validate_density(density)?;
        if self.step_count == 0 {
            return Err(PathError::InvalidStepCount);
        }

        let segment_count = path.segment_count();
        let mut result = PathSampleResult {
            points: Vec::with_capacity(segment_count * (self.step_count + 1)),
            total_length: 0.0,
            segment_lengths: Vec::with_capacity(segment_count),
        };

        for segment in path.segments() {
            let local = sample_segment(segment, self.step_count)?;
            let start_heading = segment.start().and_then(|c| c.heading());
            let end_heading = segment.end().and_then(|c| c.heading());

            let mut segment_length = 0.0;
            let mut previous: Option<DVec2> = None;

            for sample in &local {
                if let Some(prev) = previous {
                    segment_length += prev.distance(sample.position);
                }
                previous = Some(sample.position);

                let (heading, is_original_endpoint) = if sample.t == 0.0 {
                    (start_heading, true)
                } else if sample.t == 1.0 {
                    (end_heading, true)
                } else {
                    (None, false)
                };

                result.points.push(Sample {
                    position: sample.position,
                    cumulative_length: result.total_length + segment_length,
                    heading,
                    segment_index: segment.index,
                    t: sample.t,
                    is_original_endpoint,
                });
            }

            log::trace!(
                "Segment {}: {} Abtastpunkte, Länge {:.4}",
                segment.index,
                local.len(),
                segment_length
            );
            result.total_length += segment_length;
            result.segment_lengths.push(segment_length);
        }

        log::debug!(
            "Pfad abgetastet: {} Segmente, {} Punkte, Länge {:.3} (Dichte {})",
            segment_count,
            result.points.len(),
            result.total_length,
            density
        );

        Ok(result)
    }
}
