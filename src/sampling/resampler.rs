//! Gleichmäßige Neuverteilung der dichten Abtastung nach Dichte.
//!
//! Ein einziger Durchlauf über die Abtastpunkte mit lokalem Akkumulator
//! (Distanz seit dem letzten behaltenen Punkt):
//! - Endpunkte am Segmentende werden immer behalten (`is_last = true`)
//! - sonst wird ein Punkt behalten, sobald der Akkumulator `density` erreicht
//! - der Akkumulator wird nur beim Behalten zurückgesetzt, nie an Segmentgrenzen
//!
//! Ein Segment kürzer als `density`, das nicht das letzte ist, wird mit
//! seinem Nachfolger zusammengelegt: sein Index-Bereich ist leer und sein
//! behaltener End-Endpunkt zählt zum Bereich des Folgesegments.

use super::heading::derivative_heading;
use super::path_sampler::PathSampleResult;
use crate::core::error::validate_density;
use crate::core::PathError;
use glam::DVec2;
use serde::Serialize;

/// Toleranz für Längenvergleiche (Kurz-Segmente, Dichte erreicht).
pub const DEFAULT_LENGTH_EPSILON: f64 = 1e-9;

/// Ein Punkt der gleichmäßig verteilten Ausgabe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UniformPoint {
    pub position: DVec2,
    /// Ausrichtung, nur an behaltenen Original-Endpunkten
    pub heading: Option<f64>,
    /// true = Endpunkt, der ein Segment abschließt
    pub is_last: bool,
    /// Kleinste Drehung seit dem vorherigen behaltenen Endpunkt (Grad)
    pub heading_delta: Option<f64>,
}

/// Halboffener Bereich `from..to` der Ausgabepunkte eines Segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SegmentIndexRange {
    pub segment_index: usize,
    pub from: usize,
    pub to: usize,
}

impl SegmentIndexRange {
    pub fn len(&self) -> usize {
        self.to - self.from
    }

    /// Leer = Segment wurde mit seinem Nachfolger zusammengelegt.
    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}

/// Ergebnis der Neuverteilung.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UniformPath {
    pub points: Vec<UniformPoint>,
    pub segment_indexes: Vec<SegmentIndexRange>,
}

impl UniformPath {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Ausgabepunkte, die Segment `segment_index` zugeordnet sind.
    pub fn points_of_segment(&self, segment_index: usize) -> Option<&[UniformPoint]> {
        self.segment_indexes
            .get(segment_index)
            .map(|range| &self.points[range.from..range.to])
    }
}

/// Verteilt die Abtastpunkte mit Mindestabstand `density` neu.
pub fn resample(result: &PathSampleResult, density: f64) -> Result<UniformPath, PathError> {
    resample_with_tolerance(result, density, DEFAULT_LENGTH_EPSILON)
}

/// Wie [`resample`], mit eigener Toleranz für Längenvergleiche.
pub fn resample_with_tolerance(
    result: &PathSampleResult,
    density: f64,
    length_epsilon: f64,
) -> Result<UniformPath, PathError> {
    validate_density(density)?;

    let (Some(first), Some(last)) = (result.points.first(), result.points.last()) else {
        return Ok(UniformPath::default());
    };

    let segment_count = last.segment_index + 1;
    let path_length = last.cumulative_length - first.cumulative_length;
    let single_empty_segment = segment_count == 1 && path_length <= length_epsilon;

    let mut uniform = UniformPath {
        // nie mehr Ausgabe- als Abtastpunkte
        points: Vec::with_capacity(result.points.len()),
        segment_indexes: Vec::with_capacity(segment_count),
    };
    uniform.points.push(UniformPoint {
        position: first.position,
        heading: first.heading,
        is_last: single_empty_segment,
        heading_delta: None,
    });

    let mut since_last_keep = 0.0;
    let mut previous_length = first.cumulative_length;
    let mut segment_start_length = first.cumulative_length;
    let mut last_heading = first.heading;
    let mut range_from = 0;

    for sample in &result.points[1..] {
        since_last_keep += sample.cumulative_length - previous_length;
        previous_length = sample.cumulative_length;

        if sample.is_leading() {
            // Duplikat des vorherigen End-Endpunkts
            segment_start_length = sample.cumulative_length;
            continue;
        }

        if sample.is_terminal() {
            let heading_delta = match (last_heading, sample.heading) {
                (Some(from), Some(to)) => Some(derivative_heading(from, to)),
                _ => None,
            };
            uniform
                .points
                .push(keep(sample.position, sample.heading, true, heading_delta));
            since_last_keep = 0.0;
            last_heading = sample.heading.or(last_heading);

            let segment_length = sample.cumulative_length - segment_start_length;
            let is_final_segment = sample.segment_index + 1 == segment_count;
            let merged = !is_final_segment && segment_length + length_epsilon < density;
            let to = if merged {
                range_from
            } else {
                uniform.points.len()
            };

            log::trace!(
                "Segment {}: Länge {:.4}, Bereich {}..{}{}",
                sample.segment_index,
                segment_length,
                range_from,
                to,
                if merged { " (zusammengelegt)" } else { "" }
            );
            uniform.segment_indexes.push(SegmentIndexRange {
                segment_index: sample.segment_index,
                from: range_from,
                to,
            });
            range_from = to;
            continue;
        }

        if since_last_keep + length_epsilon >= density {
            uniform.points.push(keep(sample.position, None, false, None));
            since_last_keep = 0.0;
        }
    }

    log::debug!(
        "Neuverteilung: {} Abtastpunkte → {} Punkte (Dichte {}, {} Segmente)",
        result.points.len(),
        uniform.points.len(),
        density,
        uniform.segment_indexes.len()
    );

    Ok(uniform)
}

fn keep(
    position: DVec2,
    heading: Option<f64>,
    is_last: bool,
    heading_delta: Option<f64>,
) -> UniformPoint {
    UniformPoint {
        position,
        heading,
        is_last,
        heading_delta,
    }
}
