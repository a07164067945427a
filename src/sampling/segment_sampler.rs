//! Polylinien-Abtastung eines Segments mit fester Schrittanzahl.
//!
//! Die Bogenlänge ist bewusst die Summe der Sehnenlängen zwischen den
//! Abtastpunkten, kein analytisches Integral. Innerhalb einer Berechnung
//! muss dieselbe Schrittanzahl für Abtastung und Länge verwendet werden.

use super::curve::evaluate;
use crate::core::{PathError, SegmentRef};
use glam::DVec2;

/// Referenz-Schrittanzahl pro Segment.
pub const DEFAULT_STEP_COUNT: usize = 100;

/// Ein Abtastpunkt im lokalen Parameter des Segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSample {
    /// Kurvenparameter in `[0, 1]`
    pub t: f64,
    /// Position auf der Kurve
    pub position: DVec2,
}

/// Tastet `segment` an `step_count + 1` Stellen `t = k / step_count` ab.
pub fn sample_segment(
    segment: SegmentRef<'_>,
    step_count: usize,
) -> Result<Vec<SegmentSample>, PathError> {
    if step_count == 0 {
        return Err(PathError::InvalidStepCount);
    }
    segment.basis()?;

    let mut samples = Vec::with_capacity(step_count + 1);
    for k in 0..=step_count {
        // letzter Schritt exakt 1.0, nicht k/n mit Rundung
        let t = if k == step_count {
            1.0
        } else {
            k as f64 / step_count as f64
        };
        samples.push(SegmentSample {
            t,
            position: evaluate(segment, t)?,
        });
    }
    Ok(samples)
}

/// Approximierte Bogenlänge des Segments über `step_count` Sehnen.
pub fn arc_length(segment: SegmentRef<'_>, step_count: usize) -> Result<f64, PathError> {
    let positions: Vec<DVec2> = sample_segment(segment, step_count)?
        .into_iter()
        .map(|s| s.position)
        .collect();
    Ok(polyline_length(&positions))
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[DVec2]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
