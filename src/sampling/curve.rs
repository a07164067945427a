//! Auswertung einzelner Bézier-Segmente (Gerade, quadratisch, kubisch).

use crate::core::{PathError, SegmentBasis, SegmentRef};
use glam::DVec2;

/// B(t) = (1-t)·P0 + t·P1
pub fn linear(p0: DVec2, p1: DVec2, t: f64) -> DVec2 {
    p0 + (p1 - p0) * t
}

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Position des Segments bei `t` (auf `[0, 1]` begrenzt).
///
/// `t = 0` und `t = 1` liefern exakt die Endpunkt-Positionen, ohne
/// Rundungsfehler der Basis-Polynome.
pub fn evaluate(segment: SegmentRef<'_>, t: f64) -> Result<DVec2, PathError> {
    let basis = segment.basis()?;
    let p = |i: usize| segment.controls[i].position();
    let t = t.clamp(0.0, 1.0);
    let last = segment.controls.len() - 1;

    if t == 0.0 {
        return Ok(p(0));
    }
    if t == 1.0 {
        return Ok(p(last));
    }

    Ok(match basis {
        SegmentBasis::Linear => linear(p(0), p(1), t),
        SegmentBasis::Quadratic => quadratic_bezier(p(0), p(1), p(2), t),
        SegmentBasis::Cubic => cubic_bezier(p(0), p(1), p(2), p(3), t),
    })
}

/// Erste Ableitung B'(t) des Segments.
pub fn tangent(segment: SegmentRef<'_>, t: f64) -> Result<DVec2, PathError> {
    let basis = segment.basis()?;
    let p = |i: usize| segment.controls[i].position();
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;

    Ok(match basis {
        SegmentBasis::Linear => p(1) - p(0),
        // B'(t) = 2(1-t)(P1-P0) + 2t(P2-P1)
        SegmentBasis::Quadratic => 2.0 * inv * (p(1) - p(0)) + 2.0 * t * (p(2) - p(1)),
        // B'(t) = 3(1-t)²(P1-P0) + 6(1-t)t(P2-P1) + 3t²(P3-P2)
        SegmentBasis::Cubic => {
            3.0 * inv * inv * (p(1) - p(0))
                + 6.0 * inv * t * (p(2) - p(1))
                + 3.0 * t * t * (p(3) - p(2))
        }
    })
}

/// Richtung der Tangente bei `t` in Grad (`atan2(dy, dx)`, normiert auf `[0, 360)`).
///
/// `None` bei entarteter Tangente, z.B. Segment ohne Ausdehnung.
pub fn tangent_heading(segment: SegmentRef<'_>, t: f64) -> Result<Option<f64>, PathError> {
    let d = tangent(segment, t)?;
    if d.length_squared() <= f64::EPSILON * f64::EPSILON {
        return Ok(None);
    }
    Ok(Some(super::heading::normalize_heading(
        d.y.atan2(d.x).to_degrees(),
    )))
}
