//! Pfad: verkettete Bézier-Segmente über einer gemeinsamen Kontrollpunkt-Arena.
//!
//! Jeder Kontrollpunkt existiert genau einmal in `controls`. Segmente speichern
//! nur Index-Bereiche; zwei aufeinanderfolgende Segmente teilen sich den
//! Arena-Index ihres gemeinsamen Endpunkts.

use super::{ControlPoint, PathError, Segment, SegmentBasis, SegmentRef};
use glam::DVec2;

/// Ein Pfad aus 0..n Segmenten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    controls: Vec<ControlPoint>,
    segments: Vec<Segment>,
}

impl Path {
    /// Startet einen neuen Pfad am Endpunkt `position` mit Ausrichtung `heading` (Grad).
    pub fn builder(position: DVec2, heading: f64) -> PathBuilder {
        PathBuilder {
            path: Path {
                controls: vec![ControlPoint::Endpoint { position, heading }],
                segments: Vec::new(),
            },
        }
    }

    /// Baut einen Pfad aus einzelnen Kontrollpunkt-Listen pro Segment.
    ///
    /// Jede Liste enthält beide Endpunkte. Der Start-Endpunkt von Segment `i`
    /// muss dem End-Endpunkt von Segment `i - 1` entsprechen und wird in der
    /// Arena zusammengelegt.
    pub fn from_segments(segments: &[Vec<ControlPoint>]) -> Result<Self, PathError> {
        let mut path = Path::default();

        for (segment_index, controls) in segments.iter().enumerate() {
            let segment = SegmentRef::new(segment_index, controls);
            let basis = segment.basis()?;
            validate_control_kinds(segment_index, controls)?;

            let first = if let Some(&previous_end) = path.controls.last() {
                if previous_end != controls[0] {
                    return Err(PathError::DisconnectedSegments { segment_index });
                }
                path.controls.len() - 1
            } else {
                path.controls.push(controls[0]);
                0
            };

            path.controls.extend_from_slice(&controls[1..]);
            let last = path.controls.len() - 1;
            debug_assert_eq!(last - first, basis.interior_count() + 1);
            path.segments.push(Segment { first, last });
        }

        Ok(path)
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Alle Kontrollpunkte in Pfad-Reihenfolge (gemeinsame Endpunkte einmal).
    pub fn controls(&self) -> &[ControlPoint] {
        &self.controls
    }

    /// Sicht auf Segment `index`.
    pub fn segment(&self, index: usize) -> Option<SegmentRef<'_>> {
        self.segments
            .get(index)
            .map(|s| SegmentRef::new(index, &self.controls[s.first..=s.last]))
    }

    /// Iteriert alle Segmente in Pfad-Reihenfolge.
    pub fn segments(&self) -> impl Iterator<Item = SegmentRef<'_>> + '_ {
        self.segments
            .iter()
            .enumerate()
            .map(|(index, s)| SegmentRef::new(index, &self.controls[s.first..=s.last]))
    }

    /// Index-Bereiche der Segmente in der Arena.
    pub fn segment_ranges(&self) -> &[Segment] {
        &self.segments
    }

    /// Alle Endpunkte (Segmentgrenzen) in Pfad-Reihenfolge.
    pub fn endpoints(&self) -> impl Iterator<Item = &ControlPoint> + '_ {
        self.controls.iter().filter(|c| c.is_endpoint())
    }
}

/// Endpunkte nur an den Rändern, dazwischen nur innere Steuerpunkte.
fn validate_control_kinds(
    segment_index: usize,
    controls: &[ControlPoint],
) -> Result<(), PathError> {
    let last = controls.len() - 1;
    for (control_index, control) in controls.iter().enumerate() {
        let at_boundary = control_index == 0 || control_index == last;
        match (at_boundary, control.is_endpoint()) {
            (true, false) => {
                return Err(PathError::EndpointExpected {
                    segment_index,
                    control_index,
                })
            }
            (false, true) => {
                return Err(PathError::UnexpectedEndpoint {
                    segment_index,
                    control_index,
                })
            }
            _ => {}
        }
    }
    Ok(())
}

/// Schrittweiser Aufbau eines Pfads ab einem Start-Endpunkt.
///
/// Jeder Schritt hängt ein Segment an, dessen Start der bisherige letzte
/// Endpunkt ist. Fehlerhafte Segmente sind so nicht konstruierbar.
#[derive(Debug, Clone)]
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    /// Gerade zum Endpunkt `end`.
    pub fn line_to(self, end: DVec2, heading: f64) -> Self {
        self.push(&[], end, heading)
    }

    /// Quadratische Bézier über Steuerpunkt `control`.
    pub fn quadratic_to(self, control: DVec2, end: DVec2, heading: f64) -> Self {
        self.push(&[control], end, heading)
    }

    /// Kubische Bézier über `control1` und `control2`.
    pub fn cubic_to(self, control1: DVec2, control2: DVec2, end: DVec2, heading: f64) -> Self {
        self.push(&[control1, control2], end, heading)
    }

    pub fn build(self) -> Path {
        self.path
    }

    fn push(mut self, interior: &[DVec2], end: DVec2, heading: f64) -> Self {
        let first = self.path.controls.len() - 1;
        self.path.controls.extend(
            interior
                .iter()
                .map(|&position| ControlPoint::Interior { position }),
        );
        self.path.controls.push(ControlPoint::Endpoint {
            position: end,
            heading,
        });
        let last = self.path.controls.len() - 1;
        self.path.segments.push(Segment { first, last });
        self
    }
}

#[cfg(test)]
mod tests;
