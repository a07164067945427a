//! Kontrollpunkte eines Bézier-Pfads.

use glam::DVec2;
use serde::Serialize;

/// Ein Kontrollpunkt im Pfad.
///
/// Endpunkte begrenzen Segmente und tragen eine Ausrichtung (Grad),
/// innere Kontrollpunkte formen nur die Krümmung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlPoint {
    /// Innerer Steuerpunkt ohne Ausrichtung
    Interior {
        /// Position in Pfad-Einheiten
        position: DVec2,
    },
    /// Segment-Endpunkt mit Ausrichtung
    Endpoint {
        /// Position in Pfad-Einheiten
        position: DVec2,
        /// Ausrichtung in Grad
        heading: f64,
    },
}

impl ControlPoint {
    /// Erstellt einen inneren Steuerpunkt.
    pub fn interior(x: f64, y: f64) -> Self {
        ControlPoint::Interior {
            position: DVec2::new(x, y),
        }
    }

    /// Erstellt einen Endpunkt mit Ausrichtung (Grad).
    pub fn endpoint(x: f64, y: f64, heading: f64) -> Self {
        ControlPoint::Endpoint {
            position: DVec2::new(x, y),
            heading,
        }
    }

    pub fn position(&self) -> DVec2 {
        match self {
            ControlPoint::Interior { position } | ControlPoint::Endpoint { position, .. } => {
                *position
            }
        }
    }

    /// Ausrichtung in Grad, nur bei Endpunkten vorhanden.
    pub fn heading(&self) -> Option<f64> {
        match self {
            ControlPoint::Interior { .. } => None,
            ControlPoint::Endpoint { heading, .. } => Some(*heading),
        }
    }

    pub fn is_endpoint(&self) -> bool {
        matches!(self, ControlPoint::Endpoint { .. })
    }
}
