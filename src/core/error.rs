//! Fehlertypen der Pfad-Diskretisierung.

use thiserror::Error;

/// Fehler beim Aufbau, Abtasten oder Neuverteilen eines Pfads.
///
/// Alle Varianten sind für die gesamte Berechnung fatal: der Aufrufer
/// verwirft den Pfad, eine Teil-Auswertung findet nicht statt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// Segment hat nicht 2, 3 oder 4 Kontrollpunkte.
    #[error("Segment {segment_index} hat {control_count} Kontrollpunkte (erlaubt: 2 bis 4)")]
    MalformedSegment {
        segment_index: usize,
        control_count: usize,
    },

    /// Erster oder letzter Kontrollpunkt eines Segments ist kein Endpunkt.
    #[error("Segment {segment_index}: Kontrollpunkt {control_index} muss ein Endpunkt sein")]
    EndpointExpected {
        segment_index: usize,
        control_index: usize,
    },

    /// Endpunkt an innerer Position eines Segments.
    #[error("Segment {segment_index}: Kontrollpunkt {control_index} darf kein Endpunkt sein")]
    UnexpectedEndpoint {
        segment_index: usize,
        control_index: usize,
    },

    /// Segment beginnt nicht am Endpunkt seines Vorgängers.
    #[error("Segment {segment_index} schließt nicht an den Endpunkt seines Vorgängers an")]
    DisconnectedSegments { segment_index: usize },

    /// Dichte ist nicht positiv oder nicht endlich.
    #[error("Ungültige Dichte {density}: muss endlich und größer 0 sein")]
    InvalidDensity { density: f64 },

    /// Abtastung mit 0 Schritten.
    #[error("Schrittanzahl der Abtastung muss mindestens 1 sein")]
    InvalidStepCount,
}

/// Prüft eine Dichte auf `> 0` und Endlichkeit.
pub(crate) fn validate_density(density: f64) -> Result<(), PathError> {
    if density.is_finite() && density > 0.0 {
        Ok(())
    } else {
        Err(PathError::InvalidDensity { density })
    }
}
