//! Core-Datenmodell: Kontrollpunkte, Segmente, Pfade und Fehlertypen.
//!
//! - Path: Arena aller Kontrollpunkte + Segment-Index-Bereiche
//! - Segment: 2 bis 4 Kontrollpunkte, Endpunkte an beiden Rändern
//! - ControlPoint: Endpunkt (mit Ausrichtung) oder innerer Steuerpunkt

pub mod control_point;
pub mod error;
pub mod path;
pub mod segment;

pub use control_point::ControlPoint;
pub use error::PathError;
pub use path::{Path, PathBuilder};
pub use segment::{Segment, SegmentBasis, SegmentRef};
