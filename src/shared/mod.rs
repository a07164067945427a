//! Geteilte Konfiguration für Bibliothek und Kommandozeilen-Lauf.

pub mod options;

pub use options::SamplerOptions;
pub use options::{DENSITY, STEP_COUNT};
