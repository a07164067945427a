//! Zentrale Konfiguration der Pfad-Abtastung.
//!
//! `SamplerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::bail;
use serde::{Deserialize, Serialize};

// ── Abtastung ───────────────────────────────────────────────────────

/// Abtastschritte pro Segment (Referenzwert für die Polylinien-Näherung).
pub const STEP_COUNT: usize = crate::sampling::segment_sampler::DEFAULT_STEP_COUNT;
/// Standard-Dichte (Pfad-Einheiten) für den Kommandozeilen-Lauf.
pub const DENSITY: f64 = 2.0;
/// Toleranz für Längenvergleiche beim Zusammenlegen kurzer Segmente.
pub const LENGTH_EPSILON: f64 = crate::sampling::resampler::DEFAULT_LENGTH_EPSILON;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Abtast-Optionen.
/// Wird als `path_resampler.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerOptions {
    /// Abtastschritte pro Segment
    #[serde(default = "default_step_count")]
    pub step_count: usize,
    /// Mindestabstand zwischen zwei nicht erzwungenen Ausgabepunkten
    #[serde(default = "default_density")]
    pub density: f64,
    /// Toleranz für Längenvergleiche
    #[serde(default = "default_length_epsilon")]
    pub length_epsilon: f64,
    /// JSON-Ausgabe eingerückt
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self {
            step_count: STEP_COUNT,
            density: DENSITY,
            length_epsilon: LENGTH_EPSILON,
            pretty_json: true,
        }
    }
}

/// Serde-Default für `step_count` (fehlende Felder in bestehenden TOML-Dateien).
fn default_step_count() -> usize {
    STEP_COUNT
}

fn default_density() -> f64 {
    DENSITY
}

fn default_length_epsilon() -> f64 {
    LENGTH_EPSILON
}

fn default_pretty_json() -> bool {
    true
}

impl SamplerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Liest und prüft Optionen aus TOML-Text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("path-resampler"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("path_resampler.toml")
    }

    /// Prüft die Werte auf Plausibilität.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.step_count == 0 {
            bail!("step_count muss mindestens 1 sein");
        }
        if !(self.density.is_finite() && self.density > 0.0) {
            bail!("density muss endlich und größer 0 sein (ist {})", self.density);
        }
        if !(self.length_epsilon.is_finite() && self.length_epsilon >= 0.0) {
            bail!(
                "length_epsilon darf nicht negativ sein (ist {})",
                self.length_epsilon
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = SamplerOptions::default();
        assert_eq!(opts.step_count, 100);
        assert_eq!(opts.density, 2.0);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_fehlende_felder_mit_defaults() {
        let opts = SamplerOptions::from_toml("density = 0.5\n").expect("gültiges TOML");
        assert_eq!(opts.density, 0.5);
        assert_eq!(opts.step_count, STEP_COUNT);
        assert!(opts.pretty_json);
    }

    #[test]
    fn test_ungueltige_werte_werden_abgelehnt() {
        assert!(SamplerOptions::from_toml("step_count = 0\n").is_err());
        assert!(SamplerOptions::from_toml("density = -1.0\n").is_err());
        assert!(SamplerOptions::from_toml("density = \"viel\"\n").is_err());
    }

    #[test]
    fn test_speichern_und_laden() {
        let dir = std::env::temp_dir().join(format!("path_resampler_opts_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("path_resampler.toml");

        let opts = SamplerOptions {
            step_count: 250,
            density: 1.25,
            length_epsilon: 1e-6,
            pretty_json: false,
        };
        opts.save_to_file(&file).expect("Speichern fehlgeschlagen");
        assert_eq!(SamplerOptions::load_from_file(&file), opts);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_fehlende_datei_liefert_defaults() {
        let missing = std::env::temp_dir().join("path_resampler_gibt_es_nicht.toml");
        assert_eq!(
            SamplerOptions::load_from_file(&missing),
            SamplerOptions::default()
        );
    }
}
