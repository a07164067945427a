//! Argumente des Kommandozeilen-Laufs.
//!
//! Aufruf: `path-resampler [--density D] [--steps N] [--samples] KONTROLLPUNKT...`
//!
//! Ein Kontrollpunkt ist `x,y,heading` (Endpunkt) oder `x,y` (innerer Steuerpunkt).
//! Zwischen zwei Endpunkten stehen 0 bis 2 innere Steuerpunkte.

use crate::core::{ControlPoint, Path};
use crate::sampling::{PathSampleResult, UniformPath};
use crate::shared::SamplerOptions;
use anyhow::{bail, Context, Result};
use serde::Serialize;

/// Geparste Kommandozeile.
#[derive(Debug, Clone, PartialEq)]
pub struct CliRequest {
    /// Überschreibt `SamplerOptions::density`
    pub density: Option<f64>,
    /// Überschreibt `SamplerOptions::step_count`
    pub step_count: Option<usize>,
    /// Dichte Abtastung mit ausgeben
    pub include_samples: bool,
    /// Kontrollpunkte je Segment, inkl. beider Endpunkte
    pub segments: Vec<Vec<ControlPoint>>,
}

/// JSON-Ausgabe eines Laufs.
#[derive(Debug, Serialize)]
struct RunOutput<'a> {
    total_length: f64,
    segment_lengths: &'a [f64],
    uniform: &'a UniformPath,
    #[serde(skip_serializing_if = "Option::is_none")]
    samples: Option<&'a PathSampleResult>,
}

impl CliRequest {
    /// Parst die Argumente ohne Programmnamen.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut density = None;
        let mut step_count = None;
        let mut include_samples = false;
        let mut controls = Vec::new();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--density" => {
                    let value = args.next().context("--density erwartet einen Wert")?;
                    let value = value.as_ref();
                    density = Some(
                        value
                            .parse::<f64>()
                            .with_context(|| format!("Ungültige Dichte: {}", value))?,
                    );
                }
                "--steps" => {
                    let value = args.next().context("--steps erwartet einen Wert")?;
                    let value = value.as_ref();
                    step_count = Some(
                        value
                            .parse::<usize>()
                            .with_context(|| format!("Ungültige Schrittanzahl: {}", value))?,
                    );
                }
                "--samples" => include_samples = true,
                flag if flag.starts_with("--") => bail!("Unbekannte Option: {}", flag),
                token => controls.push(parse_control(token)?),
            }
        }

        Ok(Self {
            density,
            step_count,
            include_samples,
            segments: group_segments(&controls)?,
        })
    }

    /// Wendet die Überschreibungen auf `options` an.
    pub fn apply_to(&self, options: &SamplerOptions) -> Result<SamplerOptions> {
        let mut merged = options.clone();
        if let Some(density) = self.density {
            merged.density = density;
        }
        if let Some(step_count) = self.step_count {
            merged.step_count = step_count;
        }
        merged.validate()?;
        Ok(merged)
    }

    /// Baut den Pfad, berechnet Abtastung und Neuverteilung und liefert JSON.
    pub fn run(&self, options: &SamplerOptions) -> Result<String> {
        let options = self.apply_to(options)?;
        let path = Path::from_segments(&self.segments).context("Pfad ungültig")?;
        let (samples, uniform) = crate::compute_uniform_path(&path, options.density, &options)
            .context("Neuverteilung fehlgeschlagen")?;

        log::info!(
            "{} Segmente, Länge {:.3} → {} Punkte (Dichte {})",
            path.segment_count(),
            samples.total_length,
            uniform.len(),
            options.density
        );

        let output = RunOutput {
            total_length: samples.total_length,
            segment_lengths: &samples.segment_lengths,
            uniform: &uniform,
            samples: self.include_samples.then_some(&samples),
        };
        let json = if options.pretty_json {
            serde_json::to_string_pretty(&output)?
        } else {
            serde_json::to_string(&output)?
        };
        Ok(json)
    }
}

/// `x,y,heading` → Endpunkt, `x,y` → innerer Steuerpunkt.
fn parse_control(token: &str) -> Result<ControlPoint> {
    let values = token
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .with_context(|| format!("Ungültiger Kontrollpunkt: {}", token))?;

    match values.as_slice() {
        [x, y] => Ok(ControlPoint::interior(*x, *y)),
        [x, y, heading] => Ok(ControlPoint::endpoint(*x, *y, *heading)),
        _ => bail!(
            "Kontrollpunkt {} braucht 2 (x,y) oder 3 (x,y,heading) Werte",
            token
        ),
    }
}

/// Teilt die Kontrollpunkt-Folge an Endpunkten in Segmente.
///
/// Ein Endpunkt schließt das laufende Segment ab und beginnt das nächste.
fn group_segments(controls: &[ControlPoint]) -> Result<Vec<Vec<ControlPoint>>> {
    let Some((&first, rest)) = controls.split_first() else {
        bail!("Keine Kontrollpunkte angegeben");
    };
    if !first.is_endpoint() {
        bail!("Pfad muss mit einem Endpunkt (x,y,heading) beginnen");
    }

    let mut segments = Vec::new();
    let mut current = vec![first];
    for &control in rest {
        current.push(control);
        if control.is_endpoint() {
            segments.push(std::mem::replace(&mut current, vec![control]));
        }
    }
    if current.len() > 1 {
        bail!("Pfad muss mit einem Endpunkt (x,y,heading) enden");
    }

    Ok(segments)
}
