//! Path Resampler Library.
//!
//! Diskretisiert Pfade aus verketteten Bézier-Segmenten (Gerade, quadratisch,
//! kubisch) mit Endpunkt-Ausrichtungen und verteilt sie gleichmäßig nach
//! einer Dichte neu. Export-Formate und Editor-Oberfläche sind Konsumenten
//! dieser Ergebnisse und nicht Teil der Library.

pub mod cli;
pub mod core;
pub mod sampling;
pub mod shared;

pub use crate::core::{
    ControlPoint, Path, PathBuilder, PathError, Segment, SegmentBasis, SegmentRef,
};
pub use sampling::{
    derivative_heading, resample, PathSampleResult, PathSampler, Sample, SegmentIndexRange,
    UniformPath, UniformPoint,
};
pub use shared::SamplerOptions;

/// Abtastung und Neuverteilung in einem Schritt, mit einheitlicher Schrittanzahl.
pub fn compute_uniform_path(
    path: &Path,
    density: f64,
    options: &SamplerOptions,
) -> Result<(PathSampleResult, UniformPath), PathError> {
    let samples = PathSampler::from_options(options).sample_path(path, density)?;
    let uniform = sampling::resample_with_tolerance(&samples, density, options.length_epsilon)?;

    log::debug!(
        "Pfad: {} Segmente, Länge {:.3} → {} Punkte",
        path.segment_count(),
        samples.total_length,
        uniform.len()
    );

    Ok((samples, uniform))
}
