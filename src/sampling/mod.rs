//! Diskretisierung und Neuverteilung von Pfaden.
//!
//! Aufgeteilt in (Blätter zuerst):
//! - `curve`            — Auswertung eines Segments bei `t`, Tangenten
//! - `segment_sampler`  — feste Abtastung eines Segments, Polylinien-Länge
//! - `path_sampler`     — Verkettung aller Segmente mit kumulierter Bogenlänge
//! - `heading`          — kürzeste Drehung zwischen zwei Ausrichtungen
//! - `resampler`        — gleichmäßige Ausgabe nach Dichte mit Segment-Bereichen

pub mod curve;
pub mod heading;
pub mod path_sampler;
pub mod resampler;
pub mod segment_sampler;

pub use curve::{evaluate, tangent, tangent_heading};
pub use heading::{derivative_heading, normalize_heading};
pub use path_sampler::{PathSampleResult, PathSampler, Sample};
pub use resampler::{
    resample, resample_with_tolerance, SegmentIndexRange, UniformPath, UniformPoint,
};
pub use segment_sampler::{arc_length, polyline_length, sample_segment, SegmentSample};
