//! Integrationstests für die Referenz-Szenarien der Neuverteilung:
//! - Gerade mit Dichte 2
//! - Segment ohne Ausdehnung (nur Drehung)
//! - Drei verkettete Segmente mit kurzem Mittelsegment
//! - Gleichstand bei 180°-Drehung

use approx::assert_abs_diff_eq;
use glam::DVec2;
use path_resampler::{
    compute_uniform_path, derivative_heading, Path, SamplerOptions, SegmentIndexRange,
};

const DENSITY_CM: f64 = 2.0;

fn run(path: &Path) -> path_resampler::UniformPath {
    let (_, uniform) = compute_uniform_path(path, DENSITY_CM, &SamplerOptions::default())
        .expect("Neuverteilung darf nicht fehlschlagen");
    uniform
}

#[test]
fn test_szenario_gerade_60_bis_66() {
    let path = Path::builder(DVec2::new(60.0, 60.0), 0.0)
        .line_to(DVec2::new(66.0, 60.0), 90.0)
        .build();
    let uniform = run(&path);

    assert_eq!(uniform.points.len(), 4);

    let p = &uniform.points;
    assert_eq!(p[0].position, DVec2::new(60.0, 60.0));
    assert_eq!(p[0].heading, Some(0.0));
    assert!(!p[0].is_last);

    assert_abs_diff_eq!(p[1].position.x, 62.0, epsilon = 0.1);
    assert_abs_diff_eq!(p[1].position.y, 60.0, epsilon = 1e-9);
    assert_eq!(p[1].heading, None);
    assert!(!p[1].is_last);

    assert_abs_diff_eq!(p[2].position.x, 64.0, epsilon = 0.1);
    assert_eq!(p[2].heading, None);
    assert!(!p[2].is_last);

    assert_eq!(p[3].position, DVec2::new(66.0, 60.0));
    assert_eq!(p[3].heading, Some(90.0));
    assert!(p[3].is_last);

    assert_eq!(
        uniform.segment_indexes,
        vec![SegmentIndexRange {
            segment_index: 0,
            from: 0,
            to: 4
        }]
    );
}

#[test]
fn test_szenario_nur_drehung() {
    let path = Path::builder(DVec2::new(60.0, 60.0), 0.0)
        .line_to(DVec2::new(60.0, 60.0), 90.0)
        .build();
    let uniform = run(&path);

    assert_eq!(uniform.points.len(), 2);
    assert!(uniform.points[0].is_last);
    assert!(uniform.points[1].is_last);
    assert_eq!(uniform.points[0].heading, Some(0.0));
    assert_eq!(uniform.points[1].heading, Some(90.0));
    assert_eq!(
        uniform.segment_indexes,
        vec![SegmentIndexRange {
            segment_index: 0,
            from: 0,
            to: 2
        }]
    );
}

#[test]
fn test_szenario_kurzes_mittelsegment() {
    let path = Path::builder(DVec2::new(60.0, 60.0), 0.0)
        .line_to(DVec2::new(62.0, 60.0), 0.0)
        .line_to(DVec2::new(63.0, 60.0), 45.0)
        .line_to(DVec2::new(64.0, 60.0), 90.0)
        .build();
    let uniform = run(&path);

    let ranges = &uniform.segment_indexes;
    assert_eq!(ranges.len(), 3);
    assert!(ranges[1].is_empty(), "kurzes Mittelsegment: leerer Bereich");
    assert_eq!(ranges[0].to, ranges[1].from);
    assert_eq!(ranges[1].to, ranges[2].from);
    assert_eq!(ranges[2].to, uniform.points.len());

    // Endpunkt des Mittelsegments bleibt erhalten
    let kept: Vec<_> = uniform
        .points
        .iter()
        .filter(|p| p.position == DVec2::new(63.0, 60.0))
        .collect();
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].heading, Some(45.0));
    assert!(kept[0].is_last);
}

#[test]
fn test_szenario_gleichstand_180() {
    assert_eq!(derivative_heading(0.0, 180.0), -180.0);
    assert_eq!(derivative_heading(180.0, 0.0), -180.0);
}
