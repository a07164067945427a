use super::*;

fn dv(x: f64, y: f64) -> DVec2 {
    DVec2::new(x, y)
}

#[test]
fn test_builder_teilt_endpunkte() {
    let path = Path::builder(dv(0.0, 0.0), 0.0)
        .line_to(dv(10.0, 0.0), 90.0)
        .quadratic_to(dv(15.0, 5.0), dv(10.0, 10.0), 180.0)
        .cubic_to(dv(5.0, 15.0), dv(0.0, 15.0), dv(0.0, 10.0), 270.0)
        .build();

    assert_eq!(path.segment_count(), 3);
    // 4 Endpunkte + 1 + 2 Steuerpunkte
    assert_eq!(path.controls().len(), 7);

    let ranges = path.segment_ranges();
    for pair in ranges.windows(2) {
        assert_eq!(pair[0].last, pair[1].first);
    }
    assert_eq!(ranges[0].control_count(), 2);
    assert_eq!(ranges[1].control_count(), 3);
    assert_eq!(ranges[2].control_count(), 4);
}

#[test]
fn test_segment_sicht() {
    let path = Path::builder(dv(0.0, 0.0), 0.0)
        .cubic_to(dv(1.0, 1.0), dv(2.0, 1.0), dv(3.0, 0.0), 45.0)
        .build();

    let segment = path.segment(0).expect("Segment 0 erwartet");
    assert_eq!(segment.index, 0);
    assert_eq!(segment.basis(), Ok(SegmentBasis::Cubic));
    assert_eq!(segment.end().and_then(ControlPoint::heading), Some(45.0));
    assert!(path.segment(1).is_none());
}

#[test]
fn test_from_segments_legt_gemeinsame_endpunkte_zusammen() {
    let a = ControlPoint::endpoint(0.0, 0.0, 0.0);
    let b = ControlPoint::endpoint(5.0, 0.0, 90.0);
    let c = ControlPoint::endpoint(5.0, 5.0, 180.0);

    let path = Path::from_segments(&[
        vec![a, ControlPoint::interior(2.5, 2.0), b],
        vec![b, c],
    ])
    .expect("gültiger Pfad");

    assert_eq!(path.controls().len(), 4);
    assert_eq!(path.segment_ranges()[0].last, path.segment_ranges()[1].first);
    assert_eq!(path.endpoints().count(), 3);
}

#[test]
fn test_from_segments_leerer_pfad() {
    let path = Path::from_segments(&[]).expect("leerer Pfad ist gültig");
    assert!(path.is_empty());
    assert_eq!(path.segments().count(), 0);
}

#[test]
fn test_from_segments_lehnt_falsche_anzahl_ab() {
    let e = ControlPoint::endpoint(0.0, 0.0, 0.0);
    let i = ControlPoint::interior(1.0, 1.0);
    let result = Path::from_segments(&[vec![e, i, i, i, e]]);
    assert_eq!(
        result,
        Err(PathError::MalformedSegment {
            segment_index: 0,
            control_count: 5
        })
    );

    let result = Path::from_segments(&[vec![e]]);
    assert!(matches!(
        result,
        Err(PathError::MalformedSegment {
            control_count: 1,
            ..
        })
    ));
}

#[test]
fn test_from_segments_prueft_kontrollpunkt_arten() {
    let e = ControlPoint::endpoint(0.0, 0.0, 0.0);
    let i = ControlPoint::interior(1.0, 1.0);

    assert_eq!(
        Path::from_segments(&[vec![i, e]]),
        Err(PathError::EndpointExpected {
            segment_index: 0,
            control_index: 0
        })
    );
    assert_eq!(
        Path::from_segments(&[vec![e, e, e]]),
        Err(PathError::UnexpectedEndpoint {
            segment_index: 0,
            control_index: 1
        })
    );
}

#[test]
fn test_from_segments_erkennt_luecke() {
    let a = ControlPoint::endpoint(0.0, 0.0, 0.0);
    let b = ControlPoint::endpoint(5.0, 0.0, 0.0);
    let c = ControlPoint::endpoint(6.0, 0.0, 0.0);
    let d = ControlPoint::endpoint(9.0, 0.0, 0.0);

    assert_eq!(
        Path::from_segments(&[vec![a, b], vec![c, d]]),
        Err(PathError::DisconnectedSegments { segment_index: 1 })
    );
}
