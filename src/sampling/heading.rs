//! Winkel-Hilfen für Ausrichtungen in Grad.

/// Kleinste vorzeichenbehaftete Drehung von `from` nach `to` (Grad).
///
/// Ergebnis liegt in `[-180, 180)`. Ein Gleichstand bei 180° wird immer
/// als −180 aufgelöst: `derivative_heading(0, 180) == derivative_heading(180, 0) == -180`.
pub fn derivative_heading(from: f64, to: f64) -> f64 {
    let shifted = (to - from + 180.0).rem_euclid(360.0);
    // wie bei normalize_heading: exakt 360 wäre +180 statt −180
    if shifted >= 360.0 {
        -180.0
    } else {
        shifted - 180.0
    }
}

/// Normiert eine Ausrichtung auf `[0, 360)`.
pub fn normalize_heading(heading: f64) -> f64 {
    let normalized = heading.rem_euclid(360.0);
    // rem_euclid kann bei winzigen negativen Werten exakt 360 liefern
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivative_heading_referenzwerte() {
        assert_eq!(derivative_heading(0.0, 270.0), -90.0);
        assert_eq!(derivative_heading(270.0, 0.0), 90.0);
        assert_eq!(derivative_heading(0.0, 90.0), 90.0);
        assert_eq!(derivative_heading(90.0, 0.0), -90.0);
    }

    #[test]
    fn test_derivative_heading_gleichstand_180() {
        assert_eq!(derivative_heading(0.0, 180.0), -180.0);
        assert_eq!(derivative_heading(180.0, 0.0), -180.0);
        assert_eq!(derivative_heading(45.0, 225.0), -180.0);
        // Rest von rem_euclid rundet hier auf exakt 360
        assert_eq!(derivative_heading(0.0, -180.00000000000003), -180.0);
    }

    #[test]
    fn test_derivative_heading_ueber_mehrere_umdrehungen() {
        assert_eq!(derivative_heading(350.0, 10.0), 20.0);
        assert_eq!(derivative_heading(10.0, 350.0), -20.0);
        assert_eq!(derivative_heading(-720.0, 90.0), 90.0);
        assert_eq!(derivative_heading(30.0, 30.0), 0.0);
    }

    #[test]
    fn test_normalize_heading() {
        assert_eq!(normalize_heading(-90.0), 270.0);
        assert_eq!(normalize_heading(360.0), 0.0);
        assert_eq!(normalize_heading(725.0), 5.0);
        assert_eq!(normalize_heading(-1e-20), 0.0);
    }
}
