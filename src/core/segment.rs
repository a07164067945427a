//! Segmente als Index-Bereiche in der Kontrollpunkt-Arena eines Pfads.

use super::{ControlPoint, PathError};

/// Auswertungsbasis eines Segments, bestimmt durch die Anzahl seiner Kontrollpunkte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentBasis {
    /// 2 Kontrollpunkte: Gerade
    Linear,
    /// 3 Kontrollpunkte: quadratische Bézier
    Quadratic,
    /// 4 Kontrollpunkte: kubische Bézier
    Cubic,
}

impl SegmentBasis {
    /// Ordnet einer Kontrollpunkt-Anzahl die Basis zu (`None` außerhalb 2..=4).
    pub fn from_control_count(count: usize) -> Option<Self> {
        match count {
            2 => Some(SegmentBasis::Linear),
            3 => Some(SegmentBasis::Quadratic),
            4 => Some(SegmentBasis::Cubic),
            _ => None,
        }
    }

    /// Anzahl der inneren Steuerpunkte.
    pub fn interior_count(self) -> usize {
        match self {
            SegmentBasis::Linear => 0,
            SegmentBasis::Quadratic => 1,
            SegmentBasis::Cubic => 2,
        }
    }
}

/// Segment eines Pfads: inklusiver Index-Bereich `first..=last` in der Arena.
///
/// Der letzte Index eines Segments ist der erste Index des Folgesegments,
/// der gemeinsame Endpunkt existiert in der Arena nur einmal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Arena-Index des Start-Endpunkts
    pub first: usize,
    /// Arena-Index des End-Endpunkts
    pub last: usize,
}

impl Segment {
    pub fn control_count(&self) -> usize {
        self.last - self.first + 1
    }
}

/// Geliehene Sicht auf die Kontrollpunkte eines Segments.
#[derive(Debug, Clone, Copy)]
pub struct SegmentRef<'a> {
    /// Position des Segments im Pfad
    pub index: usize,
    /// Kontrollpunkte inkl. beider Endpunkte
    pub controls: &'a [ControlPoint],
}

impl<'a> SegmentRef<'a> {
    pub fn new(index: usize, controls: &'a [ControlPoint]) -> Self {
        Self { index, controls }
    }

    /// Bestimmt die Basis oder meldet ein fehlerhaftes Segment.
    pub fn basis(&self) -> Result<SegmentBasis, PathError> {
        SegmentBasis::from_control_count(self.controls.len()).ok_or(PathError::MalformedSegment {
            segment_index: self.index,
            control_count: self.controls.len(),
        })
    }

    /// Start-Endpunkt (erster Kontrollpunkt).
    pub fn start(&self) -> Option<&'a ControlPoint> {
        self.controls.first()
    }

    /// End-Endpunkt (letzter Kontrollpunkt).
    pub fn end(&self) -> Option<&'a ControlPoint> {
        self.controls.last()
    }
}
