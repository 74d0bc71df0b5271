//! Rectangle geometry for artboard frames.

use serde::{Deserialize, Serialize};

/// An artboard frame in page coordinates.
///
/// `left <= right` and `top <= bottom` are assumed, not validated; a
/// degenerate rect degrades row clustering but never panics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X of the left edge.
    pub left: f64,
    /// Y of the top edge.
    pub top: f64,
    /// X of the right edge.
    pub right: f64,
    /// Y of the bottom edge.
    pub bottom: f64,
}

impl Rect {
    /// Create a rect from edge coordinates.
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width of the rect.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height of the rect.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Y coordinate of the vertical midpoint.
    pub fn vertical_center(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }

    /// True if the vertical extents of `self` and `other` overlap.
    ///
    /// Touching edges count as overlapping; this is what groups artboards
    /// of unequal heights into the same row.
    pub fn vertically_overlaps(&self, other: &Self) -> bool {
        self.top <= other.bottom && other.top <= self.bottom
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_dimensions() {
        let r = Rect::new(10.0, 20.0, 110.0, 70.0);
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 50.0);
        assert_eq!(r.vertical_center(), 45.0);
    }

    #[test]
    fn test_vertical_overlap_partial() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(200.0, 60.0, 300.0, 180.0);
        assert!(a.vertically_overlaps(&b));
        assert!(b.vertically_overlaps(&a));
    }

    #[test]
    fn test_vertical_overlap_touching_edges() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(0.0, 100.0, 100.0, 200.0);
        assert!(a.vertically_overlaps(&b));
    }

    #[test]
    fn test_vertical_overlap_disjoint() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(0.0, 150.0, 100.0, 250.0);
        assert!(!a.vertically_overlaps(&b));
        assert!(!b.vertically_overlaps(&a));
    }

    #[test]
    fn test_serde_round_trip() {
        let r = Rect::new(1.5, 2.5, 3.5, 4.5);
        let json = serde_json::to_string(&r).unwrap();
        let back: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
