use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Geometry primitives
// ---------------------------------------------------------------------------

/// A point or extent in world space. The ground plane is x/z, +y is up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Axis-aligned rectangle on the ground plane, in min/max corner form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: f64,
    pub min_z: f64,
    pub max_x: f64,
    pub max_z: f64,
}

impl Rect {
    pub fn from_center(cx: f64, cz: f64, width: f64, depth: f64) -> Self {
        Self {
            min_x: cx - width / 2.0,
            min_z: cz - depth / 2.0,
            max_x: cx + width / 2.0,
            max_z: cz + depth / 2.0,
        }
    }

    /// This rectangle grown by `margin` on every side.
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_z: self.min_z - margin,
            max_x: self.max_x + margin,
            max_z: self.max_z + margin,
        }
    }

    /// Strict overlap test: rectangles sharing only an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_z < other.max_z
            && self.max_z > other.min_z
    }
}

/// Axis a corridor segment runs along. Horizontal is the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// An axis-aligned box the materializer instantiates as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub center: Vec3,
    pub size: Vec3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_center_round_trips() {
        let r = Rect::from_center(10.0, -4.0, 6.0, 8.0);
        assert_eq!(r.min_x, 7.0);
        assert_eq!(r.max_x, 13.0);
        assert_eq!(r.min_z, -8.0);
        assert_eq!(r.max_z, 0.0);
    }

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::from_center(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_center(4.0, 4.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn disjoint_rects_do_not_intersect() {
        let a = Rect::from_center(0.0, 0.0, 4.0, 4.0);
        let b = Rect::from_center(10.0, 0.0, 4.0, 4.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn edge_contact_is_not_intersection() {
        let a = Rect::from_center(0.0, 0.0, 4.0, 4.0);
        let b = Rect::from_center(4.0, 0.0, 4.0, 4.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn expansion_creates_intersection_across_a_gap() {
        let a = Rect::from_center(0.0, 0.0, 4.0, 4.0);
        let b = Rect::from_center(8.0, 0.0, 4.0, 4.0);
        assert!(!a.intersects(&b));
        assert!(a.expanded(3.0).intersects(&b.expanded(3.0)));
    }
}
