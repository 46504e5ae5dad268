//! Geometry primitives for bracket layout.

use glam::DVec2;

/// An axis-aligned card rectangle in bracket coordinates (y grows down).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// The bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// The vertical center.
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Midpoint of the left edge, where an incoming connector lands.
    pub fn left_center(&self) -> DVec2 {
        DVec2::new(self.x, self.center_y())
    }

    /// Midpoint of the right edge, where an outgoing connector starts.
    pub fn right_center(&self) -> DVec2 {
        DVec2::new(self.right(), self.center_y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_and_centers() {
        let r = Rect::new(10.0, 20.0, 240.0, 100.0);
        assert_eq!(r.right(), 250.0);
        assert_eq!(r.bottom(), 120.0);
        assert_eq!(r.center_y(), 70.0);
        assert_eq!(r.left_center(), DVec2::new(10.0, 70.0));
        assert_eq!(r.right_center(), DVec2::new(250.0, 70.0));
    }
}
