//! Mathematical types shared across the chart pipeline.
//!
//! These are the canonical representations handed to the host renderer.

/// 2D Vector - chart positions, text anchors
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vec2 {
    /// Creates a new Vec2
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

/// A rectangle in drawing-surface coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates the axis-aligned square of the given half-extent around a center point.
    #[must_use]
    pub fn centered_square(center: Vec2, half_extent: f32) -> Self {
        Self::new(
            center.x - half_extent,
            center.y - half_extent,
            half_extent * 2.0,
            half_extent * 2.0,
        )
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_square_edges() {
        let square = Rect::centered_square(Vec2::new(100.0, 50.0), 45.0);

        assert_eq!(square.x, 55.0);
        assert_eq!(square.y, 5.0);
        assert_eq!(square.width, 90.0);
        assert_eq!(square.height, 90.0);
        assert_eq!(square.right(), 145.0);
        assert_eq!(square.bottom(), 95.0);
    }

    #[test]
    fn test_center_roundtrip() {
        let center = Vec2::new(-3.0, 7.5);
        let square = Rect::centered_square(center, 12.0);

        assert_eq!(square.center(), center);
        assert_eq!(center.to_array(), [-3.0, 7.5]);
    }
}
