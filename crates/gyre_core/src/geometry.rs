//! Ring geometry resolved from the host viewport.
//!
//! The ring is a stroked circle. The stroke is centered on the circle's
//! path, so the radius has to pull in by half the stroke width or the
//! outer edge of the stroke clips against the viewport.

use crate::math::{Rect, Vec2};

/// Resolved placement of the ring inside one drawing area.
///
/// Recomputed on every viewport change. Pure function of its inputs:
/// the same `(width, height, stroke_width)` always produces the same
/// geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    /// Center of the ring (also the text anchor).
    pub center: Vec2,
    /// Radius of the stroke centerline. Never negative.
    pub radius: f32,
    /// Square bounding box of the stroke centerline circle.
    ///
    /// Arc commands take this box; the host sweeps angles inside it.
    pub bounds: Rect,
}

impl RingGeometry {
    /// Geometry of a zero-sized viewport. Nothing can be drawn into it.
    pub const EMPTY: Self = Self {
        center: Vec2::ZERO,
        radius: 0.0,
        bounds: Rect::ZERO,
    };

    /// Computes ring geometry for a viewport.
    ///
    /// The ring fills the largest circle that fits the viewport with the
    /// full stroke visible. A stroke wider than the viewport clamps the
    /// radius to zero instead of going negative, and a negative stroke
    /// counts as zero width, so the ring never grows past the viewport.
    #[must_use]
    pub fn compute(width: f32, height: f32, stroke_width: f32) -> Self {
        let stroke_width = stroke_width.max(0.0);
        let radius = (width.min(height) / 2.0 - stroke_width / 2.0).max(0.0);
        let center = Vec2::new(width / 2.0, height / 2.0);

        Self {
            center,
            radius,
            bounds: Rect::centered_square(center, radius),
        }
    }

    /// Returns true if the ring has no visible area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.radius <= 0.0
    }
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self::EMPTY
    }
}
