//! Drawing-surface primitives.
//!
//! The widget does not draw. It emits commands; the host replays them on
//! whatever surface it owns. Two primitives cover the whole chart.

use gyre_core::Rect;

use crate::style::Color;

/// Horizontal anchoring for emitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Anchor is the left edge of the run.
    Left,
    /// Anchor is the horizontal center of the run.
    Center,
}

/// A render command for the ring chart.
///
/// Angles are in degrees, measured from 3 o'clock, increasing clockwise.
/// Values outside 0-360 are legal; hosts wrap them.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Stroked circular arc along the inscribed oval of `bounds`.
    Arc {
        /// Bounding box of the arc's circle.
        bounds: Rect,
        /// Where the arc begins, in degrees.
        start_angle: f32,
        /// How far the arc extends clockwise, in degrees.
        sweep_angle: f32,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        stroke_width: f32,
    },
    /// Text run anchored at a point.
    Text {
        /// Text content.
        text: String,
        /// X position of the anchor.
        x: f32,
        /// Y position of the text baseline.
        y: f32,
        /// Text color.
        color: Color,
        /// Font size.
        font_size: f32,
        /// Horizontal anchoring.
        align: TextAlign,
    },
}

/// Collects one frame's commands in emission order.
///
/// Emission order is paint order. The seam arc and the label come last
/// so they paint over the slices.
#[derive(Debug, Default)]
pub struct RenderQueue {
    /// All commands from the frame.
    commands: Vec<RenderCommand>,
}

impl RenderQueue {
    /// Creates a new queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(64),
        }
    }

    /// Begins a new frame, dropping the previous frame's commands.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    /// Adds a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Adds multiple render commands.
    pub fn extend(&mut self, commands: impl IntoIterator<Item = RenderCommand>) {
        self.commands.extend(commands);
    }

    /// The frame's commands, in paint order.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Returns the total command count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if nothing has been emitted this frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
