//! The animated ring statistics widget.
//!
//! ARCHITECT'S MANDATE: One sweep tells the whole story. The ring spins
//! a full turn while the slices grow from nothing to their share, both
//! driven by the same progress value. When the sweep lands, the ring is
//! whole, the seam is closed, and the label says how much of it is real
//! data.

use gyre_core::{AnimationDriver, Proportions, RingGeometry, RunId};
use tracing::{debug, trace};

use crate::config::RingConfig;
use crate::fallback::FallbackColors;
use crate::render::{RenderCommand, TextAlign};
use crate::style::{Color, Palette};

/// Where the first slice begins: 12 o'clock, in surface degrees.
const TOP_START_DEG: f32 = -90.0;

/// One full revolution.
const FULL_TURN_DEG: f32 = 360.0;

/// The ring chart.
///
/// Owns its data, colors, geometry and sweep. The host owns the clock
/// and the surface: it calls [`update`](Self::update) with frame deltas
/// and [`render`](Self::render) to collect draw commands.
///
/// Single-threaded by design. Every entry point takes `&mut self` or
/// `&self`; there is nothing to lock and no callback to race.
#[derive(Debug)]
pub struct StatsRing {
    /// Immutable knobs, set at construction.
    config: RingConfig,
    /// The raw series, kept for re-normalization.
    values: Vec<f32>,
    /// Normalized slice fractions.
    proportions: Proportions,
    /// Resolved color per slice, index-matched to `proportions`.
    slice_colors: Vec<Color>,
    /// Color of the seam-closing arc.
    seam_color: Color,
    /// Synthesizer for slices past the palette's end.
    fallback: FallbackColors,
    /// Ring placement in the current viewport.
    geometry: RingGeometry,
    /// Sweep progress owner.
    driver: AnimationDriver,
    /// Handle of the sweep in flight, if any.
    run: Option<RunId>,
    /// True if the widget changed since the last frame was taken.
    needs_redraw: bool,
}

impl StatsRing {
    /// Creates a ring with no data and no viewport.
    ///
    /// Nothing renders until [`set_data`](Self::set_data) and
    /// [`resize`](Self::resize) have both been called.
    #[must_use]
    pub fn new(config: RingConfig) -> Self {
        let mut fallback = FallbackColors::new(config.fallback_seed);
        let seam_color = config
            .palette
            .slice(0)
            .unwrap_or_else(|| fallback.color_for(0));

        Self {
            config,
            values: Vec::new(),
            proportions: Proportions::default(),
            slice_colors: Vec::new(),
            seam_color,
            fallback,
            geometry: RingGeometry::EMPTY,
            driver: AnimationDriver::new(),
            run: None,
            needs_redraw: true,
        }
    }

    /// Replaces the value series and restarts the reveal from zero.
    ///
    /// Calling this mid-sweep is the dangerous case: the old sweep's
    /// handle dies before the new sweep exists, so a tick aimed at the
    /// old data can never drive the new reveal.
    pub fn set_data(&mut self, values: &[f32]) {
        self.values = values.to_vec();
        self.restart();
    }

    /// Changes the unfilled remainder and restarts the reveal.
    ///
    /// `show` controls whether the remainder is drawn as a trailing
    /// divider-colored slice or left as dead angle.
    pub fn set_unfilled(&mut self, unfilled: f32, show: bool) {
        self.config.unfilled = unfilled;
        self.config.show_unfilled = show;
        self.restart();
    }

    /// Replaces the palette and recolors in place.
    ///
    /// Colors swap without re-running the reveal; a restyle is not new
    /// data.
    pub fn set_palette(&mut self, palette: Palette) {
        self.config.palette = palette;
        self.resolve_colors();
        self.needs_redraw = true;
    }

    /// Adopts a new viewport size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.geometry = RingGeometry::compute(width, height, self.config.stroke_width);
        self.needs_redraw = true;
        debug!(
            radius = self.geometry.radius,
            width, height, "viewport resized"
        );
    }

    /// Advances the sweep by `dt` seconds.
    ///
    /// Returns true if progress moved and the ring wants a redraw.
    /// Safe to call every frame forever; once the sweep lands (or after
    /// a restart invalidated the run) it returns false and does nothing.
    pub fn update(&mut self, dt: f32) -> bool {
        let Some(run) = self.run else {
            return false;
        };

        match self.driver.tick(run, dt) {
            Some(progress) => {
                if !self.driver.is_running() {
                    self.run = None;
                }
                self.needs_redraw = true;
                trace!(progress, "sweep tick");
                true
            }
            None => {
                self.run = None;
                false
            }
        }
    }

    /// Emits this frame's draw commands in paint order.
    ///
    /// An empty series emits nothing, not even the label. Everything
    /// else emits one arc per slice, the seam arc near the end of the
    /// sweep, and the centered percentage label.
    pub fn render(&self, commands: &mut Vec<RenderCommand>) {
        if self.proportions.is_empty() {
            return;
        }

        let progress = self.driver.progress();
        let rotation = FULL_TURN_DEG * progress;
        let mut start = TOP_START_DEG;

        for (index, &fraction) in self.proportions.fractions().iter().enumerate() {
            let sweep = FULL_TURN_DEG * fraction;
            commands.push(RenderCommand::Arc {
                bounds: self.geometry.bounds,
                start_angle: start + rotation,
                sweep_angle: sweep * progress,
                color: self.slice_colors[index],
                stroke_width: self.config.stroke_width,
            });
            // The next slice starts at this slice's FULL extent. Only the
            // drawn sweep scales with progress, so slices keep their seats
            // while they grow.
            start += sweep;
        }

        // Rounding leaves a hairline gap where the last slice meets the
        // first. Near the end of the sweep, a minimal arc paints over it.
        if progress > 1.0 - self.config.precision {
            commands.push(RenderCommand::Arc {
                bounds: self.geometry.bounds,
                start_angle: start + rotation,
                sweep_angle: self.config.minimal_arc,
                color: self.seam_color,
                stroke_width: self.config.stroke_width,
            });
        }

        commands.push(RenderCommand::Text {
            text: format!("{:.2}%", self.proportions.filled_fraction() * 100.0),
            x: self.geometry.center.x,
            y: self.geometry.center.y + self.config.font_size / 4.0,
            color: self.config.palette.text,
            font_size: self.config.font_size,
            align: TextAlign::Center,
        });
    }

    /// Current sweep progress (0-1).
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.driver.progress()
    }

    /// Fraction of the ring covered by real data.
    #[must_use]
    pub fn filled_fraction(&self) -> f32 {
        self.proportions.filled_fraction()
    }

    /// Resolved ring geometry for the current viewport.
    #[must_use]
    pub fn geometry(&self) -> RingGeometry {
        self.geometry
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    /// True while a sweep is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    /// True if the widget changed since [`take_redraw`](Self::take_redraw).
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Returns the redraw flag and clears it.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.needs_redraw, false)
    }

    /// Re-normalizes, recolors, and starts a fresh sweep from zero.
    fn restart(&mut self) {
        self.proportions = Proportions::normalize(
            &self.values,
            self.config.unfilled,
            self.config.show_unfilled,
        );
        self.resolve_colors();
        self.run = Some(
            self.driver
                .start(self.config.sweep_duration, self.config.easing),
        );
        self.needs_redraw = true;
        debug!(
            slices = self.proportions.len(),
            filled = self.proportions.filled_fraction(),
            "sweep restarted"
        );
    }

    /// Resolves one color per slice.
    ///
    /// Priority: divider color for the unfilled slice, then the palette,
    /// then synthesized fallbacks. Also pins the seam color, which must
    /// match the first slice's edge.
    fn resolve_colors(&mut self) {
        let mut colors = Vec::with_capacity(self.proportions.len());
        for index in 0..self.proportions.len() {
            let color = if self.proportions.is_unfilled_index(index) {
                self.config.palette.divider
            } else if let Some(configured) = self.config.palette.slice(index) {
                configured
            } else {
                self.fallback.color_for(index)
            };
            colors.push(color);
        }

        self.slice_colors = colors;
        self.seam_color = self
            .config
            .palette
            .slice(0)
            .unwrap_or_else(|| self.fallback.color_for(0));
    }
}
