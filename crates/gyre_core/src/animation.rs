//! The sweep animation driver.
//!
//! ARCHITECT'S MANDATE: The reveal is a single steady sweep. The host
//! owns the clock; we own the progress. Time arrives as deltas, progress
//! leaves as a fraction, and a stale run handle buys you exactly nothing.

use serde::Deserialize;

/// Duration of the reference sweep, in seconds.
pub const DEFAULT_SWEEP_SECS: f32 = 5.0;

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Constant-rate sweep. The reference curve for the ring reveal.
    #[default]
    Linear,
    /// Exponential ease-out (sharp snap to target).
    ExponentialOut,
    /// Exponential ease-in (accelerating).
    ExponentialIn,
    /// Exponential ease-in-out.
    ExponentialInOut,
    /// Instant (no animation).
    Instant,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::ExponentialOut => {
                // Sharp snap: 1 - 2^(-10t)
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Self::ExponentialIn => {
                // Accelerating: 2^(10(t-1))
                if t <= 0.0 {
                    0.0
                } else {
                    2.0_f32.powf(10.0 * (t - 1.0))
                }
            }
            Self::ExponentialInOut => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else if t < 0.5 {
                    2.0_f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0_f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Self::Instant => 1.0,
        }
    }
}

/// One 0-to-1 sweep, clocked by host time deltas.
///
/// Progress only moves forward. Negative deltas are ignored and the
/// timeline saturates at 1, so a jittery host clock cannot make the
/// reveal run backwards.
#[derive(Debug, Clone)]
pub struct SweepTimeline {
    /// Elapsed fraction of the duration (0-1), before easing.
    t: f32,
    /// Sweep duration (seconds).
    duration: f32,
    /// Easing applied to the reported progress.
    easing: Easing,
}

impl SweepTimeline {
    /// Creates a timeline at progress 0.
    #[must_use]
    pub fn new(duration_secs: f32, easing: Easing) -> Self {
        Self {
            t: 0.0,
            duration: duration_secs,
            easing,
        }
    }

    /// Advances by `dt` seconds and returns the new progress.
    ///
    /// A non-positive duration completes on the first advance.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if self.duration > 0.0 {
            self.t = (self.t + dt.max(0.0) / self.duration).min(1.0);
        } else {
            self.t = 1.0;
        }

        self.progress()
    }

    /// Current eased progress (0-1).
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.easing.apply(self.t)
    }

    /// Returns true once the sweep has saturated at 1.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.t >= 1.0
    }
}

impl Default for SweepTimeline {
    fn default() -> Self {
        Self::new(DEFAULT_SWEEP_SECS, Easing::Linear)
    }
}

/// Opaque handle to one animation run.
///
/// Issued by [`AnimationDriver::start`] and required by every tick.
/// Restarting or cancelling invalidates all previously issued handles,
/// so a tick scheduled against a dead run falls on the floor instead of
/// corrupting the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId(u64);

/// What the driver is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DriverState {
    /// No run in flight. Ticks are rejected.
    Idle,
    /// A run is in flight and accepting ticks.
    Running,
}

/// Owns sweep progress and the run lifecycle.
///
/// Single-threaded by design. The host calls [`start`](Self::start) when
/// data changes, then feeds [`tick`](Self::tick) from its frame loop with
/// the handle it was issued. Handles from older runs are dead the moment
/// a new run starts.
#[derive(Debug)]
pub struct AnimationDriver {
    /// Timeline of the current (or last) run.
    timeline: SweepTimeline,
    /// Bumped on every start and cancel. Live handle = current value.
    generation: u64,
    /// Idle or Running.
    state: DriverState,
}

impl AnimationDriver {
    /// Creates an idle driver at progress 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeline: SweepTimeline::new(DEFAULT_SWEEP_SECS, Easing::Linear),
            generation: 0,
            state: DriverState::Idle,
        }
    }

    /// Starts a fresh run from progress 0 and returns its handle.
    ///
    /// Any run already in flight is cancelled first, in that order:
    /// outstanding handles die before the new run exists, so no tick
    /// aimed at the old run can ever land on the new one.
    #[must_use]
    pub fn start(&mut self, duration_secs: f32, easing: Easing) -> RunId {
        self.cancel();

        self.generation += 1;
        self.timeline = SweepTimeline::new(duration_secs, easing);
        self.state = DriverState::Running;

        RunId(self.generation)
    }

    /// Cancels the run in flight, invalidating every issued handle.
    ///
    /// Progress freezes at its last value; it does not snap to 0 or 1.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.state = DriverState::Idle;
    }

    /// Advances the run owned by `run` and returns its new progress.
    ///
    /// Returns `None` without touching any state when `run` is stale or
    /// the driver is idle. The tick that saturates progress at 1 still
    /// returns `Some(1.0)`; the driver then goes idle and later ticks
    /// return `None`.
    pub fn tick(&mut self, run: RunId, dt: f32) -> Option<f32> {
        if self.state != DriverState::Running || run != RunId(self.generation) {
            return None;
        }

        let progress = self.timeline.advance(dt);
        if self.timeline.is_finished() {
            self.state = DriverState::Idle;
        }

        Some(progress)
    }

    /// Current progress (0-1), regardless of run state.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timeline.progress()
    }

    /// Returns true while a run is accepting ticks.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Handle of the run in flight, if any.
    #[must_use]
    pub fn current_run(&self) -> Option<RunId> {
        match self.state {
            DriverState::Running => Some(RunId(self.generation)),
            DriverState::Idle => None,
        }
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}
