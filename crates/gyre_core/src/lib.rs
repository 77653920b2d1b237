//! # GYRE Core
//!
//! Deterministic mathematics for the GYRE ring chart.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - A drawing or windowing crate
//! - A clock (time comes in as deltas from the host)
//! - Anything that can fail at runtime
//!
//! Every function in here is total: garbage in, defined frame out.
//! If you need drawing types, put them in `gyre_ui`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod animation;
pub mod geometry;
pub mod math;
pub mod series;

pub use animation::{AnimationDriver, Easing, RunId, SweepTimeline, DEFAULT_SWEEP_SECS};
pub use geometry::RingGeometry;
pub use math::{Rect, Vec2};
pub use series::Proportions;
