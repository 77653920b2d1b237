//! # GYRE UI System
//!
//! The animated ring statistics chart:
//! - One widget, one job: turn a value series into a revealed ring
//! - A single 5-second sweep drives rotation and reveal together
//! - Stale animation callbacks die at the door
//! - Every input produces a frame; nothing in the draw path panics
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      RING PIPELINE                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  set_data → Proportions → Slice Colors → Sweep → Commands   │
//! │      ↓            ↓             ↓           ↓        ↓      │
//! │  Normalize    Fractions     Palette +    Driver   Arc/Text  │
//! │                             Fallback     Ticks    Emission  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Philosophy
//!
//! This is NOT a general plotting library. This is **one chart**.
//! - A fixed reveal choreography over configurable data
//! - Deterministic output over clever adaptivity
//! - The host owns the surface and the clock; we own everything else

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod fallback;
pub mod render;
pub mod style;
pub mod widget;

pub use config::{ConfigError, RingConfig};
pub use fallback::FallbackColors;
pub use render::{RenderCommand, RenderQueue, TextAlign};
pub use style::{Color, ColorParseError, Palette};
pub use widget::StatsRing;
