//! Widget layer.
//!
//! One widget lives here: the ring itself.

mod ring;

pub use ring::StatsRing;
