//! Shared utilities for the animation core.
//!
//! Helpers for frame timing, easing curves, and seedable randomness.

pub mod easing;
pub mod frame_timing;
pub mod rng;
