//! Utility Module
//!
//! - [`Timer`]: frame clock (delta and elapsed session time)
//! - [`FpsCounter`]: windowed frame-rate measurement

pub mod fps_counter;
pub mod time;

pub use fps_counter::FpsCounter;
pub use time::Timer;
