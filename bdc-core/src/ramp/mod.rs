//! Ramp math
//!
//! Slew-rate limiting and output polarity for the low-side switching scheme.

pub mod slew;

pub use slew::{invert_duty, slew_toward, ticks_to_target};
