//! Motor driver implementations
//!
//! - DRV8701: low-side slow-decay PWM with a slew-limited ramp
//! - Shared: mutex wrapper serializing commands against the periodic tick

pub mod drv8701p;
pub mod shared;

pub use drv8701p::Drv8701p;
pub use shared::SharedMotor;
