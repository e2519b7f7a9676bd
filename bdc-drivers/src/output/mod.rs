//! Output sink implementations
//!
//! Adapters from [`bdc_hal::PwmOutputs`] to concrete PWM peripherals.

pub mod hbridge;

pub use hbridge::{HBridgePwm, NoSleepPin};
