//! Board-agnostic core logic for the BDC drive
//!
//! This crate contains everything about the motor controller that does not
//! depend on a specific driver implementation:
//!
//! - Motor driver trait, direction and command error types
//! - Slew-rate ramp math and output polarity
//! - Driver configuration

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod ramp;
pub mod traits;
