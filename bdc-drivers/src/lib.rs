//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in bdc-core and bdc-hal:
//!
//! - DRV8701-style slew-limited BDC motor controller
//! - Shared (mutex-guarded) access for timer and command tasks
//! - `embedded-hal` PWM adapter for the bridge outputs

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod motor;
pub mod output;
