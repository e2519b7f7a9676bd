//! BDC Drive Hardware Abstraction Layer
//!
//! This crate defines the output sink the motor controller writes to. A
//! board crate implements [`PwmOutputs`] on top of its PWM peripheral so the
//! same controller code runs on any chip.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (timer task, command task) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  bdc-drivers (Drv8701p, SharedMotor)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  bdc-hal (this crate - output traits)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`pwm::PwmOutputs`] - Duty cycle sink addressed by [`pwm::OutputId`]

#![no_std]
#![deny(unsafe_code)]

pub mod pwm;

pub use pwm::{OutputId, PwmOutputs, PWM_MAX};
