//! Hardware abstraction traits
//!
//! These traits define the interface between the application (timer and
//! command tasks) and the motor driver implementations.

pub mod motor;

pub use motor::{BdcMotorDriver, CommandError, Direction, MotorStatus};
