//! Motor driver traits
//!
//! This module defines the interface of a slew-limited brushed DC motor
//! driver: a command entry point and a periodic tick. Both are cheap and
//! non-blocking, so they can run from a timer task or interrupt.

use core::fmt;

use bdc_hal::OutputId;

use crate::config::STOP_SPEED;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Commanded motor direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Direction {
    /// Brake: both bridge inputs held at the brake duty
    #[default]
    Stop = 0,
    /// IN1 high side, IN2 switching
    Forward = 1,
    /// IN2 high side, IN1 switching
    Reverse = 2,
}

impl TryFrom<u8> for Direction {
    type Error = CommandError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Direction::Stop),
            1 => Ok(Direction::Forward),
            2 => Ok(Direction::Reverse),
            other => Err(CommandError::InvalidDirection(other)),
        }
    }
}

impl From<Direction> for u8 {
    fn from(dir: Direction) -> Self {
        dir as u8
    }
}

/// Errors that can occur when applying a motor command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Direction value outside of Stop/Forward/Reverse
    InvalidDirection(u8),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidDirection(raw) => write!(f, "invalid direction {}", raw),
        }
    }
}

/// Snapshot of the driver state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorStatus {
    /// Last effective direction
    pub direction: Direction,
    /// Duty cycle the ramp converges toward
    pub target_duty: u16,
    /// Duty cycle currently applied (before polarity inversion)
    pub current_duty: u16,
    /// Bridge input being PWM-switched
    pub switching_output: OutputId,
}

impl MotorStatus {
    /// Check if the ramp has converged
    pub fn is_at_target(&self) -> bool {
        self.current_duty == self.target_duty
    }
}

/// Trait for brushed DC motor drivers with a slew-limited speed ramp
///
/// Callers must serialize [`set_command`](Self::set_command) and
/// [`on_tick`](Self::on_tick); `&mut self` enforces this for a single owner,
/// and `SharedMotor` in the drivers crate does it for shared access.
pub trait BdcMotorDriver {
    /// Set the direction and speed
    ///
    /// `speed` is a percentage scaled by 100 (10000 = 100.00%). A zero speed
    /// always brakes, regardless of `direction`.
    fn set_command(&mut self, direction: Direction, speed: u16) -> Result<(), CommandError>;

    /// Set the direction from a raw numeric value
    ///
    /// Zero speed brakes even when `raw` is not a valid direction. Otherwise
    /// an unknown value is rejected and the driver state is left unchanged.
    fn set_command_raw(&mut self, raw: u8, speed: u16) -> Result<(), CommandError> {
        if speed == STOP_SPEED {
            return self.set_command(Direction::Stop, speed);
        }
        let direction = Direction::try_from(raw)?;
        self.set_command(direction, speed)
    }

    /// Advance the ramp by one tick (call at a fixed rate, nominally 1ms)
    fn on_tick(&mut self);

    /// Get a snapshot of the driver state
    fn status(&self) -> MotorStatus;

    /// Get the last effective direction
    fn direction(&self) -> Direction {
        self.status().direction
    }

    /// Get the ramp target duty cycle
    fn target_duty(&self) -> u16 {
        self.status().target_duty
    }

    /// Get the current duty cycle (may differ from target while ramping)
    fn current_duty(&self) -> u16 {
        self.status().current_duty
    }

    /// Check if the ramp has converged
    fn is_at_target(&self) -> bool {
        self.status().is_at_target()
    }
}
