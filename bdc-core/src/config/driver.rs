//! Driver configuration
//!
//! Duty-cycle scaling for the controller. Everything is derived from the
//! platform's full-scale PWM value unless overridden.

use core::fmt;

use bdc_hal::PWM_MAX;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Speed value that always means "stop"
pub const STOP_SPEED: u16 = 0;

/// Number of slew steps across the full duty range (1% per tick)
pub const SLEW_STEPS_PER_FULL_SCALE: u16 = 100;

/// Errors in a driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Full-scale PWM value is zero
    ZeroPwmMax,
    /// Slew step is zero, so the ramp would never move
    ZeroSlewRate,
    /// Slew step exceeds the full-scale PWM value
    SlewRateTooLarge,
    /// Brake duty exceeds the full-scale PWM value
    BrakeDutyOutOfRange,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroPwmMax => f.write_str("pwm_max must be non-zero"),
            ConfigError::ZeroSlewRate => f.write_str("slew_rate_step must be non-zero"),
            ConfigError::SlewRateTooLarge => f.write_str("slew_rate_step exceeds pwm_max"),
            ConfigError::BrakeDutyOutOfRange => f.write_str("brake_duty exceeds pwm_max"),
        }
    }
}

/// Duty-cycle configuration for a BDC motor driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriverConfig {
    /// Full-scale duty cycle (e.g. 10000 = 100.00%)
    pub pwm_max: u16,
    /// Maximum change of the duty cycle per tick
    pub slew_rate_step: u16,
    /// Duty written to both bridge inputs when braking
    pub brake_duty: u16,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::new(PWM_MAX)
    }
}

impl DriverConfig {
    /// Create a config for the given full-scale value
    ///
    /// The slew step is 1% of full scale and braking holds both inputs at
    /// full scale.
    pub const fn new(pwm_max: u16) -> Self {
        Self {
            pwm_max,
            slew_rate_step: pwm_max / SLEW_STEPS_PER_FULL_SCALE,
            brake_duty: pwm_max,
        }
    }

    /// Override the slew step
    pub const fn with_slew_rate_step(mut self, step: u16) -> Self {
        self.slew_rate_step = step;
        self
    }

    /// Override the brake duty
    pub const fn with_brake_duty(mut self, duty: u16) -> Self {
        self.brake_duty = duty;
        self
    }

    /// Check the configuration for consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pwm_max == 0 {
            return Err(ConfigError::ZeroPwmMax);
        }
        if self.slew_rate_step == 0 {
            return Err(ConfigError::ZeroSlewRate);
        }
        if self.slew_rate_step > self.pwm_max {
            return Err(ConfigError::SlewRateTooLarge);
        }
        if self.brake_duty > self.pwm_max {
            return Err(ConfigError::BrakeDutyOutOfRange);
        }
        Ok(())
    }

    /// Clamp a requested speed to the valid duty range
    pub fn clamp_speed(&self, speed: u16) -> u16 {
        speed.min(self.pwm_max)
    }
}
