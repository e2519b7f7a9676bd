//! DRV8701 brushed DC motor driver with slew-limited PWM
//!
//! The bridge is driven in low-side slow decay: one input is held at full
//! scale (high side) while the other is PWM-switched. Which input switches
//! selects the direction:
//!
//! | Direction | IN1             | IN2             |
//! |-----------|-----------------|-----------------|
//! | Forward   | full scale      | switching       |
//! | Reverse   | switching       | full scale      |
//! | Stop      | brake duty      | brake duty      |
//!
//! Speed changes are ramped by [`on_tick`](BdcMotorDriver::on_tick), at most
//! one slew step per tick. Braking is applied immediately.
//!
//! # Usage
//!
//! ```ignore
//! let mut motor = Drv8701p::with_defaults(outputs);
//! motor.set_command(Direction::Forward, 5000)?; // 50.00%
//!
//! // In the 1ms timer:
//! motor.on_tick();
//! ```
//!
//! Reversing at speed switches the bridge directly, without braking first.

use bdc_core::config::{ConfigError, DriverConfig, STOP_SPEED};
use bdc_core::ramp::{invert_duty, slew_toward};
use bdc_core::traits::{BdcMotorDriver, CommandError, Direction, MotorStatus};
use bdc_hal::{OutputId, PwmOutputs};

/// DRV8701 motor driver state
///
/// Owns the output sink. One instance drives one motor.
pub struct Drv8701p<O> {
    outputs: O,
    config: DriverConfig,
    /// Last effective direction
    direction: Direction,
    /// Duty cycle the ramp converges toward
    target_duty: u16,
    /// Duty cycle currently applied (before inversion)
    current_duty: u16,
    /// Input being PWM-switched
    switching_output: OutputId,
    /// Switching input changed role and must be written on the next tick
    refresh_pending: bool,
}

impl<O: PwmOutputs> Drv8701p<O> {
    /// Create a new driver
    ///
    /// Starts stopped at zero duty. No outputs are written until the first
    /// command.
    pub fn new(outputs: O, config: DriverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::stopped(outputs, config))
    }

    /// Create a new driver with the platform default configuration
    pub fn with_defaults(outputs: O) -> Self {
        Self::stopped(outputs, DriverConfig::default())
    }

    fn stopped(outputs: O, config: DriverConfig) -> Self {
        Self {
            outputs,
            config,
            direction: Direction::Stop,
            target_duty: STOP_SPEED,
            current_duty: STOP_SPEED,
            switching_output: OutputId::In1,
            refresh_pending: false,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Get the output sink
    pub fn outputs(&self) -> &O {
        &self.outputs
    }

    /// Get mutable access to the output sink
    pub fn outputs_mut(&mut self) -> &mut O {
        &mut self.outputs
    }

    /// Release the output sink
    pub fn release(self) -> O {
        self.outputs
    }

    /// Get the input currently being PWM-switched
    pub fn switching_output(&self) -> OutputId {
        self.switching_output
    }

    /// Get the duty cycle driven on the switching input
    pub fn applied_duty(&self) -> u16 {
        invert_duty(self.current_duty, self.config.pwm_max)
    }

    /// Hold `high_side` at full scale and arm the ramp on `switching`
    fn drive(&mut self, high_side: OutputId, switching: OutputId, speed: u16) {
        self.outputs.set_output(high_side, self.config.pwm_max);
        self.target_duty = speed;
        self.switching_output = switching;
        self.refresh_pending = true;
    }

    /// Brake immediately, bypassing the ramp
    fn brake(&mut self) {
        let brake = self.config.brake_duty;
        self.outputs.set_both(brake);
        self.target_duty = brake;
        self.current_duty = brake;
        self.refresh_pending = false;
    }
}

impl<O: PwmOutputs> BdcMotorDriver for Drv8701p<O> {
    fn set_command(&mut self, direction: Direction, speed: u16) -> Result<(), CommandError> {
        let speed = self.config.clamp_speed(speed);

        // Zero speed always brakes
        let direction = if speed == STOP_SPEED {
            Direction::Stop
        } else {
            direction
        };

        match direction {
            Direction::Forward => self.drive(OutputId::In1, OutputId::In2, speed),
            Direction::Reverse => self.drive(OutputId::In2, OutputId::In1, speed),
            Direction::Stop => self.brake(),
        }
        self.direction = direction;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "DRV8701 command: dir={:?}, target={}, current={}",
            direction,
            self.target_duty,
            self.current_duty
        );

        Ok(())
    }

    fn set_command_raw(&mut self, raw: u8, speed: u16) -> Result<(), CommandError> {
        if speed == STOP_SPEED {
            return self.set_command(Direction::Stop, speed);
        }
        match Direction::try_from(raw) {
            Ok(direction) => self.set_command(direction, speed),
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("DRV8701 rejected direction {}", raw);
                Err(e)
            }
        }
    }

    fn on_tick(&mut self) {
        if self.current_duty == self.target_duty && !self.refresh_pending {
            return;
        }

        self.current_duty = slew_toward(
            self.current_duty,
            self.target_duty,
            self.config.slew_rate_step,
        );
        self.refresh_pending = false;

        let applied = invert_duty(self.current_duty, self.config.pwm_max);
        self.outputs.set_output(self.switching_output, applied);

        #[cfg(feature = "defmt")]
        if self.current_duty == self.target_duty {
            defmt::trace!("DRV8701 ramp done at {}", self.current_duty);
        }
    }

    fn status(&self) -> MotorStatus {
        MotorStatus {
            direction: self.direction,
            target_duty: self.target_duty,
            current_duty: self.current_duty,
            switching_output: self.switching_output,
        }
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn target_duty(&self) -> u16 {
        self.target_duty
    }

    fn current_duty(&self) -> u16 {
        self.current_duty
    }

    fn is_at_target(&self) -> bool {
        self.current_duty == self.target_duty
    }
}
