//! H-bridge outputs on `embedded-hal` PWM channels
//!
//! Maps the controller's duty range `0..=pwm_max` onto each channel's own
//! `max_duty_cycle()`, so the controller never sees the timer resolution.
//! The optional sleep pin is a plain digital output: any non-zero duty
//! wakes the bridge.

use core::convert::Infallible;

use bdc_hal::{OutputId, PwmOutputs};
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::pwm::SetDutyCycle;

/// Placeholder for boards that tie nSLEEP high
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSleepPin;

impl digital::ErrorType for NoSleepPin {
    type Error = Infallible;
}

impl OutputPin for NoSleepPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Bridge inputs driven by two PWM channels
pub struct HBridgePwm<A, B, S = NoSleepPin> {
    in1: A,
    in2: B,
    sleep: S,
    /// Full-scale value of incoming duty cycles
    pwm_max: u16,
}

impl<A: SetDutyCycle, B: SetDutyCycle> HBridgePwm<A, B, NoSleepPin> {
    /// Create the adapter for a bridge without a controllable sleep pin
    pub fn new(in1: A, in2: B, pwm_max: u16) -> Self {
        Self::with_sleep(in1, in2, NoSleepPin, pwm_max)
    }
}

impl<A: SetDutyCycle, B: SetDutyCycle, S: OutputPin> HBridgePwm<A, B, S> {
    /// Create the adapter with a sleep/enable pin
    pub fn with_sleep(in1: A, in2: B, sleep: S, pwm_max: u16) -> Self {
        Self {
            in1,
            in2,
            sleep,
            pwm_max,
        }
    }

    /// Release the channels and pin
    pub fn release(self) -> (A, B, S) {
        (self.in1, self.in2, self.sleep)
    }

    /// Scale a duty from `0..=pwm_max` to `0..=channel_max`
    fn scale(&self, duty: u16, channel_max: u16) -> u16 {
        if self.pwm_max == 0 {
            return 0;
        }
        let duty = duty.min(self.pwm_max) as u32;
        (duty * channel_max as u32 / self.pwm_max as u32) as u16
    }
}

impl<A: SetDutyCycle, B: SetDutyCycle, S: OutputPin> PwmOutputs for HBridgePwm<A, B, S> {
    fn set_output(&mut self, output: OutputId, duty: u16) {
        let ok = match output {
            OutputId::In1 => {
                let value = self.scale(duty, self.in1.max_duty_cycle());
                self.in1.set_duty_cycle(value).is_ok()
            }
            OutputId::In2 => {
                let value = self.scale(duty, self.in2.max_duty_cycle());
                self.in2.set_duty_cycle(value).is_ok()
            }
            OutputId::Sleep => {
                if duty > 0 {
                    self.sleep.set_high().is_ok()
                } else {
                    self.sleep.set_low().is_ok()
                }
            }
        };

        #[cfg(feature = "defmt")]
        if !ok {
            defmt::warn!("PWM write failed on {:?}", output);
        }
        #[cfg(not(feature = "defmt"))]
        let _ = ok;
    }
}
