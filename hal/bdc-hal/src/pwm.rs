//! PWM output abstractions
//!
//! The H-bridge driver chip is controlled through two PWM-capable inputs
//! (`IN1`, `IN2`) and a sleep/enable pin. Implementations map each
//! [`OutputId`] to the hardware channel that drives it.

/// Full-scale duty cycle for the platform (10000 = 100.00%)
pub const PWM_MAX: u16 = 10_000;

/// Identifies one of the driver chip's control outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputId {
    /// Sleep/enable pin (nSLEEP on the DRV8701)
    Sleep,
    /// Bridge input 1 (OutputA)
    In1,
    /// Bridge input 2 (OutputB)
    In2,
}

/// Duty cycle sink for the driver chip's outputs
///
/// Writes are synchronous and side-effect only. The duty cycle is in the
/// range `0..=PWM_MAX` of the controller's configuration; implementations
/// rescale it to their peripheral's resolution.
pub trait PwmOutputs {
    /// Set the duty cycle of one output
    fn set_output(&mut self, output: OutputId, duty: u16);

    /// Set both bridge inputs to the same duty cycle
    fn set_both(&mut self, duty: u16) {
        self.set_output(OutputId::In1, duty);
        self.set_output(OutputId::In2, duty);
    }
}

impl<T: PwmOutputs + ?Sized> PwmOutputs for &mut T {
    fn set_output(&mut self, output: OutputId, duty: u16) {
        (**self).set_output(output, duty);
    }

    fn set_both(&mut self, duty: u16) {
        (**self).set_both(duty);
    }
}
