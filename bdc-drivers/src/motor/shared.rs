//! Shared motor access
//!
//! The ramp tick runs from a timer task or interrupt while commands arrive
//! from elsewhere. [`SharedMotor`] puts the driver behind a blocking mutex so
//! every command and every tick runs to completion without the other
//! observing a half-applied state.
//!
//! ```ignore
//! static MOTOR: SharedMotor<CriticalSectionRawMutex, Drv8701p<Board>> =
//!     SharedMotor::new(Drv8701p::with_defaults(Board::new()));
//!
//! // Timer (1ms)
//! MOTOR.on_tick();
//!
//! // Command task
//! MOTOR.set_command(Direction::Forward, 5000)?;
//! ```

use core::cell::RefCell;

use bdc_core::traits::{BdcMotorDriver, CommandError, Direction, MotorStatus};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

/// Motor driver guarded by a blocking mutex
///
/// `M` selects the locking strategy: `CriticalSectionRawMutex` when the
/// tick runs in an interrupt, `NoopRawMutex` or `ThreadModeRawMutex` when
/// everything runs on one executor.
pub struct SharedMotor<M: RawMutex, D> {
    inner: Mutex<M, RefCell<D>>,
}

impl<M: RawMutex, D> SharedMotor<M, D> {
    /// Wrap a driver
    pub const fn new(driver: D) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(driver)),
        }
    }

    /// Run `f` with exclusive access to the driver
    pub fn lock<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }
}

impl<M: RawMutex, D: BdcMotorDriver> SharedMotor<M, D> {
    /// Apply a command atomically with respect to [`on_tick`](Self::on_tick)
    pub fn set_command(&self, direction: Direction, speed: u16) -> Result<(), CommandError> {
        self.lock(|motor| motor.set_command(direction, speed))
    }

    /// Apply a raw numeric command atomically
    pub fn set_command_raw(&self, raw: u8, speed: u16) -> Result<(), CommandError> {
        self.lock(|motor| motor.set_command_raw(raw, speed))
    }

    /// Advance the ramp by one tick
    pub fn on_tick(&self) {
        self.lock(|motor| motor.on_tick())
    }

    /// Get a consistent snapshot of the driver state
    pub fn status(&self) -> MotorStatus {
        self.lock(|motor| motor.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motor::Drv8701p;
    use bdc_hal::{OutputId, PwmOutputs};
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    #[derive(Default)]
    struct MockOutputs {
        in1: u16,
        in2: u16,
        writes: usize,
    }

    impl PwmOutputs for MockOutputs {
        fn set_output(&mut self, output: OutputId, duty: u16) {
            match output {
                OutputId::In1 => self.in1 = duty,
                OutputId::In2 => self.in2 = duty,
                OutputId::Sleep => {}
            }
            self.writes += 1;
        }
    }

    fn shared() -> SharedMotor<NoopRawMutex, Drv8701p<MockOutputs>> {
        SharedMotor::new(Drv8701p::with_defaults(MockOutputs::default()))
    }

    #[test]
    fn test_command_then_tick() {
        let motor = shared();

        motor.set_command(Direction::Forward, 5000).unwrap();
        motor.on_tick();

        let status = motor.status();
        assert_eq!(status.direction, Direction::Forward);
        assert_eq!(status.target_duty, 5000);
        assert_eq!(status.current_duty, 100);
        assert_eq!(status.switching_output, OutputId::In2);
        motor.lock(|m| {
            assert_eq!(m.outputs().in1, 10_000);
            assert_eq!(m.outputs().in2, 9900);
        });
    }

    #[test]
    fn test_raw_command_rejected() {
        let motor = shared();
        let before = motor.status();

        assert_eq!(
            motor.set_command_raw(7, 1000),
            Err(CommandError::InvalidDirection(7))
        );
        assert_eq!(motor.status(), before);
        assert_eq!(motor.lock(|m| m.outputs().writes), 0);
    }

    #[test]
    fn test_stop_through_shared() {
        let motor = shared();

        motor.set_command(Direction::Reverse, 3000).unwrap();
        motor.on_tick();
        motor.set_command(Direction::Stop, 3000).unwrap();

        let status = motor.status();
        assert_eq!(status.current_duty, 10_000);
        assert!(status.is_at_target());
        motor.lock(|m| {
            assert_eq!(m.outputs().in1, 10_000);
            assert_eq!(m.outputs().in2, 10_000);
        });
    }

    #[test]
    fn test_ticks_until_converged() {
        let motor = shared();

        motor.set_command(Direction::Forward, 250).unwrap();
        for _ in 0..3 {
            motor.on_tick();
        }
        assert!(motor.status().is_at_target());

        let writes = motor.lock(|m| m.outputs().writes);
        motor.on_tick();
        assert_eq!(motor.lock(|m| m.outputs().writes), writes);
    }
}
