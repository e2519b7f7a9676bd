//! Slew-rate limited duty cycle stepping
//!
//! The ramp moves the duty cycle toward its target by at most one step per
//! tick and lands exactly on the target with a final partial step. All
//! comparisons are done as additions in `u32`, so neither `current - step`
//! nor `target + step` can wrap.

/// Advance `current` one tick toward `target`
///
/// Moves by `step` while more than a full step away, then snaps to `target`.
/// The result never passes `target`.
///
/// # Example
///
/// ```
/// use bdc_core::ramp::slew_toward;
///
/// assert_eq!(slew_toward(0, 5000, 100), 100);
/// assert_eq!(slew_toward(9950, 10_000, 100), 10_000);
/// assert_eq!(slew_toward(5000, 0, 100), 4900);
/// ```
#[inline]
pub fn slew_toward(current: u16, target: u16, step: u16) -> u16 {
    let cur = current as u32;
    let tgt = target as u32;
    let step = step as u32;

    if cur + step < tgt {
        // cur + step < tgt <= u16::MAX
        (cur + step) as u16
    } else if cur > tgt + step {
        // cur > step, so this cannot underflow
        (cur - step) as u16
    } else {
        target
    }
}

/// Convert a conceptual duty cycle to the value driven on the switching output
///
/// In low-side slow decay the switching input is high during the braking
/// portion of the period, so the drive duty is the complement of its duty.
#[inline]
pub const fn invert_duty(duty: u16, pwm_max: u16) -> u16 {
    pwm_max.saturating_sub(duty)
}

/// Number of ticks [`slew_toward`] needs to go from `current` to `target`
///
/// Returns `u32::MAX` if the target can never be reached (zero step).
pub fn ticks_to_target(current: u16, target: u16, step: u16) -> u32 {
    let distance = current.abs_diff(target) as u32;
    if distance == 0 {
        return 0;
    }
    if step == 0 {
        return u32::MAX;
    }
    distance.div_ceil(step as u32)
}
