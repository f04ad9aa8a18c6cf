use anchor_lang::prelude::*;

use crate::constants::MICROS_PER_SECOND;
use crate::error::VestingError;

/// Current chain time in microseconds since the Unix epoch.
pub fn now_micros() -> Result<i64> {
    let secs = Clock::get()?.unix_timestamp;
    secs.checked_mul(MICROS_PER_SECOND)
        .ok_or_else(|| error!(VestingError::MathOverflow))
}
