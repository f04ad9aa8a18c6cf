use anchor_lang::prelude::*;
use core::result::Result;

use crate::constants::{
    GENESIS_TIMESTAMP, MAX_MILESTONES, ONE_DAY, ONE_HOUR, SCHEDULE_HORIZON,
};
use crate::error::VestingError;
use crate::state::BeneficiaryEntry;
use crate::utils::calendar;

/// Recurrence rule of a schedule. Each variant carries exactly the
/// calendar fields it needs; cross-field rules live in [`ScheduleKind::validate`].
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub enum ScheduleKind {
    /// One release at the start time.
    Onetime,
    /// Continuous proportional release between start and end.
    Linear,
    /// Releases every `interval` microseconds from the start time.
    Periodic { interval: i64 },
    /// Releases at the given hours (0-23) of every day.
    Daily { hours: Vec<u8> },
    /// As `Daily`, restricted to the given weekdays (0 = Sunday).
    Weekly { weekdays: Vec<u8>, hours: Vec<u8> },
    /// Releases on the given days of every month. A day of 0 is the last
    /// day of the month, negative days count back from the end.
    Monthly { days: Vec<i8>, hours: Vec<u8> },
    /// As `Monthly`, restricted to the given months (1-12).
    Yearly { months: Vec<u8>, days: Vec<i8>, hours: Vec<u8> },
}

impl ScheduleKind {
    /// Worst case is `Yearly` with every month, day and hour configured.
    pub const MAX_SPACE: usize =
        1 +        // variant tag
        (4 + 12) + // months
        (4 + 63) + // days (-31..=31)
        (4 + 24);  // hours

    /// Per-milestone entitlements only make sense when discrete
    /// milestones exist.
    pub fn allows_each_amount(&self) -> bool {
        !matches!(self, ScheduleKind::Onetime | ScheduleKind::Linear)
    }

    /// Calendar-anchored kinds can generate an empty milestone list for
    /// a bad window; that must be rejected at registration.
    pub fn is_calendar(&self) -> bool {
        matches!(
            self,
            ScheduleKind::Daily { .. }
                | ScheduleKind::Weekly { .. }
                | ScheduleKind::Monthly { .. }
                | ScheduleKind::Yearly { .. }
        )
    }

    /// Cross-field rules the type system cannot express: every list
    /// non-empty, in range, and strictly ascending. Ascending lists are
    /// what keep generation ordered and weekday lookups binary-searchable.
    pub fn validate(&self) -> Result<(), VestingError> {
        match self {
            ScheduleKind::Onetime | ScheduleKind::Linear => Ok(()),
            ScheduleKind::Periodic { interval } => {
                if *interval <= 0 {
                    return Err(VestingError::InvalidInterval);
                }
                Ok(())
            }
            ScheduleKind::Daily { hours } => check_field_list(hours, 0, 23),
            ScheduleKind::Weekly { weekdays, hours } => {
                check_field_list(weekdays, 0, 6)?;
                check_field_list(hours, 0, 23)
            }
            ScheduleKind::Monthly { days, hours } => {
                check_field_list(days, -31, 31)?;
                check_field_list(hours, 0, 23)
            }
            ScheduleKind::Yearly { months, days, hours } => {
                check_field_list(months, 1, 12)?;
                check_field_list(days, -31, 31)?;
                check_field_list(hours, 0, 23)
            }
        }
    }

    /// Concrete release timestamps inside `[start_time, end_time]`,
    /// strictly increasing. `Linear` has none; `Periodic` stops strictly
    /// before the end time.
    pub fn generate_milestones(
        &self,
        start_time: i64,
        end_time: i64,
    ) -> Result<Vec<i64>, VestingError> {
        let mut list = Vec::new();
        match self {
            ScheduleKind::Onetime => {
                list.push(start_time);
            }
            ScheduleKind::Linear => {}
            ScheduleKind::Periodic { interval } => {
                let mut cur = start_time;
                while cur < end_time {
                    push_milestone(&mut list, cur)?;
                    cur = match cur.checked_add(*interval) {
                        Some(next) => next,
                        None => break,
                    };
                }
            }
            ScheduleKind::Daily { hours } => {
                for day in start_time / ONE_DAY..=end_time / ONE_DAY {
                    push_day_hours(&mut list, day * ONE_DAY, hours, start_time, end_time)?;
                }
            }
            ScheduleKind::Weekly { weekdays, hours } => {
                for day in start_time / ONE_DAY..=end_time / ONE_DAY {
                    let day_time = day * ONE_DAY;
                    if weekdays.binary_search(&(calendar::weekday(day_time) as u8)).is_ok() {
                        push_day_hours(&mut list, day_time, hours, start_time, end_time)?;
                    }
                }
            }
            ScheduleKind::Monthly { days, hours } => {
                let (mut year, mut month, mut month_time) = calendar::month_boundary(start_time)?;
                let (end_year, end_month, _) = calendar::month_boundary(end_time)?;
                loop {
                    let length = calendar::month_length(year, month)?;
                    push_month_days(&mut list, month_time, length, days, hours, start_time, end_time)?;
                    month_time += length * ONE_DAY;
                    month += 1;
                    if month > 12 {
                        year += 1;
                        month = 1;
                    }
                    if end_year < year || (end_year == year && end_month < month) {
                        break;
                    }
                }
                // Negative day values can resolve out of input order and
                // collide with positive ones.
                list.sort_unstable();
                list.dedup();
            }
            ScheduleKind::Yearly { months, days, hours } => {
                let (mut year, mut year_time) = calendar::year_boundary(start_time)?;
                let (end_year, _) = calendar::year_boundary(end_time)?;
                loop {
                    for &m in months {
                        let length = calendar::month_length(year, m as i64)?;
                        let month_time = year_time + calendar::month_acc_duration(year, m as i64)?;
                        push_month_days(&mut list, month_time, length, days, hours, start_time, end_time)?;
                    }
                    year_time += calendar::year_duration(year);
                    year += 1;
                    if end_year < year {
                        break;
                    }
                }
                list.sort_unstable();
                list.dedup();
            }
        }
        Ok(list)
    }
}

fn check_field_list<T: Into<i64> + Copy>(
    values: &[T],
    min: i64,
    max: i64,
) -> Result<(), VestingError> {
    if values.is_empty() {
        return Err(VestingError::EmptyFieldList);
    }
    let mut prev = i64::MIN;
    for &v in values {
        let v = v.into();
        if v < min || v > max {
            return Err(VestingError::FieldOutOfRange);
        }
        if v <= prev {
            return Err(VestingError::UnsortedFieldList);
        }
        prev = v;
    }
    Ok(())
}

fn push_milestone(list: &mut Vec<i64>, t: i64) -> Result<(), VestingError> {
    if list.len() >= MAX_MILESTONES {
        return Err(VestingError::TooManyMilestones);
    }
    list.push(t);
    Ok(())
}

/// Emit `day_start + hour` for each configured hour landing inside the
/// window. Hours are ascending, so the first overshoot ends the day.
fn push_day_hours(
    list: &mut Vec<i64>,
    day_start: i64,
    hours: &[u8],
    start_time: i64,
    end_time: i64,
) -> Result<(), VestingError> {
    for &h in hours {
        let cur = day_start + h as i64 * ONE_HOUR;
        if cur < start_time {
            continue;
        }
        if cur > end_time {
            break;
        }
        push_milestone(list, cur)?;
    }
    Ok(())
}

fn push_month_days(
    list: &mut Vec<i64>,
    month_start: i64,
    month_length: i64,
    days: &[i8],
    hours: &[u8],
    start_time: i64,
    end_time: i64,
) -> Result<(), VestingError> {
    for &d in days {
        let Some(day) = resolve_day(d as i64, month_length) else {
            continue;
        };
        push_day_hours(list, month_start + (day - 1) * ONE_DAY, hours, start_time, end_time)?;
    }
    Ok(())
}

/// Translate a configured day value for a month of `length` days:
/// positive is the n-th day, zero the last day, negative counts back
/// from the end. Values landing outside the month are skipped.
fn resolve_day(d: i64, length: i64) -> Option<i64> {
    let day = if d <= 0 { length + d } else { d };
    (1..=length).contains(&day).then_some(day)
}

/// One registered vesting schedule. Immutable after registration except
/// for the amount totals, which move with the beneficiary ledger.
#[account]
pub struct Schedule {
    pub id: u64,
    /// Vested token mint; the all-zero key means native lamports.
    pub mint: Pubkey,
    pub kind: ScheduleKind,
    pub start_time: i64,
    pub end_time: i64,
    /// Strictly increasing, inside `[start_time, end_time]`. Empty for
    /// `Linear`, a single entry for `Onetime`.
    pub milestones: Vec<i64>,
    /// Sum of live beneficiary entitlements, minus unclaimed remainders
    /// of removed ones.
    pub total_amount: u64,
    /// Cumulative amount settled across all claims.
    pub total_claimed: u64,
}

impl Schedule {
    pub const MAX_SPACE: usize = 8 + // discriminator
        8 +                          // id
        32 +                         // mint
        ScheduleKind::MAX_SPACE +    // kind
        8 +                          // start_time
        8 +                          // end_time
        4 + 8 * MAX_MILESTONES +     // milestones
        8 +                          // total_amount
        8;                           // total_claimed

    /// Validate the requested recurrence and fix the immutable fields,
    /// including the generated milestone sequence.
    pub fn setup(
        &mut self,
        id: u64,
        mint: Pubkey,
        kind: ScheduleKind,
        start_time: i64,
        end_time: i64,
    ) -> Result<(), VestingError> {
        if start_time <= GENESIS_TIMESTAMP {
            return Err(VestingError::StartBeforeGenesis);
        }
        // A one-time schedule collapses to its single release point.
        let end_time = if matches!(kind, ScheduleKind::Onetime) {
            start_time
        } else {
            if start_time >= end_time {
                return Err(VestingError::InvalidTimeRange);
            }
            end_time
        };
        if end_time > SCHEDULE_HORIZON {
            return Err(VestingError::HorizonExceeded);
        }
        kind.validate()?;

        let milestones = kind.generate_milestones(start_time, end_time)?;
        if kind.is_calendar() && milestones.is_empty() {
            return Err(VestingError::NoMilestones);
        }

        self.id = id;
        self.mint = mint;
        self.kind = kind;
        self.start_time = start_time;
        self.end_time = end_time;
        self.milestones = milestones;
        self.total_amount = 0;
        self.total_claimed = 0;
        Ok(())
    }

    /// Count of milestones at or before `now`.
    pub fn passed_count(&self, now: i64) -> u64 {
        self.milestones.partition_point(|&m| m <= now) as u64
    }

    /// Amount of `entitlement` vested at `now`. Everything is vested at
    /// or after the end time; milestone kinds vest proportionally to the
    /// passed milestone count, `Linear` to elapsed time. Products are
    /// widened to u128 before the flooring division.
    pub fn vested_amount(&self, entitlement: u64, now: i64) -> Result<u64, VestingError> {
        if matches!(self.kind, ScheduleKind::Onetime) {
            return Ok(if now >= self.start_time { entitlement } else { 0 });
        }
        if now >= self.end_time {
            return Ok(entitlement);
        }
        if matches!(self.kind, ScheduleKind::Linear) {
            if now < self.start_time {
                return Ok(0);
            }
            let elapsed = (now - self.start_time) as u128;
            let span = (self.end_time - self.start_time) as u128;
            let vested = (entitlement as u128)
                .checked_mul(elapsed)
                .ok_or(VestingError::MathOverflow)?
                / span;
            return u64::try_from(vested).map_err(|_| VestingError::MathOverflow);
        }
        let count = self.milestones.len() as u128;
        if count == 0 {
            return Err(VestingError::NoMilestones);
        }
        let passed = self.passed_count(now) as u128;
        let vested = (entitlement as u128)
            .checked_mul(passed)
            .ok_or(VestingError::MathOverflow)?
            / count;
        u64::try_from(vested).map_err(|_| VestingError::MathOverflow)
    }

    /// Commit a settled claim: the entry and the schedule total advance
    /// together, so their sums stay conserved.
    pub fn record_claim(
        &mut self,
        entry: &mut BeneficiaryEntry,
        delta: u64,
    ) -> Result<(), VestingError> {
        entry.claimed = entry
            .claimed
            .checked_add(delta)
            .ok_or(VestingError::MathOverflow)?;
        self.total_claimed = self
            .total_claimed
            .checked_add(delta)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MICROS_PER_SECOND;

    fn d(days: i64) -> i64 {
        GENESIS_TIMESTAMP + days * ONE_DAY
    }

    fn blank() -> Schedule {
        Schedule {
            id: 0,
            mint: Pubkey::default(),
            kind: ScheduleKind::Onetime,
            start_time: 0,
            end_time: 0,
            milestones: Vec::new(),
            total_amount: 0,
            total_claimed: 0,
        }
    }

    fn schedule(kind: ScheduleKind, start: i64, end: i64) -> Schedule {
        let mut s = blank();
        s.setup(0, Pubkey::default(), kind, start, end).unwrap();
        s
    }

    #[test]
    fn rejects_start_at_or_before_genesis() {
        let mut s = blank();
        assert!(matches!(
            s.setup(0, Pubkey::default(), ScheduleKind::Onetime, GENESIS_TIMESTAMP, 0),
            Err(VestingError::StartBeforeGenesis)
        ));
    }

    #[test]
    fn rejects_inverted_time_range() {
        let mut s = blank();
        assert!(matches!(
            s.setup(0, Pubkey::default(), ScheduleKind::Linear, d(2), d(1)),
            Err(VestingError::InvalidTimeRange)
        ));
        assert!(matches!(
            s.setup(0, Pubkey::default(), ScheduleKind::Linear, d(1), d(1)),
            Err(VestingError::InvalidTimeRange)
        ));
    }

    #[test]
    fn rejects_horizon_overrun() {
        let mut s = blank();
        assert!(matches!(
            s.setup(
                0,
                Pubkey::default(),
                ScheduleKind::Linear,
                d(1),
                SCHEDULE_HORIZON + 1
            ),
            Err(VestingError::HorizonExceeded)
        ));
    }

    #[test]
    fn validates_field_lists() {
        assert!(matches!(
            ScheduleKind::Periodic { interval: 0 }.validate(),
            Err(VestingError::InvalidInterval)
        ));
        assert!(matches!(
            ScheduleKind::Daily { hours: vec![] }.validate(),
            Err(VestingError::EmptyFieldList)
        ));
        assert!(matches!(
            ScheduleKind::Daily { hours: vec![24] }.validate(),
            Err(VestingError::FieldOutOfRange)
        ));
        assert!(matches!(
            ScheduleKind::Weekly { weekdays: vec![3, 1], hours: vec![0] }.validate(),
            Err(VestingError::UnsortedFieldList)
        ));
        assert!(matches!(
            ScheduleKind::Weekly { weekdays: vec![2, 2], hours: vec![0] }.validate(),
            Err(VestingError::UnsortedFieldList)
        ));
        assert!(matches!(
            ScheduleKind::Yearly { months: vec![13], days: vec![1], hours: vec![0] }.validate(),
            Err(VestingError::FieldOutOfRange)
        ));
        assert!(matches!(
            ScheduleKind::Monthly { days: vec![-32], hours: vec![0] }.validate(),
            Err(VestingError::FieldOutOfRange)
        ));
        assert!(ScheduleKind::Monthly { days: vec![-1, 0, 15], hours: vec![0, 12] }
            .validate()
            .is_ok());
    }

    #[test]
    fn onetime_single_milestone() {
        let s = schedule(ScheduleKind::Onetime, d(10), 0);
        assert_eq!(s.milestones, vec![d(10)]);
        assert_eq!(s.end_time, d(10));
    }

    #[test]
    fn linear_has_no_milestones() {
        let s = schedule(ScheduleKind::Linear, d(1), d(11));
        assert!(s.milestones.is_empty());
    }

    #[test]
    fn periodic_stops_before_end() {
        let interval = 3 * MICROS_PER_SECOND;
        let start = d(1);
        let s = schedule(
            ScheduleKind::Periodic { interval },
            start,
            start + 10 * MICROS_PER_SECOND,
        );
        assert_eq!(
            s.milestones,
            vec![start, start + interval, start + 2 * interval, start + 3 * interval]
        );
    }

    #[test]
    fn periodic_interval_too_fine_is_rejected() {
        let mut s = blank();
        assert!(matches!(
            s.setup(
                0,
                Pubkey::default(),
                ScheduleKind::Periodic { interval: 1 },
                d(1),
                d(2)
            ),
            Err(VestingError::TooManyMilestones)
        ));
    }

    #[test]
    fn daily_hours_within_window() {
        // Jan 2 00:00 through Jan 4 00:00, releases at 00:00 and 12:00.
        let s = schedule(ScheduleKind::Daily { hours: vec![0, 12] }, d(1), d(3));
        assert_eq!(
            s.milestones,
            vec![d(1), d(1) + 12 * ONE_HOUR, d(2), d(2) + 12 * ONE_HOUR, d(3)]
        );
    }

    #[test]
    fn weekly_filters_saturdays() {
        // Jan 2 through Jan 11 2024: the only Saturday is Jan 6.
        let s = schedule(
            ScheduleKind::Weekly { weekdays: vec![6], hours: vec![9] },
            d(1),
            d(10),
        );
        assert_eq!(s.milestones, vec![d(5) + 9 * ONE_HOUR]);

        let s = schedule(
            ScheduleKind::Weekly { weekdays: vec![6], hours: vec![9, 18] },
            d(1),
            d(10),
        );
        assert_eq!(s.milestones, vec![d(5) + 9 * ONE_HOUR, d(5) + 18 * ONE_HOUR]);
    }

    #[test]
    fn monthly_last_day_tracks_leap_years() {
        // February 2024 is a leap month: day 0 resolves to Feb 29.
        let s = schedule(
            ScheduleKind::Monthly { days: vec![0], hours: vec![0] },
            d(31),
            d(60),
        );
        assert_eq!(s.milestones, vec![d(59)]);

        // February 2025 ends on the 28th.
        let s = schedule(
            ScheduleKind::Monthly { days: vec![0], hours: vec![0] },
            d(366 + 31),
            d(366 + 59),
        );
        assert_eq!(s.milestones, vec![d(366 + 58)]);
    }

    #[test]
    fn negative_days_count_from_month_end() {
        // January has 31 days: -1 resolves to the 30th.
        let s = schedule(
            ScheduleKind::Monthly { days: vec![-1], hours: vec![0] },
            GENESIS_TIMESTAMP + 1,
            d(31),
        );
        assert_eq!(s.milestones, vec![d(29)]);

        // April has 30 days: -1 resolves to the 29th.
        let s = schedule(
            ScheduleKind::Monthly { days: vec![-1], hours: vec![0] },
            d(91),
            d(121),
        );
        assert_eq!(s.milestones, vec![d(91 + 28)]);
    }

    #[test]
    fn monthly_mixed_days_stay_sorted_and_unique() {
        // -1 resolves after 5 within each month; 0 and 31 collide in January.
        let s = schedule(
            ScheduleKind::Monthly { days: vec![-1, 5], hours: vec![0] },
            GENESIS_TIMESTAMP + 1,
            d(60),
        );
        assert!(s.milestones.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(s.milestones, vec![d(4), d(29), d(31 + 4), d(31 + 27)]);

        let s = schedule(
            ScheduleKind::Monthly { days: vec![0, 31], hours: vec![0] },
            GENESIS_TIMESTAMP + 1,
            d(31),
        );
        assert_eq!(s.milestones, vec![d(30)]);
    }

    #[test]
    fn monthly_days_beyond_month_length_are_skipped() {
        // February 2024 has no 30th; the schedule is only viable in a
        // window that contains another qualifying month.
        let s = schedule(
            ScheduleKind::Monthly { days: vec![30], hours: vec![0] },
            d(31),
            d(91),
        );
        assert_eq!(s.milestones, vec![d(60 + 29)]);
    }

    #[test]
    fn monthly_empty_window_is_rejected() {
        // Feb 2024 has no day 30 and the window never reaches March.
        let mut s = blank();
        assert!(matches!(
            s.setup(
                0,
                Pubkey::default(),
                ScheduleKind::Monthly { days: vec![30], hours: vec![0] },
                d(31),
                d(59)
            ),
            Err(VestingError::NoMilestones)
        ));
    }

    #[test]
    fn yearly_last_of_february_across_leap_boundary() {
        let s = schedule(
            ScheduleKind::Yearly { months: vec![2], days: vec![0], hours: vec![0] },
            GENESIS_TIMESTAMP + 1,
            d(2 * 366),
        );
        assert_eq!(s.milestones, vec![d(59), d(366 + 58)]);
    }

    #[test]
    fn onetime_vesting_flips_at_start() {
        let s = schedule(ScheduleKind::Onetime, d(10), 0);
        let total = 5_000_000_000_000_000_000u64;
        assert_eq!(s.vested_amount(total, d(10) - 1).unwrap(), 0);
        assert_eq!(s.vested_amount(total, d(10)).unwrap(), total);
        assert_eq!(s.vested_amount(total, d(400)).unwrap(), total);
    }

    #[test]
    fn linear_midpoint_is_exact() {
        let start = d(1);
        let s = schedule(ScheduleKind::Linear, start, start + 20_000_000);
        let total = 2_000_000_000_000_000_000u64;
        assert_eq!(s.vested_amount(total, start - 1).unwrap(), 0);
        assert_eq!(
            s.vested_amount(total, start + 10_000_000).unwrap(),
            1_000_000_000_000_000_000
        );
        assert_eq!(s.vested_amount(total, start + 20_000_000).unwrap(), total);
    }

    #[test]
    fn milestone_vesting_is_proportional() {
        let interval = MICROS_PER_SECOND;
        let start = d(1);
        let s = schedule(
            ScheduleKind::Periodic { interval },
            start,
            start + 4 * interval,
        );
        assert_eq!(s.milestones.len(), 4);
        let total = 100u64;
        assert_eq!(s.vested_amount(total, start - 1).unwrap(), 0);
        assert_eq!(s.vested_amount(total, start).unwrap(), 25);
        assert_eq!(s.vested_amount(total, start + interval).unwrap(), 50);
        assert_eq!(s.vested_amount(total, start + 3 * interval).unwrap(), 100);
        assert_eq!(s.vested_amount(total, start + 100 * interval).unwrap(), 100);
    }

    #[test]
    fn each_amount_derivation_matches_ratio_form() {
        let interval = MICROS_PER_SECOND;
        let start = d(1);
        let s = schedule(
            ScheduleKind::Periodic { interval },
            start,
            start + 4 * interval,
        );
        // Entitlement derived as each * count never truncates.
        let each = 7u64;
        let total = each * s.milestones.len() as u64;
        for passed in 0..=4u64 {
            let now = start + (passed as i64 - 1) * interval;
            assert_eq!(s.vested_amount(total, now).unwrap(), each * passed);
        }
    }

    #[test]
    fn passed_count_is_inclusive() {
        let s = schedule(ScheduleKind::Daily { hours: vec![0] }, d(1), d(3));
        assert_eq!(s.passed_count(d(1) - 1), 0);
        assert_eq!(s.passed_count(d(1)), 1);
        assert_eq!(s.passed_count(d(2) + 1), 2);
        assert_eq!(s.passed_count(d(100)), 3);
    }
}
