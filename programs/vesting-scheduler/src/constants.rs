//! Program-wide constants.

/// First calendar year the scheduler can anchor to.
pub const GENESIS_YEAR: i64 = 2024;

/// 2024-01-01T00:00:00Z in microseconds since the Unix epoch. Every
/// schedule must start strictly after this boundary.
pub const GENESIS_TIMESTAMP: i64 = 1_704_067_200_000_000;

/// The Unix epoch fell on a Thursday; weekday numbering is 0 = Sunday.
pub const EPOCH_WEEKDAY_OFFSET: i64 = 4;

pub const MICROS_PER_SECOND: i64 = 1_000_000;

/// One hour in microseconds.
pub const ONE_HOUR: i64 = 3_600_000_000;

/// One UTC day in microseconds.
pub const ONE_DAY: i64 = 86_400_000_000;

/// Max milestones stored per schedule (bounds account space and the
/// generation loops).
pub const MAX_MILESTONES: usize = 1_000;

/// Max beneficiary entries stored in the ledger PDA of one schedule.
pub const MAX_BENEFICIARIES: usize = 100;

/// Schedules may not extend past this many years after genesis, so the
/// calendar walks stay bounded on malformed input.
pub const MAX_SCHEDULE_YEARS: i64 = 200;

/// Latest timestamp a schedule may reference.
pub const SCHEDULE_HORIZON: i64 = GENESIS_TIMESTAMP + MAX_SCHEDULE_YEARS * 366 * ONE_DAY;
