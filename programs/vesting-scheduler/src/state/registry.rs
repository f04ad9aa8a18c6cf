use anchor_lang::prelude::*;

/// Singleton PDA owning the admin key and the schedule id counter. The
/// counter is explicit registry state so schedule ids stay monotonic
/// across the program's whole life.
#[account]
pub struct Registry {
    /// Admin authority for registration, ledger mutation and recovery.
    pub admin: Pubkey,
    /// Next schedule id to assign.
    pub schedule_count: u64,
}

impl Registry {
    pub const SIZE: usize =
        32 + // admin
        8;   // schedule_count
}
