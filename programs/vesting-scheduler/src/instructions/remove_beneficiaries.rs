use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{self, Beneficiaries, Registry, Schedule};

/// Delete ledger entries. Each removal hands the unclaimed remainder
/// back to the schedule total; already-claimed amounts stay counted in
/// `total_claimed`.
pub fn remove_beneficiaries(
    ctx: Context<RemoveBeneficiaries>,
    addresses: Vec<Pubkey>,
) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.admin.key(),
        ctx.accounts.registry.admin,
        VestingError::UnauthorizedAdmin
    );

    let schedule = &mut ctx.accounts.schedule;
    let ledger = &mut ctx.accounts.beneficiaries;
    let removed = state::remove_beneficiaries(schedule, ledger, &addresses)?;

    emit!(BeneficiariesRemoved {
        schedule_id: schedule.id,
        count_removed: removed,
        beneficiary_count: ledger.count() as u64,
        total_amount: schedule.total_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RemoveBeneficiaries<'info> {
    #[account(seeds = [b"registry"], bump)]
    pub registry: Account<'info, Registry>,

    #[account(mut, seeds = [b"schedule", &schedule.id.to_le_bytes()], bump)]
    pub schedule: Box<Account<'info, Schedule>>,

    #[account(
        mut,
        seeds = [b"beneficiaries", schedule.key().as_ref()],
        bump
    )]
    pub beneficiaries: Box<Account<'info, Beneficiaries>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct BeneficiariesRemoved {
    pub schedule_id: u64,
    pub count_removed: u64,
    pub beneficiary_count: u64,
    pub total_amount: u64,
}
