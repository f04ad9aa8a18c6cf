use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{Beneficiaries, Schedule};
use crate::utils::clock;

/// Emit the current accounting for one beneficiary: entitlement, vested
/// and claimed amounts, and what a claim would settle right now.
pub fn emit_claim_quote(ctx: Context<EmitClaimQuote>, address: Pubkey) -> Result<()> {
    let schedule = &ctx.accounts.schedule;
    let entry = ctx
        .accounts
        .beneficiaries
        .get(&address)
        .ok_or(VestingError::BeneficiaryNotFound)?;

    let now = clock::now_micros()?;
    let vested = schedule.vested_amount(entry.total_amount, now)?;

    emit!(ClaimQuote {
        schedule_id: schedule.id,
        address,
        total_amount: entry.total_amount,
        vested,
        claimed: entry.claimed,
        claimable: entry.claimable(vested),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitClaimQuote<'info> {
    #[account(seeds = [b"schedule", &schedule.id.to_le_bytes()], bump)]
    pub schedule: Box<Account<'info, Schedule>>,

    #[account(
        seeds = [b"beneficiaries", schedule.key().as_ref()],
        bump
    )]
    pub beneficiaries: Box<Account<'info, Beneficiaries>>,
}

#[event]
pub struct ClaimQuote {
    pub schedule_id: u64,
    pub address: Pubkey,
    pub total_amount: u64,
    pub vested: u64,
    pub claimed: u64,
    pub claimable: u64,
}
