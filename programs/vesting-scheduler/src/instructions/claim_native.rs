use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::error::VestingError;
use crate::instructions::claim::Claimed;
use crate::state::{Beneficiaries, Schedule};
use crate::utils::clock;

/// Settle the caller's vested lamports for a native schedule. The vault
/// PDA signs the system transfer itself.
pub fn claim_native(ctx: Context<ClaimNative>) -> Result<()> {
    let schedule = &mut ctx.accounts.schedule;
    require!(
        schedule.mint == Pubkey::default(),
        VestingError::NotNativeSchedule
    );

    let now = clock::now_micros()?;
    let claimer = ctx.accounts.claimer.key();
    let ledger = &mut ctx.accounts.beneficiaries;
    let entry = ledger
        .get_mut(&claimer)
        .ok_or(VestingError::BeneficiaryNotFound)?;

    let vested = schedule.vested_amount(entry.total_amount, now)?;
    let delta = entry.claimable(vested);
    if delta == 0 {
        return Ok(());
    }

    require!(
        ctx.accounts.vault.lamports() >= delta,
        VestingError::InsufficientVaultBalance
    );

    let schedule_key = schedule.key();
    let vault_bump = ctx.bumps.vault;
    let signer_seeds: &[&[&[u8]]] = &[&[b"native_vault", schedule_key.as_ref(), &[vault_bump]]];
    system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.claimer.to_account_info(),
            },
            signer_seeds,
        ),
        delta,
    )?;

    schedule.record_claim(entry, delta)?;

    emit!(Claimed {
        schedule_id: schedule.id,
        mint: Pubkey::default(),
        beneficiary: claimer,
        amount: delta,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimNative<'info> {
    #[account(mut, seeds = [b"schedule", &schedule.id.to_le_bytes()], bump)]
    pub schedule: Box<Account<'info, Schedule>>,

    #[account(
        mut,
        seeds = [b"beneficiaries", schedule.key().as_ref()],
        bump
    )]
    pub beneficiaries: Box<Account<'info, Beneficiaries>>,

    #[account(
        mut,
        seeds = [b"native_vault", schedule.key().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    #[account(mut)]
    pub claimer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
