use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{Beneficiaries, Schedule};
use crate::utils::clock;

/// Settle the caller's vested amount for an SPL-token schedule. Claiming
/// again before the next milestone is a no-op success. The ledger is
/// only advanced after the transfer goes through.
pub fn claim(ctx: Context<Claim>) -> Result<()> {
    let schedule_ai = ctx.accounts.schedule.to_account_info();
    let schedule_bump = ctx.bumps.schedule;

    let schedule = &mut ctx.accounts.schedule;
    require!(
        schedule.mint != Pubkey::default(),
        VestingError::NotTokenSchedule
    );
    require_keys_eq!(
        ctx.accounts.claimer_token_account.mint,
        schedule.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.claimer_token_account.owner,
        ctx.accounts.claimer.key(),
        VestingError::InvalidTokenAccount
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
        ctx.accounts.vault.amount >= delta,
        VestingError::InsufficientVaultBalance
    );

    let id_bytes = schedule.id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[b"schedule", &id_bytes, &[schedule_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.claimer_token_account.to_account_info(),
                authority: schedule_ai,
            },
            signer_seeds,
        ),
        delta,
    )?;

    schedule.record_claim(entry, delta)?;

    emit!(Claimed {
        schedule_id: schedule.id,
        mint: schedule.mint,
        beneficiary: claimer,
        amount: delta,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
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
        seeds = [b"vault", schedule.key().as_ref()],
        bump,
        constraint = vault.mint == schedule.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub claimer_token_account: Account<'info, TokenAccount>,

    pub claimer: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Claimed {
    pub schedule_id: u64,
    pub mint: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
}
