use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::Schedule;

/// Fund an SPL-token schedule's vault. Open to anyone; the vault only
/// ever pays out through claims and admin withdrawals.
pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);

    let schedule = &ctx.accounts.schedule;
    require!(
        schedule.mint != Pubkey::default(),
        VestingError::NotTokenSchedule
    );
    require_keys_eq!(
        ctx.accounts.depositor_token_account.mint,
        schedule.mint,
        VestingError::InvalidTokenMint
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(Deposited {
        schedule_id: schedule.id,
        mint: schedule.mint,
        depositor: ctx.accounts.depositor.key(),
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(seeds = [b"schedule", &schedule.id.to_le_bytes()], bump)]
    pub schedule: Box<Account<'info, Schedule>>,

    #[account(
        mut,
        seeds = [b"vault", schedule.key().as_ref()],
        bump,
        constraint = vault.mint == schedule.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub depositor_token_account: Account<'info, TokenAccount>,

    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Deposited {
    pub schedule_id: u64,
    pub mint: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
}
