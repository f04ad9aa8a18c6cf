use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{Registry, Schedule};

/// Admin recovery of vault balance not owed to any beneficiary. A plain
/// guarded transfer; the proportionality rules are untouched.
pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);
    require_keys_eq!(
        ctx.accounts.admin.key(),
        ctx.accounts.registry.admin,
        VestingError::UnauthorizedAdmin
    );

    let schedule = &ctx.accounts.schedule;
    require!(
        schedule.mint != Pubkey::default(),
        VestingError::NotTokenSchedule
    );
    require_keys_eq!(
        ctx.accounts.recipient_token_account.mint,
        schedule.mint,
        VestingError::InvalidTokenMint
    );
    require!(
        ctx.accounts.vault.amount >= amount,
        VestingError::InsufficientVaultBalance
    );

    let id_bytes = schedule.id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[b"schedule", &id_bytes, &[ctx.bumps.schedule]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.recipient_token_account.to_account_info(),
                authority: ctx.accounts.schedule.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(Withdrawn {
        schedule_id: schedule.id,
        mint: schedule.mint,
        recipient: ctx.accounts.recipient_token_account.key(),
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(seeds = [b"registry"], bump)]
    pub registry: Account<'info, Registry>,

    #[account(mut, seeds = [b"schedule", &schedule.id.to_le_bytes()], bump)]
    pub schedule: Box<Account<'info, Schedule>>,

    #[account(
        mut,
        seeds = [b"vault", schedule.key().as_ref()],
        bump,
        constraint = vault.mint == schedule.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Withdrawn {
    pub schedule_id: u64,
    pub mint: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
}
