use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::error::VestingError;
use crate::instructions::withdraw::Withdrawn;
use crate::state::{Registry, Schedule};

/// Admin recovery of lamports from a native schedule's vault.
pub fn withdraw_native(ctx: Context<WithdrawNative>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);
    require_keys_eq!(
        ctx.accounts.admin.key(),
        ctx.accounts.registry.admin,
        VestingError::UnauthorizedAdmin
    );

    let schedule = &ctx.accounts.schedule;
    require!(
        schedule.mint == Pubkey::default(),
        VestingError::NotNativeSchedule
    );
    require!(
        ctx.accounts.vault.lamports() >= amount,
        VestingError::InsufficientVaultBalance
    );

    let schedule_key = schedule.key();
    let signer_seeds: &[&[&[u8]]] =
        &[&[b"native_vault", schedule_key.as_ref(), &[ctx.bumps.vault]]];
    system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.recipient.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(Withdrawn {
        schedule_id: schedule.id,
        mint: Pubkey::default(),
        recipient: ctx.accounts.recipient.key(),
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawNative<'info> {
    #[account(seeds = [b"registry"], bump)]
    pub registry: Account<'info, Registry>,

    #[account(seeds = [b"schedule", &schedule.id.to_le_bytes()], bump)]
    pub schedule: Box<Account<'info, Schedule>>,

    #[account(
        mut,
        seeds = [b"native_vault", schedule.key().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    /// CHECK: Lamport destination chosen by the admin; no data is read.
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,

    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}
