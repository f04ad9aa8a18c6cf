use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::error::VestingError;
use crate::instructions::deposit::Deposited;
use crate::state::Schedule;

/// Fund a native schedule's lamport vault.
pub fn deposit_native(ctx: Context<DepositNative>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);

    let schedule = &ctx.accounts.schedule;
    require!(
        schedule.mint == Pubkey::default(),
        VestingError::NotNativeSchedule
    );

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(Deposited {
        schedule_id: schedule.id,
        mint: Pubkey::default(),
        depositor: ctx.accounts.depositor.key(),
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositNative<'info> {
    #[account(seeds = [b"schedule", &schedule.id.to_le_bytes()], bump)]
    pub schedule: Box<Account<'info, Schedule>>,

    #[account(
        mut,
        seeds = [b"native_vault", schedule.key().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub system_program: Program<'info, System>,
}
