use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::instructions::register_schedule::register_into;
use crate::state::{Beneficiaries, BeneficiaryInput, Registry, Schedule, ScheduleKind};

/// Register a schedule that vests native lamports. The stored mint is
/// the all-zero sentinel and the vault is a system-owned PDA funded by
/// plain transfers.
pub fn register_native_schedule(
    ctx: Context<RegisterNativeSchedule>,
    kind: ScheduleKind,
    start_time: i64,
    end_time: i64,
    beneficiaries: Vec<BeneficiaryInput>,
) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.admin.key(),
        ctx.accounts.registry.admin,
        VestingError::UnauthorizedAdmin
    );

    register_into(
        &mut ctx.accounts.registry,
        &mut ctx.accounts.schedule,
        &mut ctx.accounts.beneficiaries,
        Pubkey::default(),
        kind,
        start_time,
        end_time,
        &beneficiaries,
    )
}

#[derive(Accounts)]
pub struct RegisterNativeSchedule<'info> {
    #[account(mut, seeds = [b"registry"], bump)]
    pub registry: Account<'info, Registry>,

    #[account(
        init,
        payer = admin,
        space = Schedule::MAX_SPACE,
        seeds = [b"schedule", &registry.schedule_count.to_le_bytes()],
        bump
    )]
    pub schedule: Box<Account<'info, Schedule>>,

    #[account(
        init,
        payer = admin,
        space = Beneficiaries::MAX_SPACE,
        seeds = [b"beneficiaries", schedule.key().as_ref()],
        bump
    )]
    pub beneficiaries: Box<Account<'info, Beneficiaries>>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
