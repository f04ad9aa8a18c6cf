use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::VestingError;
use crate::state::{self, Beneficiaries, BeneficiaryInput, Registry, Schedule, ScheduleKind};

pub fn register_schedule(
    ctx: Context<RegisterSchedule>,
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
        ctx.accounts.mint.key(),
        kind,
        start_time,
        end_time,
        &beneficiaries,
    )
}

/// Shared registration core: validate the recurrence, generate and store
/// the milestone sequence, seed the beneficiary ledger and advance the
/// id counter. The schedule is immutable from here on.
#[allow(clippy::too_many_arguments)]
pub(crate) fn register_into(
    registry: &mut Registry,
    schedule: &mut Schedule,
    ledger: &mut Beneficiaries,
    mint: Pubkey,
    kind: ScheduleKind,
    start_time: i64,
    end_time: i64,
    inputs: &[BeneficiaryInput],
) -> Result<()> {
    let id = registry.schedule_count;
    schedule.setup(id, mint, kind, start_time, end_time)?;
    if !inputs.is_empty() {
        state::add_beneficiaries(schedule, ledger, inputs)?;
    }
    registry.schedule_count = id.checked_add(1).ok_or(VestingError::MathOverflow)?;

    emit!(ScheduleRegistered {
        id,
        mint,
        start_time: schedule.start_time,
        end_time: schedule.end_time,
        milestone_count: schedule.milestones.len() as u64,
        beneficiary_count: ledger.count() as u64,
        total_amount: schedule.total_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RegisterSchedule<'info> {
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

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = schedule,
        seeds = [b"vault", schedule.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct ScheduleRegistered {
    pub id: u64,
    pub mint: Pubkey,
    pub start_time: i64,
    pub end_time: i64,
    pub milestone_count: u64,
    pub beneficiary_count: u64,
    pub total_amount: u64,
}
