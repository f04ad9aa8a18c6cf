use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{self, Beneficiaries, BeneficiaryInput, Registry, Schedule};

pub fn add_beneficiaries(
    ctx: Context<AddBeneficiaries>,
    inputs: Vec<BeneficiaryInput>,
) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.admin.key(),
        ctx.accounts.registry.admin,
        VestingError::UnauthorizedAdmin
    );

    let schedule = &mut ctx.accounts.schedule;
    let ledger = &mut ctx.accounts.beneficiaries;
    let added = state::add_beneficiaries(schedule, ledger, &inputs)?;

    emit!(BeneficiariesAdded {
        schedule_id: schedule.id,
        count_added: added,
        beneficiary_count: ledger.count() as u64,
        total_amount: schedule.total_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AddBeneficiaries<'info> {
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
pub struct BeneficiariesAdded {
    pub schedule_id: u64,
    pub count_added: u64,
    pub beneficiary_count: u64,
    pub total_amount: u64,
}
