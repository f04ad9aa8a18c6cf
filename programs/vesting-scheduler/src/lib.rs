use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::{BeneficiaryInput, ScheduleKind};

declare_id!("2Ut9RKeaqo895gVTEZ6fgG9WJ2sZAPfws5Hp3WGkcAg8");

#[program]
pub mod vesting_scheduler {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    pub fn set_admin(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::set_admin(ctx, new_admin)
    }

    pub fn register_schedule(
        ctx: Context<RegisterSchedule>,
        kind: ScheduleKind,
        start_time: i64,
        end_time: i64,
        beneficiaries: Vec<BeneficiaryInput>,
    ) -> Result<()> {
        instructions::register_schedule(ctx, kind, start_time, end_time, beneficiaries)
    }

    pub fn register_native_schedule(
        ctx: Context<RegisterNativeSchedule>,
        kind: ScheduleKind,
        start_time: i64,
        end_time: i64,
        beneficiaries: Vec<BeneficiaryInput>,
    ) -> Result<()> {
        instructions::register_native_schedule(ctx, kind, start_time, end_time, beneficiaries)
    }

    pub fn add_beneficiaries(
        ctx: Context<AddBeneficiaries>,
        inputs: Vec<BeneficiaryInput>,
    ) -> Result<()> {
        instructions::add_beneficiaries(ctx, inputs)
    }

    pub fn remove_beneficiaries(
        ctx: Context<RemoveBeneficiaries>,
        addresses: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::remove_beneficiaries(ctx, addresses)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim(ctx)
    }

    pub fn claim_native(ctx: Context<ClaimNative>) -> Result<()> {
        instructions::claim_native(ctx)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    pub fn deposit_native(ctx: Context<DepositNative>, amount: u64) -> Result<()> {
        instructions::deposit_native(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }

    pub fn withdraw_native(ctx: Context<WithdrawNative>, amount: u64) -> Result<()> {
        instructions::withdraw_native(ctx, amount)
    }

    pub fn emit_claim_quote(ctx: Context<EmitClaimQuote>, address: Pubkey) -> Result<()> {
        instructions::emit_claim_quote(ctx, address)
    }
}
