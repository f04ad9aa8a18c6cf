use anchor_lang::prelude::*;
use core::result::Result;

use crate::constants::MAX_BENEFICIARIES;
use crate::error::VestingError;
use crate::state::Schedule;

/// Ledger entry for one beneficiary of a schedule.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BeneficiaryEntry {
    pub address: Pubkey,
    /// Full entitlement, fixed when the entry is added.
    pub total_amount: u64,
    /// Cumulative settled amount; only ever grows, never past `total_amount`.
    pub claimed: u64,
}

impl BeneficiaryEntry {
    pub const SIZE: usize =
        32 + // address
        8 +  // total_amount
        8;   // claimed

    /// Outstanding amount given the vested total at some instant.
    pub fn claimable(&self, vested: u64) -> u64 {
        vested.saturating_sub(self.claimed)
    }
}

/// Instruction input for one beneficiary. Exactly one entitlement form
/// must be non-zero; a per-milestone `each_amount` wins over
/// `total_amount` and is only legal for milestone-bearing kinds.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BeneficiaryInput {
    pub address: Pubkey,
    pub total_amount: u64,
    pub each_amount: u64,
}

/// PDA holding the beneficiary ledger of one schedule.
#[account]
pub struct Beneficiaries {
    pub entries: Vec<BeneficiaryEntry>,
}

impl Beneficiaries {
    pub const MAX_SPACE: usize = 8 + // discriminator
        4 + MAX_BENEFICIARIES * BeneficiaryEntry::SIZE;

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, address: &Pubkey) -> Option<&BeneficiaryEntry> {
        self.entries.iter().find(|e| e.address == *address)
    }

    pub fn get_mut(&mut self, address: &Pubkey) -> Option<&mut BeneficiaryEntry> {
        self.entries.iter_mut().find(|e| e.address == *address)
    }
}

/// Entitlement for one input under the given schedule. A non-zero
/// `each_amount` becomes `each * milestone count`, so the ratio and
/// per-milestone vesting forms agree exactly from then on.
pub fn entitlement_from_input(
    schedule: &Schedule,
    input: &BeneficiaryInput,
) -> Result<u64, VestingError> {
    if input.each_amount == 0 && input.total_amount == 0 {
        return Err(VestingError::InvalidEntitlement);
    }
    if input.each_amount > 0 {
        if !schedule.kind.allows_each_amount() {
            return Err(VestingError::EachAmountNotAllowed);
        }
        return input
            .each_amount
            .checked_mul(schedule.milestones.len() as u64)
            .ok_or(VestingError::MathOverflow);
    }
    Ok(input.total_amount)
}

/// Append entries to the ledger, growing the schedule total by each
/// entitlement. Duplicates are rejected against both stored entries and
/// earlier inputs of the same batch.
pub fn add_beneficiaries(
    schedule: &mut Schedule,
    ledger: &mut Beneficiaries,
    inputs: &[BeneficiaryInput],
) -> Result<u64, VestingError> {
    if inputs.is_empty() {
        return Err(VestingError::NoBeneficiaries);
    }
    for input in inputs {
        if input.address == Pubkey::default() {
            return Err(VestingError::InvalidPubkey);
        }
        if ledger.get(&input.address).is_some() {
            return Err(VestingError::DuplicateBeneficiary);
        }
        if ledger.entries.len() >= MAX_BENEFICIARIES {
            return Err(VestingError::BeneficiaryListFull);
        }
        let total = entitlement_from_input(schedule, input)?;
        schedule.total_amount = schedule
            .total_amount
            .checked_add(total)
            .ok_or(VestingError::MathOverflow)?;
        ledger.entries.push(BeneficiaryEntry {
            address: input.address,
            total_amount: total,
            claimed: 0,
        });
    }
    Ok(inputs.len() as u64)
}

/// Delete entries, shrinking the schedule total by each unclaimed
/// remainder. Removal swaps with the last entry, so enumeration order is
/// unspecified after a removal.
pub fn remove_beneficiaries(
    schedule: &mut Schedule,
    ledger: &mut Beneficiaries,
    addresses: &[Pubkey],
) -> Result<u64, VestingError> {
    if addresses.is_empty() {
        return Err(VestingError::NoBeneficiaries);
    }
    for address in addresses {
        let idx = ledger
            .entries
            .iter()
            .position(|e| e.address == *address)
            .ok_or(VestingError::BeneficiaryNotFound)?;
        let entry = ledger.entries.swap_remove(idx);
        let remainder = entry
            .total_amount
            .checked_sub(entry.claimed)
            .ok_or(VestingError::MathOverflow)?;
        schedule.total_amount = schedule
            .total_amount
            .checked_sub(remainder)
            .ok_or(VestingError::MathOverflow)?;
    }
    Ok(addresses.len() as u64)
}
