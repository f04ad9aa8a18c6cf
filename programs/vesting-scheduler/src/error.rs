use anchor_lang::prelude::*;

/// Custom error codes for the vesting scheduler.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Start time must be after 2024-01-01 00:00 UTC")]
    StartBeforeGenesis,

    #[msg("Start time must be less than end time")]
    InvalidTimeRange,

    #[msg("Periodic interval must be greater than zero")]
    InvalidInterval,

    #[msg("Schedule field list must have at least one item")]
    EmptyFieldList,

    #[msg("Schedule field value out of range")]
    FieldOutOfRange,

    #[msg("Schedule field list must be strictly ascending")]
    UnsortedFieldList,

    #[msg("Schedule extends past the supported horizon")]
    HorizonExceeded,

    #[msg("Empty vesting times")]
    NoMilestones,

    #[msg("Too many vesting times")]
    TooManyMilestones,

    #[msg("Timestamp precedes the genesis boundary")]
    TimeBeforeGenesis,

    #[msg("Duplicated beneficiary address")]
    DuplicateBeneficiary,

    #[msg("Vesting entry is not found")]
    BeneficiaryNotFound,

    #[msg("No beneficiary accounts supplied")]
    NoBeneficiaries,

    #[msg("Beneficiary list is full")]
    BeneficiaryListFull,

    #[msg("A beneficiary must have each_amount or total_amount")]
    InvalidEntitlement,

    #[msg("Cannot use each_amount with this schedule kind")]
    EachAmountNotAllowed,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Schedule does not vest an SPL token")]
    NotTokenSchedule,

    #[msg("Schedule does not vest native lamports")]
    NotNativeSchedule,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Math overflow")]
    MathOverflow,
}
