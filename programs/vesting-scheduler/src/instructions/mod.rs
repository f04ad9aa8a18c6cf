pub mod add_beneficiaries;
pub mod claim;
pub mod claim_native;
pub mod deposit;
pub mod deposit_native;
pub mod emit_claim_quote;
pub mod initialize;
pub mod register_native_schedule;
pub mod register_schedule;
pub mod remove_beneficiaries;
pub mod set_admin;
pub mod withdraw;
pub mod withdraw_native;

pub use add_beneficiaries::*;
pub use claim::*;
pub use claim_native::*;
pub use deposit::*;
pub use deposit_native::*;
pub use emit_claim_quote::*;
pub use initialize::*;
pub use register_native_schedule::*;
pub use register_schedule::*;
pub use remove_beneficiaries::*;
pub use set_admin::*;
pub use withdraw::*;
pub use withdraw_native::*;
