pub mod beneficiaries;
pub mod registry;
pub mod schedule;

pub use beneficiaries::*;
pub use registry::*;
pub use schedule::*;
