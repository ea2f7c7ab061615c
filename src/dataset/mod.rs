//! Dataset model
//!
//! - **types**: `Customer`, `Transaction`, `Dataset`, `CustomerIndex`
//! - **fallback**: the built-in dataset used when loading fails

mod fallback;
mod types;

pub use fallback::fallback_dataset;
pub use types::{Customer, CustomerIndex, Dataset, Transaction, UNKNOWN_CUSTOMER};
