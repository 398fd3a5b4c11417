#[allow(clippy::module_inception)]
pub mod account;
pub mod balance;
mod deposit;
mod interest;
mod loan;
mod withdrawal;

pub use account::{Account, DirectDebit, TransactionError};
pub use balance::Balance;
