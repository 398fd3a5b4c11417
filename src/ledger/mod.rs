pub mod account;
pub mod ledger;
pub mod operation;

pub use ledger::Ledger;

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability.
// Consider the following, when creating the ledger map:
// (1) accounts: IndexMap<String, Account>
// (2) accounts: IndexMap<AccountId, Account>
// Implementation (1) would most likely need comments, and could be confusing.
// Implementation (2) is self-explanatory.
pub type AccountId = String;

// I decided to use a decimal library instead of the built-in f64 type, to be
// safer when dealing with money, and making the decimal precision easier to
// deal with.
pub type Amount = rust_decimal::Decimal;
pub type Rate = rust_decimal::Decimal;

/// Number of decimal places amounts are kept at.
pub const DECIMAL_PRECISION: u32 = 4;

/// Prefix of every generated account identifier, e.g. `acc-1`.
pub const ACCOUNT_ID_PREFIX: &str = "acc-";
