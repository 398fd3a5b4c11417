//! A banking simulator: an in-memory ledger of accounts, driven by a script
//! of user actions.

pub mod config;
pub mod input;
pub mod ledger;
pub mod output;
pub mod run;
pub mod state;
