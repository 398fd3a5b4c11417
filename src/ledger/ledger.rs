//! Keeps the accounts of every customer of the bank.
//!
//! Accounts are listed in the order they were created, which is also the
//! order the presentation layer renders them in.

use super::account::{Account, TransactionError};
use super::operation::Operation;
use super::{AccountId, ACCOUNT_ID_PREFIX};
use indexmap::IndexMap;

#[derive(Debug, Default)]
pub struct Ledger {
    accounts: IndexMap<AccountId, Account>,

    // Identifiers come from this counter rather than from the number of
    // accounts, so an identifier is never handed out twice, even after deletions.
    last_id: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new, empty account and return its identifier.
    pub fn create_account(&mut self) -> AccountId {
        self.last_id += 1;
        let account_id = format!("{}{}", ACCOUNT_ID_PREFIX, self.last_id);

        self.accounts.insert(account_id.clone(), Account::new());
        tracing::debug!(account = %account_id, "account created");

        account_id
    }

    pub fn account(&self, account_id: &str) -> Option<&Account> {
        self.accounts.get(account_id)
    }

    pub fn contains(&self, account_id: &str) -> bool {
        self.accounts.contains_key(account_id)
    }

    /// Apply an operation to an existing account.
    /// Returns `None` when there is no account with that identifier.
    pub fn apply(
        &mut self,
        account_id: &str,
        operation: &Operation,
    ) -> Option<Result<(), TransactionError>> {
        let account = self.accounts.get_mut(account_id)?;
        let result = account.apply(operation);

        match &result {
            Ok(()) => tracing::debug!(account = %account_id, ?operation, "operation applied"),
            Err(err) => tracing::debug!(account = %account_id, ?operation, %err, "operation rejected"),
        }

        Some(result)
    }

    /// Remove an account, keeping the creation order of the others.
    pub fn remove(&mut self, account_id: &str) -> Option<Account> {
        self.accounts.shift_remove(account_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AccountId, &Account)> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
