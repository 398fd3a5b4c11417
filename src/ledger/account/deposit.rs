use crate::ledger::Amount;

use super::account::{ensure_positive, Account, TransactionError};

impl Account {
    pub(super) fn apply_deposit(&mut self, amount: Amount) -> Result<(), TransactionError> {
        ensure_positive(amount)?;

        self.balance.credit(amount)
    }
}
