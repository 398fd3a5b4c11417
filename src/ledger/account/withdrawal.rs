use crate::ledger::Amount;

use super::account::{ensure_positive, Account, TransactionError};

impl Account {
    pub(super) fn apply_withdrawal(&mut self, amount: Amount) -> Result<(), TransactionError> {
        ensure_positive(amount)?;

        let balance = self.balance.amount();
        if amount > balance {
            return Err(TransactionError::NotEnoughFunds {
                balance,
                requested: amount,
            });
        }

        self.balance.debit(amount)
    }
}
