use crate::ledger::Amount;

use super::account::{ensure_positive, Account, TransactionError};

impl Account {
    // There is no credit limit and no repayment: a loan is money credited to
    // the balance, plus the same amount recorded as owed.
    pub(super) fn apply_loan(&mut self, amount: Amount) -> Result<(), TransactionError> {
        ensure_positive(amount)?;

        // Work on copies so an overflow on either side leaves the account as it was.
        let mut balance = self.balance.clone();
        let mut loan = self.loan.clone();
        balance.credit(amount)?;
        loan.credit(amount)?;

        self.balance = balance;
        self.loan = loan;

        Ok(())
    }
}
