use crate::ledger::Amount;

use super::account::TransactionError;

/// A balance is the net result of credits (adds money to the balance)
/// and debits (remove money from the balance).
///
/// Only the net amount is kept, so a long series of credits and debits
/// can't overflow while the balance itself stays small.
#[derive(Debug, Clone, PartialEq)]
pub struct Balance {
    amount: Amount,
}

impl Balance {
    pub const fn new(amount: Amount) -> Self {
        Self { amount }
    }

    pub const fn zero() -> Self {
        Self::new(Amount::ZERO)
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn credit(&mut self, amount: Amount) -> Result<(), TransactionError> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(TransactionError::Overflow)?;

        Ok(())
    }

    pub fn debit(&mut self, amount: Amount) -> Result<(), TransactionError> {
        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(TransactionError::Overflow)?;

        Ok(())
    }
}

impl Default for Balance {
    fn default() -> Self {
        Self::zero()
    }
}
