use crate::ledger::{operation::Operation, Amount};

use super::balance::Balance;

/// Note: I chose to keep errors simple here.
/// The account doesn't know its own identifier, so the caller is the one
/// adding context (e.g. which account was selected) when reporting them.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum TransactionError {
    /// Deposits, withdrawals and loans only accept strictly positive amounts.
    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    /// Funds in the account are insufficient for a withdrawal.
    #[error("not enough funds: balance is {balance}, requested {requested}")]
    NotEnoughFunds { balance: Amount, requested: Amount },

    /// Adding more money to the balance would overflow.
    #[error("amount overflows the balance")]
    Overflow,
}

/// A scheduled payment attached to an account.
///
/// Reserved: accounts carry a list of them, but no operation reads or writes it.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectDebit {
    pub payee: String,
    pub amount: Amount,
}

/// Account is a state-machine, to which you can apply operations.
///
/// Every time you apply an operation to the Account, it updates its own state
/// to be an accurate representation of the current balance and loan.
/// An operation that returns an error leaves the account untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Account {
    pub balance: Balance,

    // The loan only ever grows: there is no repayment.
    pub loan: Balance,

    pub direct_debits: Vec<DirectDebit>,
}

impl Account {
    pub fn new() -> Self {
        Self {
            balance: Balance::zero(),
            loan: Balance::zero(),
            direct_debits: Vec::new(),
        }
    }

    /// Current balance of the account, loans included.
    pub fn balance_amount(&self) -> Amount {
        self.balance.amount()
    }

    /// Sum of every loan taken on the account.
    pub fn loan_amount(&self) -> Amount {
        self.loan.amount()
    }

    pub fn apply(&mut self, operation: &Operation) -> Result<(), TransactionError> {
        match *operation {
            Operation::Deposit(amount) => self.apply_deposit(amount),
            Operation::Withdrawal(amount) => self.apply_withdrawal(amount),
            Operation::Interest(rate) => self.apply_interest(rate),
            Operation::Loan(amount) => self.apply_loan(amount),
        }
    }
}

/// Rejects zero and negative amounts.
pub(super) fn ensure_positive(amount: Amount) -> Result<(), TransactionError> {
    if amount.is_sign_negative() || amount.is_zero() {
        return Err(TransactionError::NonPositiveAmount);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::ledger::{
        account::account::{Account, Balance, TransactionError},
        operation::Operation,
    };
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_account_is_empty() {
        let acc = Account::new();
        assert_eq!(dec!(0), acc.balance_amount());
        assert_eq!(dec!(0), acc.loan_amount());
        assert!(acc.direct_debits.is_empty());
    }

    #[test]
    fn test_apply() {
        let mut acc = Account::new();

        acc.apply(&Operation::deposit(dec!(100)))
            .expect("should apply a deposit");
        assert_eq!(dec!(100), acc.balance_amount());

        acc.apply(&Operation::withdrawal(dec!(30)))
            .expect("should apply a withdrawal");
        assert_eq!(dec!(70), acc.balance_amount());

        acc.apply(&Operation::interest(dec!(0.01)))
            .expect("should apply interest");
        assert_eq!(dec!(70.70), acc.balance_amount());

        acc.apply(&Operation::loan(dec!(500)))
            .expect("should apply a loan");
        assert_eq!(dec!(570.70), acc.balance_amount());
        assert_eq!(dec!(500), acc.loan_amount());
    }

    #[test]
    fn test_apply_error_leaves_account_untouched() {
        let mut acc = Account {
            balance: Balance::new(dec!(10)),
            loan: Balance::new(dec!(5)),
            direct_debits: Vec::new(),
        };
        let before = acc.clone();

        for (operation, want) in vec![
            (Operation::deposit(dec!(0)), TransactionError::NonPositiveAmount),
            (Operation::withdrawal(dec!(-1)), TransactionError::NonPositiveAmount),
            (
                Operation::withdrawal(dec!(10.01)),
                TransactionError::NotEnoughFunds {
                    balance: dec!(10),
                    requested: dec!(10.01),
                },
            ),
            (Operation::loan(dec!(0)), TransactionError::NonPositiveAmount),
        ] {
            assert_eq!(Err(want), acc.apply(&operation));
            assert_eq!(before, acc);
        }
    }
}
