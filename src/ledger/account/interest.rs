use crate::ledger::{Rate, DECIMAL_PRECISION};

use super::account::{Account, TransactionError};

impl Account {
    // Interest compounds: every call is computed on the current balance,
    // including what previous calls added and any loan that was taken.
    pub(super) fn apply_interest(&mut self, rate: Rate) -> Result<(), TransactionError> {
        let interest = self
            .balance
            .amount()
            .checked_mul(rate)
            .ok_or(TransactionError::Overflow)?
            .round_dp(DECIMAL_PRECISION);

        if interest.is_sign_negative() {
            self.balance.debit(-interest)
        } else {
            self.balance.credit(interest)
        }
    }
}

#[cfg(test)]
mod interest_tests {
    use crate::ledger::account::balance::Balance;

    use super::Account;
    use rust_decimal_macros::dec;

    fn account_with(balance: rust_decimal::Decimal) -> Account {
        Account {
            balance: Balance::new(balance),
            ..Account::new()
        }
    }

    #[test]
    fn test_interest_ok() {
        let mut acc = account_with(dec!(100));

        assert_eq!(Ok(()), acc.apply_interest(dec!(0.01)));
        assert_eq!(dec!(101.0), acc.balance_amount());
    }

    #[test]
    fn test_interest_compounds() {
        let mut acc = account_with(dec!(100));

        acc.apply_interest(dec!(0.01)).unwrap();
        acc.apply_interest(dec!(0.01)).unwrap();
        assert_eq!(dec!(102.01), acc.balance_amount());
    }

    #[test]
    fn test_interest_on_empty_account() {
        let mut acc = Account::new();

        assert_eq!(Ok(()), acc.apply_interest(dec!(0.01)));
        assert_eq!(dec!(0), acc.balance_amount());
    }

    #[test]
    fn test_interest_is_rounded() {
        let mut acc = account_with(dec!(0.3333));

        acc.apply_interest(dec!(0.01)).unwrap();
        // 0.3333 * 0.01 = 0.003333, kept at 4 decimal places.
        assert_eq!(dec!(0.3366), acc.balance_amount());
    }

    #[test]
    fn test_negative_rate_debits() {
        let mut acc = account_with(dec!(200));

        acc.apply_interest(dec!(-0.5)).unwrap();
        assert_eq!(dec!(100), acc.balance_amount());
    }

    #[test]
    fn test_interest_does_not_touch_loan() {
        let mut acc = Account {
            balance: Balance::new(dec!(500)),
            loan: Balance::new(dec!(500)),
            direct_debits: Vec::new(),
        };

        acc.apply_interest(dec!(0.01)).unwrap();
        assert_eq!(dec!(505), acc.balance_amount());
        assert_eq!(dec!(500), acc.loan_amount());
    }
}
