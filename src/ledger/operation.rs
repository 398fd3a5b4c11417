use super::{Amount, Rate};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operation {
    Deposit(Amount),     // Add a credit to the balance.
    Withdrawal(Amount),  // Add a debit to the balance, if the funds allow it.
    Interest(Rate),      // Credit the balance with `balance * rate`.
    Loan(Amount),        // Credit the balance and grow the outstanding loan.
}

impl Operation {
    // Amounts are rounded to a decimal precision of 4 on the way in.
    // Rates are kept as they are: rounding happens on the computed interest.
    pub fn deposit(amount: Amount) -> Self {
        Self::Deposit(amount.round_dp(super::DECIMAL_PRECISION))
    }

    pub fn withdrawal(amount: Amount) -> Self {
        Self::Withdrawal(amount.round_dp(super::DECIMAL_PRECISION))
    }

    pub fn interest(rate: Rate) -> Self {
        Self::Interest(rate)
    }

    pub fn loan(amount: Amount) -> Self {
        Self::Loan(amount.round_dp(super::DECIMAL_PRECISION))
    }
}

#[test]
// Decimal precision is 4 places. We should be unable to move more precise amounts.
fn test_operation_decimal_precision() {
    use rust_decimal_macros::dec;

    for (raw_amount, want_amount) in vec![
        (dec!(1.0), dec!(1.0)),
        (dec!(0.999999), dec!(1.0)),
        (dec!(1.0000001), dec!(1.0)),
        (dec!(1.2345), dec!(1.2345)),
        (dec!(1.23459), dec!(1.2346)),
    ] {
        assert_eq!(Operation::Deposit(want_amount), Operation::deposit(raw_amount));
        assert_eq!(Operation::Loan(want_amount), Operation::loan(raw_amount));
    }
}

#[test]
fn test_interest_rate_is_not_rounded() {
    use rust_decimal_macros::dec;

    assert_eq!(
        Operation::Interest(dec!(0.000001)),
        Operation::interest(dec!(0.000001))
    );
}
