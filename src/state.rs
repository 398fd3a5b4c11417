//! Application state, as seen by the presentation layer.
//!
//! The presentation layer owns nothing: it turns user actions into
//! [`Command`]s, hands them to [`State::update`], and renders whatever comes
//! back. That keeps every rule of the bank testable without any front end.

use crate::ledger::{
    account::TransactionError, operation::Operation, AccountId, Amount, Ledger, Rate,
    DECIMAL_PRECISION,
};
use std::fmt;
use std::str::FromStr;

/// Interest rate used when none is configured: 1% per application.
pub const DEFAULT_INTEREST_RATE: Rate = Rate::from_parts(1, 0, 0, false, 2);

/// A user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateAccount,
    /// Select the account the next operations act upon. An empty identifier
    /// clears the selection.
    SelectAccount(String),
    /// Raw text typed in the amount field, used by deposits and withdrawals.
    SetAmount(String),
    /// Raw text typed in the loan amount field.
    SetLoanAmount(String),
    Deposit,
    Withdraw,
    ApplyInterest,
    TakeLoan,
    DeleteAccount(AccountId),
}

/// Why a command was rejected. A rejected command never changes the state.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("no account selected")]
    NoAccountSelected,

    #[error("account {0} does not exist")]
    UnknownAccount(AccountId),

    #[error("{0:?} is not a valid amount")]
    InvalidAmount(String),

    #[error("account {account}: {source}")]
    Transaction {
        account: AccountId,
        #[source]
        source: TransactionError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// Transient message shown to the user after a command went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub description: String,
    pub status: Status,
}

impl Notification {
    fn success(title: &'static str, description: String) -> Self {
        Self {
            title,
            description,
            status: Status::Success,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} {}", self.status, self.title, self.description)
    }
}

#[derive(Debug)]
pub struct State {
    pub ledger: Ledger,
    pub selected: Option<AccountId>,
    pub amount: String,
    pub loan_amount: String,
    interest_rate: Rate,
}

impl Default for State {
    fn default() -> Self {
        Self::new(DEFAULT_INTEREST_RATE)
    }
}

impl State {
    pub fn new(interest_rate: Rate) -> Self {
        Self {
            ledger: Ledger::new(),
            selected: None,
            amount: String::new(),
            loan_amount: String::new(),
            interest_rate,
        }
    }

    pub fn interest_rate(&self) -> Rate {
        self.interest_rate
    }

    /// Apply a command to the state.
    ///
    /// Input commands (selection and amount fields) always succeed and produce
    /// no notification. Every other command returns either the notification
    /// to show, or the reason it was rejected.
    pub fn update(&mut self, command: Command) -> Result<Option<Notification>, Error> {
        let notification = match command {
            Command::CreateAccount => self.create_account(),
            Command::SelectAccount(account_id) => {
                let account_id = account_id.trim();
                self.selected = (!account_id.is_empty()).then(|| account_id.to_string());
                return Ok(None);
            }
            Command::SetAmount(amount) => {
                self.amount = amount;
                return Ok(None);
            }
            Command::SetLoanAmount(amount) => {
                self.loan_amount = amount;
                return Ok(None);
            }
            Command::Deposit => self.deposit()?,
            Command::Withdraw => self.withdraw()?,
            Command::ApplyInterest => self.apply_interest()?,
            Command::TakeLoan => self.take_loan()?,
            Command::DeleteAccount(account_id) => self.delete_account(account_id),
        };

        Ok(Some(notification))
    }

    fn create_account(&mut self) -> Notification {
        let account_id = self.ledger.create_account();

        Notification::success(
            "Account created.",
            format!("Account ID: {} has been successfully created.", account_id),
        )
    }

    fn deposit(&mut self) -> Result<Notification, Error> {
        let account_id = self.selected_account()?;
        let amount = parse_amount(&self.amount)?;
        self.apply(&account_id, Operation::deposit(amount))?;

        let entered = std::mem::take(&mut self.amount);
        Ok(Notification::success(
            "Deposit made.",
            format!(
                "Amount of ${} deposited to account {}",
                entered.trim(),
                account_id
            ),
        ))
    }

    fn withdraw(&mut self) -> Result<Notification, Error> {
        let account_id = self.selected_account()?;
        let amount = parse_amount(&self.amount)?;
        self.apply(&account_id, Operation::withdrawal(amount))?;

        let entered = std::mem::take(&mut self.amount);
        Ok(Notification::success(
            "Withdrawal made.",
            format!(
                "Amount of ${} withdrawn from account {}",
                entered.trim(),
                account_id
            ),
        ))
    }

    fn apply_interest(&mut self) -> Result<Notification, Error> {
        let account_id = self.selected_account()?;
        self.apply(&account_id, Operation::interest(self.interest_rate))?;

        Ok(Notification::success(
            "Interest applied.",
            format!("Interest applied to account {}", account_id),
        ))
    }

    fn take_loan(&mut self) -> Result<Notification, Error> {
        let account_id = self.selected_account()?;
        let amount = parse_amount(&self.loan_amount)?;
        self.apply(&account_id, Operation::loan(amount))?;

        let entered = std::mem::take(&mut self.loan_amount);
        Ok(Notification::success(
            "Loan taken.",
            format!(
                "Loan of ${} taken on account {}",
                entered.trim(),
                account_id
            ),
        ))
    }

    // Deleting never fails, even if there is nothing to delete.
    fn delete_account(&mut self, account_id: AccountId) -> Notification {
        if self.ledger.remove(&account_id).is_none() {
            tracing::debug!(account = %account_id, "deleted account did not exist");
        }
        if self.selected.as_deref() == Some(account_id.as_str()) {
            self.selected = None;
        }

        Notification {
            title: "Account deleted.",
            description: format!("Account ID: {} has been deleted successfully.", account_id),
            status: Status::Error,
        }
    }

    // The selection is only checked against the ledger here, when an
    // operation actually needs it.
    fn selected_account(&self) -> Result<AccountId, Error> {
        let account_id = self.selected.clone().ok_or(Error::NoAccountSelected)?;
        if !self.ledger.contains(&account_id) {
            return Err(Error::UnknownAccount(account_id));
        }

        Ok(account_id)
    }

    fn apply(&mut self, account_id: &str, operation: Operation) -> Result<(), Error> {
        self.ledger
            .apply(account_id, &operation)
            .ok_or_else(|| Error::UnknownAccount(account_id.to_string()))?
            .map_err(|source| Error::Transaction {
                account: account_id.to_string(),
                source,
            })
    }
}

/// Parse an amount typed by the user.
///
/// Amounts more precise than the ledger keeps are refused rather than
/// rounded, so the account checks exactly what was typed.
/// Whether the amount is positive is left to the account to decide.
pub fn parse_amount(raw: &str) -> Result<Amount, Error> {
    let amount =
        Amount::from_str(raw.trim()).map_err(|_| Error::InvalidAmount(raw.to_string()))?;
    if amount.normalize().scale() > DECIMAL_PRECISION {
        return Err(Error::InvalidAmount(raw.to_string()));
    }

    Ok(amount)
}
