use crate::ledger::{account::Account, AccountId, Amount, Ledger};
use crate::state::Notification;

use serde::Serialize;
use std::io::Write;

// Balances are shown with cents, whatever precision they are kept at.
const DISPLAY_PRECISION: u32 = 2;

/// How the list of accounts is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// One `<account> - $<balance>` line per account.
    #[default]
    Text,
    /// An `account,balance,loan` CSV table.
    Csv,
}

#[derive(Serialize)]
struct AccountRecord<'a> {
    #[serde(rename = "account")]
    account_id: &'a str,

    balance: Amount,

    loan: Amount,
}

impl<'a> AccountRecord<'a> {
    fn new(account_id: &'a AccountId, acc: &Account) -> Self {
        Self {
            account_id,
            balance: for_display(acc.balance_amount()),
            loan: for_display(acc.loan_amount()),
        }
    }
}

// Rounds and pads to exactly two decimal places, e.g. 70.7 becomes 70.70.
fn for_display(amount: Amount) -> Amount {
    let mut amount = amount.round_dp(DISPLAY_PRECISION);
    amount.rescale(DISPLAY_PRECISION);
    amount
}

/// Writes every account of the ledger to the given stream, in creation order.
pub fn write_accounts(
    mut output_stream: impl Write,
    ledger: &Ledger,
    format: Format,
) -> Result<(), csv::Error> {
    match format {
        Format::Text => {
            for (account_id, account) in ledger.iter() {
                writeln!(
                    output_stream,
                    "{} - ${}",
                    account_id,
                    for_display(account.balance_amount())
                )?;
            }
        }
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(output_stream);
            for (account_id, account) in ledger.iter() {
                writer.serialize(AccountRecord::new(account_id, account))?;
            }
            writer.flush()?;
        }
    }

    Ok(())
}

pub fn write_notification(
    mut output_stream: impl Write,
    notification: &Notification,
) -> Result<(), std::io::Error> {
    writeln!(output_stream, "{}", notification)
}
