use crate::state::Command;

use serde::Deserialize;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("malformed record: {0}")]
    Csv(String), // CSV is malformed

    #[error("invalid action: {0}")]
    Format(String), // Data format is incorrect
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<<ActionRecord as TryInto<Action>>::Error> for Error {
    fn from(err: <ActionRecord as TryInto<Action>>::Error) -> Self {
        Self::Format(err.to_string())
    }
}

/// Something the user did: either a command for the bank, or a request to
/// look at the accounts.
#[derive(Debug, PartialEq)]
pub enum Action {
    Command(Command),
    Show,
}

/// One record of a script, along with the line it starts on when known.
pub type Line = (Option<u64>, Result<Action, Error>);

// A script is read lazily: every action is applied before the next record
// is read, the same way a user would click one button at a time.
// Bad records are reported and the caller decides whether to keep going.
//
// Blank lines are skipped by the reader, so line numbers come from the
// record positions rather than from counting records.
pub fn parse(input: impl std::io::Read) -> impl Iterator<Item = Line> {
    let buffered = std::io::BufReader::new(input);
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(buffered);

    reader.into_records().map(convert)
}

// Convert from a csv record into an action result.
//
// Records are deserialised by position rather than by header name, so that
// rows without a value (e.g. `create`) don't need a trailing comma.
fn convert(record: Result<csv::StringRecord, csv::Error>) -> Line {
    let line = match &record {
        Ok(record) => record.position().map(csv::Position::line),
        Err(err) => err.position().map(csv::Position::line),
    };

    (line, record.map_err(Error::from).and_then(into_action))
}

fn into_action(record: csv::StringRecord) -> Result<Action, Error> {
    let record: ActionRecord = record.deserialize(None)?;
    Ok(record.try_into()?)
}

// I have an ActionRecord type because I can't directly deserialise into my "domain" type, i.e. Command.
// See https://github.com/BurntSushi/rust-csv/issues/211.
//
// Besides, Command makes no assumption on how the actions are actually
// formatted, so both the state and parsing are easier to maintain.
#[derive(Debug, Deserialize)]
pub struct ActionRecord {
    action: ActionRecordType,

    #[serde(default)]
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionRecordType {
    Create,
    Select,
    Amount,
    LoanAmount,
    Deposit,
    Withdraw,
    Interest,
    Loan,
    Delete,
    Show,
}

impl TryFrom<ActionRecord> for Action {
    type Error = &'static str;
    fn try_from(record: ActionRecord) -> Result<Self, Self::Error> {
        let value = record.value;
        let command = match record.action {
            ActionRecordType::Create => Command::CreateAccount,
            // Selecting nothing is how a user clears the selection.
            ActionRecordType::Select => Command::SelectAccount(value.unwrap_or_default()),
            // Amount fields hold raw text; an empty field is a valid input.
            ActionRecordType::Amount => Command::SetAmount(value.unwrap_or_default()),
            ActionRecordType::LoanAmount => Command::SetLoanAmount(value.unwrap_or_default()),
            ActionRecordType::Deposit => Command::Deposit,
            ActionRecordType::Withdraw => Command::Withdraw,
            ActionRecordType::Interest => Command::ApplyInterest,
            ActionRecordType::Loan => Command::TakeLoan,
            ActionRecordType::Delete => Command::DeleteAccount(match value {
                Some(account_id) => account_id,
                None => return Err("missing account for delete"),
            }),
            ActionRecordType::Show => return Ok(Self::Show),
        };

        Ok(Self::Command(command))
    }
}
