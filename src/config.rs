use crate::ledger::Rate;
use crate::output::Format;
use crate::state::DEFAULT_INTEREST_RATE;

/// Settings fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Rate applied by every "apply interest" action. Users can't change it.
    pub interest_rate: Rate,

    pub format: Format,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interest_rate: DEFAULT_INTEREST_RATE,
            format: Format::default(),
        }
    }
}
