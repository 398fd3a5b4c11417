use crate::{
    config::Config,
    input::{self, Action},
    output,
    state::State,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write accounts: {0}")]
    Csv(#[from] csv::Error),
}

/// Play a script of user actions against a fresh state.
///
/// Notifications, and the account list for every `show` action, go to the
/// output stream as they happen. The account list is rendered one last time
/// once the script is over.
///
/// Rejected operations and malformed records don't stop the run: like the
/// buttons of a form, they simply don't do anything. The reason is logged.
pub fn run(
    input_stream: impl std::io::Read,
    mut output_stream: impl std::io::Write,
    config: &Config,
) -> Result<State, Error> {
    let mut state = State::new(config.interest_rate);

    for (line, action) in input::parse(input_stream) {
        match action {
            Ok(Action::Command(command)) => {
                tracing::trace!(line, ?command, "applying command");
                match state.update(command) {
                    Ok(Some(notification)) => {
                        tracing::info!(line, title = notification.title, "command applied");
                        output::write_notification(&mut output_stream, &notification)?;
                    }
                    Ok(None) => {}
                    Err(err) => tracing::warn!(line, %err, "command rejected"),
                }
            }
            Ok(Action::Show) => {
                output::write_accounts(&mut output_stream, &state.ledger, config.format)?;
            }
            Err(err) => tracing::warn!(line, %err, "skipping record"),
        }
    }

    output::write_accounts(&mut output_stream, &state.ledger, config.format)?;
    output_stream.flush()?;

    Ok(state)
}
