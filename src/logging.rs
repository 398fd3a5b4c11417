use tracing_subscriber::filter::{EnvFilter, ParseError};

static CRATE_NAME: &str = env!("CARGO_CRATE_NAME");

/// Logs go to stderr, so they never mix with notifications and accounts.
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn set_up(verbosity: u8) -> Result<(), ParseError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new("warn")?
            .add_directive(format!("{}={}", CRATE_NAME, max_level(verbosity)).parse()?),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(true)
        .init();

    Ok(())
}

fn max_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
