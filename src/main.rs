mod logging;

use bank_simulator::{config::Config, ledger::Rate, output::Format, run};
use clap::Parser;
use std::{fs::File, io, path::PathBuf, process::ExitCode};

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("failed to set up logging: {0}")]
    Logging(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Run(#[from] run::Error),
}

/// Simulate a bank: play a script of user actions against in-memory accounts.
///
/// The script is a CSV file with an `action,value` header. Actions are
/// create, select, amount, loan_amount, deposit, withdraw, interest, loan,
/// delete and show.
#[derive(Debug, Parser)]
#[command(name = "bank_simulator", version, about)]
struct Args {
    /// Path to the script; reads stdin when absent or `-`
    script: Option<PathBuf>,

    /// Rate used every time interest is applied
    #[arg(long, env = "BANK_SIMULATOR_INTEREST_RATE", default_value = "0.01")]
    interest_rate: Rate,

    /// How accounts are rendered
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// More output per occurrence: info, debug, trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            interest_rate: self.interest_rate,
            format: self.format,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match app(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn app(args: &Args) -> Result<(), Error> {
    logging::set_up(args.verbose)?;

    let config = args.config();
    tracing::debug!(?config, "starting");

    let stdout = io::stdout();
    let output = io::BufWriter::new(stdout.lock());

    match &args.script {
        Some(path) if path.as_os_str() != "-" => {
            let input = File::open(path).map_err(|source| Error::Open {
                path: path.clone(),
                source,
            })?;
            run::run(input, output, &config)?;
        }
        _ => {
            run::run(io::stdin().lock(), output, &config)?;
        }
    }

    Ok(())
}
