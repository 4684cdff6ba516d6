use crate::report::{run_catalog, run_check, run_roster, CheckArgs, RosterArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ial_eligibility::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "IAL Mathematics Eligibility",
    about = "Check which IAL Mathematics qualifications a set of units can be cashed in for",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a single unit selection
    Check(CheckArgs),
    /// List the built-in units and qualifications
    Catalog,
    /// Evaluate every student in a roster CSV export
    Roster(RosterArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check(args) => run_check(args),
        Command::Catalog => {
            run_catalog();
            Ok(())
        }
        Command::Roster(args) => run_roster(args),
    }
}
