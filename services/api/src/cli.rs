use crate::report::{run_portfolio_report, PortfolioReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rentroll::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Rent Roll",
    about = "Resolve unit occupancy and revenue for property dashboards",
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
    /// Summarize occupancy and revenue for a rent roll
    Portfolio {
        #[command(subcommand)]
        command: PortfolioCommand,
    },
}

#[derive(Subcommand, Debug)]
enum PortfolioCommand {
    /// Print a portfolio summary from a rent-roll CSV export
    Report(PortfolioReportArgs),
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
        Command::Portfolio {
            command: PortfolioCommand::Report(args),
        } => run_portfolio_report(args),
    }
}
