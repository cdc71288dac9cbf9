use crate::demo::{run_demo, run_receipt, DemoArgs, ReceiptArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use goldpro::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "GoldPro Appraisal Suite",
    about = "Run the gold-loan appraisal service and receipt tooling from the command line",
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
    /// Compose and print a valuation receipt from a CSV article sheet
    Receipt(ReceiptArgs),
    /// Run an end-to-end CLI demo over a seeded appraisal session
    Demo(DemoArgs),
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
        Command::Receipt(args) => run_receipt(args),
        Command::Demo(args) => run_demo(args),
    }
}
