use crate::commands::{run_catalog, run_evaluate, run_export, CatalogArgs, EvaluateArgs, ExportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ecrp::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ECR-P Appraisal",
    about = "Appraise risk of bias in policy recommendations from the command line or over HTTP",
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
    /// Evaluate an answer sheet and print the appraisal report
    Evaluate(EvaluateArgs),
    /// Convert a saved report JSON document into the CSV export
    Export(ExportArgs),
    /// Print the question catalog
    Catalog(CatalogArgs),
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
        Command::Evaluate(args) => run_evaluate(args),
        Command::Export(args) => run_export(args),
        Command::Catalog(args) => run_catalog(args),
    }
}
