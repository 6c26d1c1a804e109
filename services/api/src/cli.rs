use crate::render::{run_render, run_score, RenderArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use compliance_kit::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "AI Compliance Kit",
    about = "Sell and generate bilingual AI compliance document packages",
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
    /// Render a package from a questionnaire JSON file without checkout
    Render(RenderArgs),
    /// Print the risk score for a set of answers
    Score(ScoreArgs),
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
        Command::Render(args) => run_render(args),
        Command::Score(args) => {
            run_score(args);
            Ok(())
        }
    }
}
