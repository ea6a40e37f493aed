use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use frontdesk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Front Desk Credibility Service",
    about = "Score guest credibility and gate cash payments from the command line or over HTTP",
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
    /// Work with credibility scores directly
    Credibility {
        #[command(subcommand)]
        command: CredibilityCommand,
    },
    /// Walk through the seeded front desk: guest scores and payment options per booking
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum CredibilityCommand {
    /// Score a booking-outcome summary
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
        Command::Credibility {
            command: CredibilityCommand::Score(args),
        } => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}
