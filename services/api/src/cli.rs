use crate::demo::{run_demo, run_eligibility_check, CheckArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use lending_care::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Lending CARE",
    about = "Run the customer intake service and loan eligibility tools from the command line",
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
    /// Work with the loan eligibility calculator
    Eligibility {
        #[command(subcommand)]
        command: EligibilityCommand,
    },
    /// Run a scripted end-to-end intake demo
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum EligibilityCommand {
    /// Check indicative eligibility and record the enquiry
    Check(CheckArgs),
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
        Command::Eligibility {
            command: EligibilityCommand::Check(args),
        } => run_eligibility_check(args),
        Command::Demo(args) => run_demo(args),
    }
}
