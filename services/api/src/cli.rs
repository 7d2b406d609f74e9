use crate::demo::{run_demo, DemoArgs};
use crate::diagnose::{run_breeds, run_diagnose_dog, run_diagnose_roster};
use crate::diagnose::{BreedsArgs, DogArgs, RosterArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use uchinoko::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "uchinoko",
    about = "Diagnose dog temperament and training difficulty, or serve the dog profile API",
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
    /// Run the diagnosis for a single dog or a CSV roster
    Diagnose {
        #[command(subcommand)]
        command: DiagnoseCommand,
    },
    /// List the breed catalog, optionally filtered by size
    Breeds(BreedsArgs),
    /// Register a sample dog and print its share card
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum DiagnoseCommand {
    /// Diagnose one dog from command-line answers
    Dog(DogArgs),
    /// Diagnose every dog in a roster CSV export
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
        Command::Diagnose {
            command: DiagnoseCommand::Dog(args),
        } => run_diagnose_dog(args),
        Command::Diagnose {
            command: DiagnoseCommand::Roster(args),
        } => run_diagnose_roster(args),
        Command::Breeds(args) => run_breeds(args),
        Command::Demo(args) => run_demo(args),
    }
}
