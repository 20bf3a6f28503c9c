use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use prswitch::Result;
use std::io;

#[derive(Parser)]
#[command(name = "prswitch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pull-request description switches", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run as a GitHub Action step (inputs from INPUT_* variables)
    Run(prswitch::cli::run::RunArgs),

    /// Print the switch report of a markdown document
    Report(prswitch::cli::report::ReportArgs),

    /// Sync switch markers of a markdown document with their checkboxes
    Rewrite(prswitch::cli::rewrite::RewriteArgs),

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    prswitch::action::logging::init(cli.verbose);

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{}", format!("Error: Failed to create tokio runtime: {}", e).red());
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run_async(cli)) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

async fn run_async(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run(args) => {
            prswitch::cli::run::run(args).await?;
        }

        Commands::Report(args) => {
            prswitch::cli::report::run(args)?;
        }

        Commands::Rewrite(args) => {
            prswitch::cli::rewrite::run(args)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "prswitch", &mut io::stdout());
        }
    }

    Ok(())
}
