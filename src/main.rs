use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use contract_size_diff::cmd::{self, CompareOptions};
use std::path::PathBuf;
use std::process;

/// Contract size diff reporter
///
/// Compares two contract size reports (e.g. `forge build --sizes --json`)
/// and renders a markdown summary for pull request comments.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a baseline report with a new report
    Compare {
        /// Baseline report (before the change)
        before: String,

        /// New report (after the change)
        after: String,

        /// Report heading (default: config file or "Contract sizes")
        #[arg(long)]
        heading: Option<String>,

        /// Fail if a contract in the new report exceeds its size limit
        #[arg(long)]
        check: bool,

        /// Output a JSON summary instead of markdown
        #[arg(long)]
        json: bool,

        /// Append a hidden marker so comment bots can find the report
        #[arg(long)]
        marker: bool,

        /// Also write the markdown report to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Set the `report` output of the current GitHub Actions step
        #[arg(long)]
        github_output: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compare {
            before,
            after,
            heading,
            check,
            json,
            marker,
            output,
            github_output,
        } => {
            let options = CompareOptions {
                heading,
                check,
                json,
                marker,
                output,
                github_output,
            };
            cmd::cmd_compare(&before, &after, &options)
        }
        Commands::Completions { shell } => {
            cmd::cmd_completions(shell, &mut Cli::command(), &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        use contract_size_diff::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
