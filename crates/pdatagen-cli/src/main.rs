//! pdata Go source generator.
//!
//! Regenerates the `generated_*.go` files of the pdata packages from the
//! built-in registry.
//!
//! # Examples
//!
//! ```bash
//! # Regenerate everything under ./pdata
//! pdatagen generate
//!
//! # Only the trace packages, into another checkout
//! pdatagen generate -o ../collector/pdata -p ptrace -p ptraceotlp
//!
//! # Report the written files
//! pdatagen generate --format json
//!
//! # Show which packages and structs exist
//! pdatagen list --format json
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use pdatagen_cli::commands::generate::GenerateOptions;
use pdatagen_cli::{ExitCode, OutputFormat, commands};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Generator for the pdata Go packages.
#[derive(Parser, Debug)]
#[command(name = "pdatagen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (generate prints a report only when this is given)
    #[arg(long = "format", global = true, value_enum)]
    format: Option<OutputFormat>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate implementation, test and internal wrapper files.
    ///
    /// Every registry package is generated unless `--package` narrows the
    /// selection. Existing files are overwritten.
    Generate {
        /// Root directory generated paths are joined onto (default: pdata)
        #[arg(short, long)]
        output_root: Option<PathBuf>,

        /// Package to generate; repeatable
        #[arg(short, long = "package", num_args = 1)]
        packages: Vec<String>,

        /// Render every file without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// List registry packages and their structs.
    List,

    /// Generate shell completions.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let exit_code = match execute_command(cli.command, cli.format) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::ERROR
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Initializes logging to stderr.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` applies, falling
/// back to warnings only so a successful generate stays silent.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Routes a parsed command to its handler.
fn execute_command(command: Commands, output_format: Option<OutputFormat>) -> Result<ExitCode> {
    match command {
        Commands::Generate {
            output_root,
            packages,
            dry_run,
        } => {
            let options = GenerateOptions {
                output_root,
                packages,
                dry_run,
            };
            commands::generate::run(&options, output_format)
        }
        Commands::List => commands::list::run(output_format.unwrap_or_default()),
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd)
        }
    }
}
