use clap::{ArgAction, Parser, Subcommand};
use commands::{config, fetch};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "wantedlist")]
#[command(about = "wantedlist - Turn a CouchPotato wanted list into download pipeline entries")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Path to the config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Also write logs to this file (rotated daily)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the wanted list and print the resulting entries
    #[command(long_about = "Fetch active movies from the CouchPotato wanted list and print them as entries. With include_data enabled in the config, quality profiles are fetched too and translated into quality requirements.")]
    Fetch {
        /// Test mode: log every produced entry
        #[arg(long, action = ArgAction::SetTrue)]
        test: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration (masks the API key)
    Show {
        /// Show the API key unmasked
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },

    /// Write a new config file
    Init {
        /// Scheme, host and optional path of the CouchPotato server
        #[arg(long)]
        base_url: String,

        /// CouchPotato API key
        #[arg(long)]
        api_key: String,

        /// TCP port of the CouchPotato server
        #[arg(long, default_value_t = wanted_config::default_port())]
        port: u16,

        /// Fetch quality profiles and translate them into quality requirements
        #[arg(long, action = ArgAction::SetTrue)]
        include_data: bool,

        /// Overwrite an existing config file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging_with_file(cli.verbose, cli.quiet, cli.log_file.clone())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Fetch { test } => fetch::run_fetch(cli.config, test, &output).await,
        Commands::Config { cmd } => config::run_config(cmd, cli.config, &output),
    }
}
