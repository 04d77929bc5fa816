//! Hospital CLI
//!
//! Creates the hospital tables and fills them with linked sample data

use clap::{Parser, Subcommand, ValueEnum};
use hospital_core::logging_facility::{self, Profile};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "hospital")]
#[command(about = "Hospital records store - schema setup and sample data", long_about = None)]
struct Cli {
    /// Path to the SQLite store
    #[arg(long, global = true, default_value = hospital_store::db::DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Log output format (written to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Pretty => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the tables and insert one linked set of sample rows (default)
    Setup,
    /// Create the tables only
    Init,
    /// Print every table as JSON
    Dump,
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_format.into());

    let result = match cli.command.unwrap_or(Commands::Setup) {
        Commands::Setup => commands::setup::execute(&cli.db),
        Commands::Init => commands::init::execute(&cli.db),
        Commands::Dump => commands::dump::execute(&cli.db),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
