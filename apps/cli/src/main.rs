//! # tilequote
//!
//! Prices tiling jobs from JSON job files and keeps presets and saved
//! quotes in a local SQLite database.

use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use tilequote_cli::commands::{self, QuoteFormat, ShareChannel};
use tilequote_cli::{init_tracing, AppConfig, CliResult};
use tilequote_db::{Database, DbConfig};

#[derive(Parser)]
#[command(name = "tilequote")]
#[command(about = "Tiling quote calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a job file
    Quote {
        /// Path to the job JSON file
        job: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = QuoteFormat::Breakdown)]
        format: QuoteFormat,
        /// Shorthand for --format json
        #[arg(long, conflicts_with_all = ["format", "message"])]
        json: bool,
        /// Shorthand for --format message
        #[arg(long, conflicts_with = "format")]
        message: bool,
    },
    /// Print a WhatsApp or email link carrying the customer message
    Share {
        #[arg(value_enum)]
        channel: ShareChannel,
        /// Path to the job JSON file
        job: PathBuf,
    },
    /// Write a new job file
    New {
        /// Path of the job file to create
        job: PathBuf,
        /// Number of rooms to start with
        #[arg(long, default_value_t = 1)]
        rooms: usize,
    },
    /// Read a number from a spoken transcript
    Voice {
        transcript: String,
        /// Treat the transcript as text (e.g. a room name)
        #[arg(long)]
        text: bool,
    },
    /// Snapshot a job file into the saved quotes
    Save {
        /// Path to the job JSON file
        job: PathBuf,
    },
    /// Saved quotes
    #[command(subcommand)]
    Quotes(QuoteCommands),
    /// Named rate sheets
    #[command(subcommand)]
    Presets(PresetCommands),
    /// The working document kept between runs
    #[command(subcommand)]
    Workspace(WorkspaceCommands),
}

#[derive(Subcommand)]
enum QuoteCommands {
    /// List saved quotes, newest first
    List,
    /// Recompute and print a saved quote
    Show {
        id: i64,
        #[arg(long, value_enum, default_value_t = QuoteFormat::Breakdown)]
        format: QuoteFormat,
    },
    /// Write a saved quote back out as a job file
    Load { id: i64, out: PathBuf },
    /// Delete a saved quote
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum PresetCommands {
    /// Save a job file's rates under a name
    Save { name: String, job: PathBuf },
    /// List presets by name
    List,
    /// Replace a job file's rates with a preset
    Apply { name: String, job: PathBuf },
    /// Delete a preset
    Delete { name: String },
}

#[derive(Subcommand)]
enum WorkspaceCommands {
    /// Store a job file as the working document
    Store { job: PathBuf },
    /// Write the working document to a job file
    Load { out: PathBuf },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<String> {
    let config = AppConfig::from_env()?;
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Quote {
            job,
            format,
            json,
            message,
        } => {
            let format = if json {
                QuoteFormat::Json
            } else if message {
                QuoteFormat::Message
            } else {
                format
            };
            let doc = commands::read_document(&job)?;
            commands::render_quote(&doc, format, &config, today)
        }
        Commands::Share { channel, job } => {
            let doc = commands::read_document(&job)?;
            commands::share_link(&doc, channel, &config, today)
        }
        Commands::New { job, rooms } => {
            commands::write_document(&job, &commands::new_document(rooms))?;
            Ok(format!("Wrote {} with {rooms} rooms", job.display()))
        }
        Commands::Voice { transcript, text } => commands::voice(&transcript, !text),
        Commands::Save { job } => {
            let doc = commands::read_document(&job)?;
            let db = open_database(&config).await?;
            commands::save_quote(&db, &doc, Utc::now()).await
        }
        Commands::Quotes(cmd) => {
            let db = open_database(&config).await?;
            match cmd {
                QuoteCommands::List => commands::list_quotes(&db).await,
                QuoteCommands::Show { id, format } => {
                    commands::show_quote(&db, id, format, &config).await
                }
                QuoteCommands::Load { id, out } => {
                    let doc = commands::load_quote(&db, id).await?;
                    commands::write_document(&out, &doc)?;
                    Ok(format!("Wrote quote {id} to {}", out.display()))
                }
                QuoteCommands::Delete { id } => commands::delete_quote(&db, id).await,
            }
        }
        Commands::Presets(cmd) => {
            let db = open_database(&config).await?;
            match cmd {
                PresetCommands::Save { name, job } => {
                    let doc = commands::read_document(&job)?;
                    commands::save_preset(&db, &name, &doc, Utc::now()).await
                }
                PresetCommands::List => commands::list_presets(&db).await,
                PresetCommands::Apply { name, job } => {
                    let mut doc = commands::read_document(&job)?;
                    commands::apply_preset(&db, &name, &mut doc).await?;
                    commands::write_document(&job, &doc)?;
                    Ok(format!("Applied rate preset '{}' to {}", name.trim(), job.display()))
                }
                PresetCommands::Delete { name } => commands::delete_preset(&db, &name).await,
            }
        }
        Commands::Workspace(cmd) => {
            let db = open_database(&config).await?;
            match cmd {
                WorkspaceCommands::Store { job } => {
                    let doc = commands::read_document(&job)?;
                    commands::store_workspace(&db, &doc, Utc::now()).await
                }
                WorkspaceCommands::Load { out } => {
                    let doc = commands::load_workspace(&db).await?;
                    commands::write_document(&out, &doc)?;
                    Ok(format!("Wrote working document to {}", out.display()))
                }
            }
        }
    }
}

async fn open_database(config: &AppConfig) -> CliResult<Database> {
    let path = config.resolve_database_path()?;
    info!(path = %path.display(), "Opening database");
    Ok(Database::new(DbConfig::new(path)).await?)
}
