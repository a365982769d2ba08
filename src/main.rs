mod db;
mod error;
mod fetch;
mod parser;
mod settings;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::settings::Settings;

#[derive(Parser)]
#[command(
    name = "gen_table",
    about = "Import the Unicode NamesList into a local SQLite table"
)]
struct Cli {
    /// Override the source URL for NamesList.txt
    #[arg(long)]
    url: Option<String>,
    /// Override the destination database path
    #[arg(long)]
    db: Option<PathBuf>,
    /// Skip malformed lines with a warning instead of aborting
    #[arg(long)]
    lenient: bool,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut settings = Settings::load()?;
    if let Some(url) = cli.url {
        settings.source_url = url;
    }
    if let Some(db) = cli.db {
        settings.db_path = db;
    }
    if cli.lenient {
        settings.lenient = true;
    }

    info!(url = %settings.source_url, db = ?settings.db_path, "Starting import");

    let lines = fetch::fetch_lines(&settings.source_url)?;
    let records = parser::records(lines, settings.lenient);

    if let Some(dir) = settings.db_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
    }
    let conn = db::connect(&settings.db_path)?;
    let count = db::load(&conn, records)?;

    println!("Read {} entries.", count);
    Ok(())
}
