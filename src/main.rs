//! mdb - A Tiny In-Memory Key-Value Database
//!
//! This is the interactive shell. It loads the configuration, sets up
//! logging, and feeds every line read from stdin to the database.

use anyhow::Context;
use clap::Parser;
use mdb::{shell, Config, Database};
use std::io::BufReader;
use std::path::PathBuf;
use tokio::signal;
use tracing::{info, warn};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "mdb", author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, env = "MDB_CONFIG_PATH")]
    config: Option<PathBuf>,
}

fn print_banner() {
    println!(
        r#"
mdb v{} - In-Memory Key-Value Database
──────────────────────────────────────────
Commands: SET key value | GET key | DEL key   (keys may contain *)
Use Ctrl+C or Ctrl+D to exit.
"#,
        mdb::VERSION
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    let config = Config::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;

    // Set up logging
    mdb::logging::init(&config.logger);

    print_banner();

    let db = Database::new();
    info!("Database started. Waiting for commands...");

    let lines = shell::spawn_line_reader(BufReader::new(std::io::stdin()))
        .context("failed to start stdin reader")?;
    let mut stdout = tokio::io::stdout();

    shell::run(&db, lines, &mut stdout, shutdown_signal())
        .await
        .context("shell I/O failed")?;

    let stats = db.storage().stats();
    info!(
        keys = stats.keys,
        gets = stats.get_ops,
        sets = stats.set_ops,
        dels = stats.del_ops,
        "Session finished"
    );
    Ok(())
}

/// Resolves on Ctrl+C. Never resolves if the handler cannot be installed.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
