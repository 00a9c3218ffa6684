//! Command-line interface for mysql-connect
//!
//! Credentials always come from `MYSQL_USERNAME` and `MYSQL_PASSWORD`.
//!
//! # Usage Examples
//!
//! ```bash
//! # Print the connection descriptor for a database
//! MYSQL_USERNAME=alice MYSQL_PASSWORD=secret mysql-connect dsn --database shop
//!
//! # Check that the server accepts the credentials
//! mysql-connect --host db.internal --port 3306 ping --database shop
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use mysql_config::{ConfigPersistence, MySQLConfig, DEFAULT_HOST, DEFAULT_PORT};

#[derive(Parser)]
#[command(name = "mysql-connect")]
#[command(about = "Build and check MySQL connection settings from the environment")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    server: ServerOpts,

    #[command(subcommand)]
    command: Commands,
}

/// Network location and logging options
#[derive(Args, Clone, Debug)]
struct ServerOpts {
    /// MySQL host
    #[arg(long, default_value = DEFAULT_HOST, env = "MYSQL_HOST")]
    host: String,

    /// MySQL port
    #[arg(long, default_value = DEFAULT_PORT, env = "MYSQL_PORT")]
    port: String,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Subcommand, Clone, Debug)]
enum Commands {
    /// Print the connection descriptor
    Dsn {
        /// Database name; empty for a server-level connection
        #[arg(long, default_value = "")]
        database: String,
    },
    /// Open a pool and ping the server
    Ping {
        /// Database name; empty for a server-level connection
        #[arg(long, default_value = "")]
        database: String,
    },
    /// Load the configuration from a file
    Load {
        #[arg(long)]
        file: PathBuf,
    },
    /// Save the configuration to a file
    Save {
        #[arg(long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let default_level = if cli.server.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();

    let config = MySQLConfig::new()
        .context("Failed to read MySQL credentials")?
        .with_host(cli.server.host)
        .with_port(cli.server.port)
        .with_logging(cli.server.verbose);

    let output = execute(cli.command, config).await?;
    println!("{output}");
    Ok(())
}

/// Run a subcommand against `config` and return the text to print.
async fn execute(command: Commands, mut config: MySQLConfig) -> anyhow::Result<String> {
    match command {
        Commands::Dsn { database } => Ok(config.dsn(&database)),
        Commands::Ping { database } => {
            let pool = config
                .open(&database)
                .context("Failed to create MySQL connection pool")?;
            let policy = pool.policy();
            tracing::info!(
                "Pool policy: max lifetime {:?}, max open {}, max idle {}",
                policy.max_lifetime,
                policy.max_open,
                policy.max_idle
            );
            pool.ping()
                .await
                .with_context(|| format!("Failed to ping {}:{}", config.host(), config.port()))?;
            pool.disconnect()
                .await
                .context("Failed to disconnect pool")?;
            Ok(format!("{}:{} is reachable", config.host(), config.port()))
        }
        Commands::Load { file } => {
            config
                .load(&file)
                .with_context(|| format!("Failed to load config from {}", file.display()))?;
            Ok(format!("Loaded config from {}", file.display()))
        }
        Commands::Save { file } => {
            config
                .save(&file)
                .with_context(|| format!("Failed to save config to {}", file.display()))?;
            Ok(format!("Saved config to {}", file.display()))
        }
    }
}
