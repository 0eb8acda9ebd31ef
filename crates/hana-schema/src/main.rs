//! hana-schema CLI
//!
//! Command-line tool for previewing the DDL generated for schema operations.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use hana_schema::prelude::*;

/// Schema-change to SQL translation for SAP HANA.
#[derive(Parser)]
#[command(name = "hana-schema")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Dialect configuration file (JSON).
    #[arg(short, long, env = "HANA_SCHEMA_CONFIG")]
    config: Option<PathBuf>,

    /// Storage kind for tables without a per-model override.
    #[arg(long, env = "HANA_DEFAULT_MODEL_STORE")]
    default_store: Option<StorageKind>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the SQL for a JSON array of schema operations.
    Sql {
        /// File containing the operations.
        #[arg(short, long)]
        operations: PathBuf,
    },

    /// Print the storage kind new tables for each model receive.
    ResolveStore {
        /// Model names.
        #[arg(required = true)]
        models: Vec<String>,
    },

    /// Print the SQL literal for a bare JSON scalar.
    Quote {
        /// JSON value, e.g. `"it's"`, `42` or `true`.
        value: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "Loading dialect configuration");
            DialectConfig::load(path)?
        }
        None => DialectConfig::default(),
    };
    if let Some(kind) = cli.default_store {
        config = config.with_default_store(kind);
    }
    let dialect = HanaDialect::new(config);
    debug!(
        default_store = %dialect.config().storage.default_kind(),
        overrides = dialect.config().storage.overrides().len(),
        "Dialect configured"
    );

    match cli.command {
        Commands::Sql { operations } => {
            let content = std::fs::read_to_string(&operations)?;
            let operations: Vec<OperationDescriptor> = serde_json::from_str(&content)?;
            let mut editor = SchemaEditor::new(dialect, Vec::new()).collect_sql(true);
            info!(
                count = operations.len(),
                dialect = editor.dialect().name(),
                "Generating SQL"
            );
            editor.apply_all(&operations)?;
            for sql in editor.collected() {
                println!("{sql};");
            }
        }

        Commands::ResolveStore { models } => {
            for model in &models {
                println!("{model}: {}", dialect.storage_kind(model));
            }
        }

        Commands::Quote { value } => {
            let value: serde_json::Value = serde_json::from_str(&value)?;
            let literal = LiteralValue::try_from(&value)?;
            println!("{}", dialect.quote_value(&literal));
        }
    }

    Ok(())
}
