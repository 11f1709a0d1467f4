use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error};

use tally::pipeline::stages::{self, MapRequest, ReduceRequest, SplitRequest};
use tally::storage::{StorageConfig, StorageFactory};

/// Distributed word-count pipeline over a shared object store
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Split, map, and reduce word counts over a shared object store", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the stage trigger endpoints over HTTP
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8080")]
        port: u16,

        #[command(flatten)]
        store: StoreArgs,
    },
    /// Run the full pipeline once against the configured store
    Run {
        /// Store key of the source document
        #[arg(long)]
        key: String,

        /// Number of chunks to split into
        #[arg(short = 'n', long, default_value = "3")]
        chunks: usize,

        #[command(flatten)]
        store: StoreArgs,
    },
}

#[derive(Args)]
struct StoreArgs {
    /// Storage backend: memory, file, or s3
    #[arg(long, default_value = "file")]
    store: String,

    /// Root directory for the file backend
    #[arg(long, default_value = ".tally")]
    root: PathBuf,

    /// Bucket for the s3 backend
    #[arg(long)]
    bucket: Option<String>,

    /// Key prefix for the s3 backend
    #[arg(long)]
    prefix: Option<String>,

    /// Custom endpoint URL for the s3 backend
    #[arg(long)]
    endpoint: Option<String>,
}

impl StoreArgs {
    fn to_config(&self) -> anyhow::Result<StorageConfig> {
        match self.store.as_str() {
            "memory" => Ok(StorageConfig::Memory),
            "file" => Ok(StorageConfig::File {
                root: self.root.clone(),
            }),
            "s3" => {
                let bucket = self
                    .bucket
                    .clone()
                    .ok_or_else(|| anyhow::anyhow!("--bucket is required for the s3 backend"))?;
                Ok(StorageConfig::S3 {
                    bucket,
                    prefix: self.prefix.clone(),
                    endpoint: self.endpoint.clone(),
                })
            }
            other => anyhow::bail!("unknown storage backend: {other}"),
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("tally started with verbosity level: {}", cli.verbose);

    let result = match cli.command {
        Commands::Serve { port, store } => run_serve(port, store).await,
        Commands::Run { key, chunks, store } => run_pipeline(key, chunks, store).await,
    };

    if let Err(e) = result {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_serve(port: u16, store: StoreArgs) -> anyhow::Result<()> {
    let store = StorageFactory::from_config(&store.to_config()?).await?;
    tally::server::serve(store, port).await
}

/// Drive split, map per chunk, and reduce in sequence against the store.
///
/// A convenience driver, not a scheduler: each stage is still an ordinary
/// independent invocation, and the mappers run concurrently since chunks
/// share no state.
async fn run_pipeline(key: String, chunks: usize, store: StoreArgs) -> anyhow::Result<()> {
    let store = StorageFactory::from_config(&store.to_config()?).await?;

    let split = stages::split(
        store.as_ref(),
        &SplitRequest {
            document_key: key,
            chunk_count: chunks,
        },
    )
    .await?;

    let maps = split.chunk_keys.into_iter().map(|chunk_key| {
        let store = Arc::clone(&store);
        async move { stages::map(store.as_ref(), &MapRequest { chunk_key }).await }
    });
    let mapped = futures::future::try_join_all(maps).await?;
    let partial_result_keys = mapped.into_iter().map(|m| m.result_key).collect();

    let reduced = stages::reduce(store.as_ref(), &ReduceRequest { partial_result_keys }).await?;

    println!(
        "final result written to {} ({} distinct words)",
        reduced.final_result_key, reduced.distinct_words
    );
    Ok(())
}
