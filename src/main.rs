use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use file_tree_builder::config::{settings, AppConfig};
use file_tree_builder::core::{run_traversal_to, Mode};

/// Dump a directory hierarchy and selected file contents into a single text artifact.
#[derive(Parser, Debug)]
#[command(name = "file-tree-builder", version, about)]
struct Args {
    /// Root directory to scan. Defaults to the last scanned directory.
    root: Option<PathBuf>,

    /// Filtering mode.
    #[arg(short, long, value_enum, default_value = "classic")]
    mode: Mode,

    /// `|`-separated folder/file names: ignored in classic mode, targeted in
    /// target mode. Classic mode falls back to the configured defaults.
    #[arg(short, long)]
    items: Option<String>,

    /// `|`-separated extensions with the leading dot (e.g. `.rs|.md`).
    /// Classic mode falls back to the configured defaults.
    #[arg(short, long)]
    extensions: Option<String>,

    /// Artifact path. Defaults to the configured filename in the working
    /// directory.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut config = AppConfig::load().unwrap_or_default();

    let root = args
        .root
        .or_else(|| config.last_directory.clone())
        .context("no directory given and no previous run to fall back to")?;

    // Classic filtering (and its hierarchy-only variant) pre-fills the ignore
    // fields from the config; target mode starts unrestricted.
    let (items, extensions) = match args.mode {
        Mode::Classic | Mode::NoContent => (
            args.items.unwrap_or_else(|| config.default_ignore_items.clone()),
            args.extensions
                .unwrap_or_else(|| config.default_ignore_extensions.clone()),
        ),
        Mode::Target => (
            args.items.unwrap_or_default(),
            args.extensions.unwrap_or_default(),
        ),
    };

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output_filename));

    let cancel_flag = Arc::new(AtomicBool::new(false));
    let worker_flag = cancel_flag.clone();
    let mode = args.mode;
    let scan_root = root.clone();

    let mut worker = tokio::task::spawn_blocking(move || {
        let log = |message: &str| println!("{message}");
        run_traversal_to(&scan_root, mode, &items, &extensions, &output, &log, &worker_flag);
    });

    tokio::select! {
        result = &mut worker => result.context("traversal worker panicked")?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Stop requested, signalling the worker.");
            cancel_flag.store(true, Ordering::SeqCst);
            // The worker unwinds cooperatively and still writes what it has.
            worker.await.context("traversal worker panicked")?;
        }
    }

    config.last_directory = Some(root);
    if let Err(e) = settings::save_config(&config, None) {
        tracing::warn!("Failed to persist config: {e}");
    }

    Ok(())
}
