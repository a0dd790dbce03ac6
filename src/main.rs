use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;

use homedash::{
    infrastructure::{
        cli::Cli,
        config::Config,
        store::{FileStore, MemoryStore, SharedStore},
    },
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // Load configuration (file-based)
    let config = Config::new()?;

    let store: SharedStore = if args.ephemeral {
        log::info!("Running with an in-memory store");
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(FileStore::open(
            config.store_path(),
            config.storage.quota_bytes,
        )?)
    };

    let mut runner = AppRunner::new_with_real(config, store, args.tick_rate, args.frame_rate)?;
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
