mod bank;
mod config;
mod console;
mod models;
mod storage;
mod types;

use std::io::stderr;
use std::process::exit;

use anyhow::Result;
use tokio::io::{stdin, stdout, BufReader};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::{Config, USAGE};
use crate::console::Console;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("{USAGE}");
            exit(1);
        }
    };

    setup_logging(config.log_level);

    let mut console = Console::new(BufReader::new(stdin()), stdout(), config.menu_pause);
    console.run().await?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout belongs to the menu, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
