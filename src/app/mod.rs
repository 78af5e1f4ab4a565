pub mod config;
pub mod logging;

pub use config::{Config, TracingLevel};
pub use logging::{LoggingError, setup_tracing};

use crate::consumer::{self, DrainStats};
use crate::sink::ConsoleSink;
use crate::source::NdjsonSource;
use anyhow::Context as _;
use clap::Parser;
use std::process;
use tokio::fs::File;
use tokio::io::BufReader;
use tracing::{debug, error};

pub struct App {
    config: Config,
}

impl App {
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::from_config(Config::parse_from(args))
    }

    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Drain the configured event input into the process stdout/stderr.
    ///
    /// Runs until the input is exhausted (EOF) or the source fails; producer
    /// failures are not recovered here, they surface to the caller.
    pub async fn run(self) -> anyhow::Result<DrainStats> {
        let mut sink = ConsoleSink::stdio();

        let stats = if self.config.reads_stdin() {
            let reader = BufReader::new(tokio::io::stdin());
            consumer::drain(NdjsonSource::new(reader), &mut sink).await?
        } else {
            let file = File::open(&self.config.input)
                .await
                .with_context(|| format!("cannot open event input {}", self.config.input))?;
            consumer::drain(NdjsonSource::new(BufReader::new(file)), &mut sink).await?
        };

        debug!(
            routed = stats.routed,
            skipped = stats.skipped,
            "event input drained"
        );

        Ok(stats)
    }
}

// Main entry point for the application
pub async fn main() -> anyhow::Result<()> {
    let app = App::from_args(std::env::args());
    setup_tracing(app.config.log_level)?;

    if let Err(e) = app.run().await {
        error!("worker-event-console failed: {e:#}");
        process::exit(1);
    }

    Ok(())
}
