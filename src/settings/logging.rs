use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use std::{
    fs,
    io::{stderr, IsTerminal},
};
use tracing_appender::rolling;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, registry, EnvFilter};

use crate::settings::consts::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER};

const LOG_FILE: &str = "quantdesk-cli.log";

/// Compact stderr output for the operator running a smoke command, plus a
/// JSON file in the platform data directory to inspect a run after the fact.
pub fn init_logger() -> Result<()> {
    let project_dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
        .ok_or_else(|| anyhow!("Could not determine project directories"))?;

    let directory = project_dirs.data_dir();
    fs::create_dir_all(directory)?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .with_writer(stderr)
        .with_ansi(IsTerminal::is_terminal(&stderr()))
        .without_time()
        .with_target(false)
        .compact()
        .with_filter(env_filter);

    let file_layer = fmt::layer()
        .json()
        .with_writer(rolling::never(directory, LOG_FILE))
        .flatten_event(true)
        .with_filter(LevelFilter::DEBUG);

    registry().with(console_layer).with(file_layer).init();

    Ok(())
}
