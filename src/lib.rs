use std::sync::Arc;

use anyhow::Result;

pub mod cli;
mod commands;
mod services;
pub mod settings;

use cli::{Cli, Commands};
use settings::{FileSettingsStore, JsonFileSettingsStore, SettingsStore};

pub struct AppCtx {
    pub settings_store: Arc<dyn SettingsStore + Send + Sync>,
}

#[cfg(not(tarpaulin_include))]
pub async fn run(cli: Cli) -> Result<()> {
    let settings_store: Arc<dyn SettingsStore + Send + Sync> = match cli.credentials {
        Some(path) => Arc::new(JsonFileSettingsStore::new(path.into())),
        None => Arc::new(FileSettingsStore::new()?),
    };
    let ctx = AppCtx { settings_store };

    match cli.command {
        Commands::Config(args) => commands::config::handle(args, &ctx).await,
        Commands::Signup(args) => commands::signup::handle(args, &ctx).await,
        Commands::Login(args) => commands::login::handle(args, &ctx).await,
        Commands::Reset(args) => commands::reset::handle(args, &ctx).await,
        Commands::Logout(args) => commands::logout::handle(args, &ctx).await,
        Commands::Portfolio(args) => commands::portfolio::handle(args, &ctx).await,
        Commands::Order(args) => commands::order::handle(args, &ctx).await,
        Commands::Risk(args) => commands::risk::handle(args, &ctx).await,
    }
}
