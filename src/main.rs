use anyhow::Result;
use clap::Parser;

use quantdesk_cli::settings::init_logger;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger()?;
    let cli = quantdesk_cli::cli::Cli::parse();
    quantdesk_cli::run(cli).await?;
    Ok(())
}
