use anyhow::Result;
use tracing::info;

use crate::{cli::ConfigArgs, AppCtx};

pub async fn handle(args: ConfigArgs, ctx: &AppCtx) -> Result<()> {
    let mut settings = ctx.settings_store.load()?;
    if let Some(username) = args.username {
        settings.username = Some(username.as_str().to_string());
    }
    if let Some(base_url) = args.base_url {
        settings.base_url = Some(base_url.trim_end_matches('/').to_string());
    }
    ctx.settings_store.save(&settings)?;
    info!("Configuration saved successfully ✅");
    Ok(())
}
