use anyhow::Result;
use tracing::info;

use crate::{cli::LogoutArgs, commands::print_response, services::AuthService, AppCtx};

pub async fn handle(_args: LogoutArgs, ctx: &AppCtx) -> Result<()> {
    let auth = AuthService::with_defaults(ctx.settings_store.as_ref());

    let Some(client) = auth.session().await? else {
        return Ok(());
    };

    let response = client.logout().await?;
    print_response(&response)?;

    client.clear_session()?;
    info!("Session cleared 🔒");
    Ok(())
}
