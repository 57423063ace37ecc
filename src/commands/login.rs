use anyhow::Result;
use tracing::warn;

use crate::{
    cli::LoginArgs,
    commands::{print_cookies, print_response},
    services::AuthService,
    AppCtx,
};

pub async fn handle(args: LoginArgs, ctx: &AppCtx) -> Result<()> {
    let auth = AuthService::with_defaults(ctx.settings_store.as_ref());

    let Some((client, response)) = auth.login(args.username).await? else {
        return Ok(());
    };

    print_response(&response)?;
    print_cookies(&client);

    if !response.is_success() {
        warn!(
            "Login rejected: {}",
            response.message().unwrap_or("unknown error")
        );
    }
    Ok(())
}
