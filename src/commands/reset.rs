use anyhow::Result;

use crate::{
    cli::ResetArgs,
    commands::{print_cookies, print_response},
    services::{AuthService, CredentialsProvider, StdinCredentialsProvider},
    AppCtx,
};

pub async fn handle(_args: ResetArgs, ctx: &AppCtx) -> Result<()> {
    let auth = AuthService::with_defaults(ctx.settings_store.as_ref());

    let Some(client) = auth.session().await? else {
        return Ok(());
    };

    let password = StdinCredentialsProvider.read_password("Enter your new password")?;
    let response = client.reset_password(password.as_ref()).await?;

    print_response(&response)?;
    print_cookies(&client);
    Ok(())
}
