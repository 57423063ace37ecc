use anyhow::Result;

use crate::{
    cli::SignupArgs,
    commands::print_response,
    services::{AuthService, CredentialsProvider, StdinCredentialsProvider},
    AppCtx,
};
use quantdesk_api::client::auth::SignupInfo;

pub async fn handle(args: SignupArgs, ctx: &AppCtx) -> Result<()> {
    let auth = AuthService::with_defaults(ctx.settings_store.as_ref());
    let client = auth.connect()?;

    let password = StdinCredentialsProvider.read_password("Choose a password")?;
    let info = SignupInfo {
        name: args.username.as_str().to_string(),
        password: password.as_ref().to_string(),
        email: args.email.as_str().to_string(),
        user_type: args.user_type,
    };

    let response = client.signup(&info).await?;
    print_response(&response)?;
    Ok(())
}
