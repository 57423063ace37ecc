use anyhow::Result;
use tracing::info;

use crate::{
    cli::{RiskArgs, RiskCommands, RiskListArgs, RiskSetArgs},
    commands::print_response,
    services::AuthService,
    AppCtx,
};
use quantdesk_api::client::risk::{decode_risk_status, RiskRule};

pub async fn handle(args: RiskArgs, ctx: &AppCtx) -> Result<()> {
    match args.command {
        RiskCommands::Set(s) => set_rule(s, ctx).await,
        RiskCommands::List(l) => list_rules(l, ctx).await,
    }
}

async fn set_rule(args: RiskSetArgs, ctx: &AppCtx) -> Result<()> {
    let auth = AuthService::with_defaults(ctx.settings_store.as_ref());
    let Some(client) = auth.session().await? else {
        return Ok(());
    };

    let rule = RiskRule {
        rule_type: args.rule_type,
        on: args.on,
        pnl: args.pnl,
        position: args.position,
        pid: args.portfolio,
    };

    let response = client.set_risk_rule(&rule).await?;
    print_response(&response)
}

async fn list_rules(_args: RiskListArgs, ctx: &AppCtx) -> Result<()> {
    let auth = AuthService::with_defaults(ctx.settings_store.as_ref());
    let Some(client) = auth.session().await? else {
        return Ok(());
    };

    let response = client.list_risk_rules().await?;
    print_response(&response)?;

    if response.is_success() {
        let status = decode_risk_status(&response.body)?;
        info!("Found {} risk rules", status.data.len());
        println!("{:#?}", status.data);
    }
    Ok(())
}
