use anyhow::Result;

use crate::{
    cli::{
        PortfolioArgs, PortfolioCommands, PortfolioCreateArgs, PortfolioListArgs,
        PortfolioRemoveArgs, PortfolioUpdateArgs,
    },
    commands::print_response,
    services::AuthService,
    AppCtx,
};
use quantdesk_api::client::portfolio::{NewPortfolio, NewPosition};

pub async fn handle(args: PortfolioArgs, ctx: &AppCtx) -> Result<()> {
    match args.command {
        PortfolioCommands::Create(c) => create(c, ctx).await,
        PortfolioCommands::Update(u) => update(u, ctx).await,
        PortfolioCommands::Remove(r) => remove(r, ctx).await,
        PortfolioCommands::List(l) => list(l, ctx).await,
    }
}

async fn create(args: PortfolioCreateArgs, ctx: &AppCtx) -> Result<()> {
    let auth = AuthService::with_defaults(ctx.settings_store.as_ref());
    let Some(client) = auth.session().await? else {
        return Ok(());
    };

    // The backend deserializes every scalar of this payload from strings.
    let portfolio = NewPortfolio {
        name: args.name.as_str().to_string(),
        amount: args.amount.to_string(),
        currency_id: args.currency_id.to_string(),
        portfolio_type: args.portfolio_type.to_string(),
        position: args
            .positions
            .iter()
            .map(|pair| NewPosition {
                base_currency_id: pair.base.to_string(),
                quote_currency_id: pair.quote.to_string(),
            })
            .collect(),
    };

    let response = client.create_portfolio(&portfolio).await?;
    print_response(&response)
}

async fn update(args: PortfolioUpdateArgs, ctx: &AppCtx) -> Result<()> {
    let auth = AuthService::with_defaults(ctx.settings_store.as_ref());
    let Some(client) = auth.session().await? else {
        return Ok(());
    };

    let response = client
        .update_portfolio(args.name.as_str(), args.amount)
        .await?;
    print_response(&response)
}

async fn remove(args: PortfolioRemoveArgs, ctx: &AppCtx) -> Result<()> {
    let auth = AuthService::with_defaults(ctx.settings_store.as_ref());
    let Some(client) = auth.session().await? else {
        return Ok(());
    };

    let response = client.remove_portfolio(args.name.as_str()).await?;
    print_response(&response)
}

async fn list(_args: PortfolioListArgs, ctx: &AppCtx) -> Result<()> {
    let auth = AuthService::with_defaults(ctx.settings_store.as_ref());
    let Some(client) = auth.session().await? else {
        return Ok(());
    };

    let response = client.list_portfolios().await?;
    print_response(&response)
}
