use anyhow::Result;
use tracing::info;

use crate::{
    cli::{OrderArgs, OrderCommands, OrderListArgs, OrderNewArgs},
    commands::print_response,
    services::AuthService,
    AppCtx,
};
use quantdesk_api::client::order::{decode_orders, OrderQuery, OrderTicket};

pub async fn handle(args: OrderArgs, ctx: &AppCtx) -> Result<()> {
    match args.command {
        OrderCommands::New(n) => new_order(n, ctx).await,
        OrderCommands::List(l) => list_orders(l, ctx).await,
    }
}

async fn new_order(args: OrderNewArgs, ctx: &AppCtx) -> Result<()> {
    let auth = AuthService::with_defaults(ctx.settings_store.as_ref());
    let Some(client) = auth.session().await? else {
        return Ok(());
    };

    let ticket = OrderTicket {
        base: args.base,
        quote: args.quote,
        order_type: args.side,
        price: args.price.to_string(),
        quantity: args.quantity.get().to_string(),
    };

    let response = client.place_order(&ticket).await?;
    print_response(&response)?;

    if response.is_success() {
        info!("Order submitted ✅");
    }
    Ok(())
}

async fn list_orders(args: OrderListArgs, ctx: &AppCtx) -> Result<()> {
    let auth = AuthService::with_defaults(ctx.settings_store.as_ref());
    let Some(client) = auth.session().await? else {
        return Ok(());
    };

    let query = OrderQuery {
        portfolio_id: args.id,
        start: args.start,
        len: args.len,
        filter: args.filter,
    };

    let response = client.list_orders(&query).await?;
    print_response(&response)?;

    if response.is_success() {
        let orders = decode_orders(&response.body)?;
        info!("Fetched {} orders", orders.len());
        println!("{:#?}", orders);
    }
    Ok(())
}
