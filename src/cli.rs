use clap::{value_parser, Args, Parser, Subcommand};
use quantdesk_api::types::{CurrencyPair, Email, OrderSide, PortfolioName, Quantity, Username};

#[derive(Parser)]
#[command(version, author, about, long_about = None)]
pub struct Cli {
    /// Optional path to credentials JSON file
    #[arg(short, long, value_name = "FILE")]
    pub credentials: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure the CLI (base URL, username)
    Config(ConfigArgs),

    /// Create a platform account
    Signup(SignupArgs),

    /// Log in and persist the session cookie for later commands
    Login(LoginArgs),

    /// Reset the password of the logged in account
    Reset(ResetArgs),

    /// Log out and drop the persisted session
    Logout(LogoutArgs),

    /// Create, update, remove or list portfolios
    Portfolio(PortfolioArgs),

    /// Place and list orders
    Order(OrderArgs),

    /// Configure and list risk rules
    Risk(RiskArgs),
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Username used to log in
    #[arg(short, long, value_name = "NAME")]
    pub username: Option<Username>,

    /// Base URL of the platform API (e.g. http://localhost:8000/api)
    #[arg(short, long, value_name = "URL")]
    pub base_url: Option<String>,
}

#[derive(Args)]
pub struct SignupArgs {
    /// Username of the new account
    #[arg(short, long, value_name = "NAME")]
    pub username: Username,

    /// Email of the new account
    #[arg(short, long, value_name = "EMAIL")]
    pub email: Email,

    /// Account type discriminant, as stored by the platform (0 = trader)
    #[arg(long, default_value_t = 0)]
    pub user_type: i32,
}

#[derive(Args)]
pub struct LoginArgs {
    /// Username to log in with, defaults to the configured one
    #[arg(short, long, value_name = "NAME")]
    pub username: Option<Username>,
}

#[derive(Args)]
pub struct ResetArgs {}

#[derive(Args)]
pub struct LogoutArgs {}

#[derive(Args)]
pub struct PortfolioArgs {
    #[command(subcommand)]
    pub command: PortfolioCommands,
}

#[derive(Subcommand)]
pub enum PortfolioCommands {
    /// Create a portfolio with an initial balance and positions
    Create(PortfolioCreateArgs),

    /// Update the balance of an existing portfolio
    Update(PortfolioUpdateArgs),

    /// Remove a portfolio and everything attached to it
    Remove(PortfolioRemoveArgs),

    /// List portfolio names and balances
    List(PortfolioListArgs),
}

#[derive(Args)]
pub struct PortfolioCreateArgs {
    /// Name of the portfolio
    #[arg(short, long, value_name = "NAME")]
    pub name: PortfolioName,

    /// Initial balance
    #[arg(short, long)]
    pub amount: u64,

    /// Numeric id of the balance currency
    #[arg(short, long, value_name = "ID", default_value_t = 1)]
    pub currency_id: u32,

    /// Portfolio type discriminant, as stored by the platform
    #[arg(long, default_value_t = 0)]
    pub portfolio_type: i32,

    /// Position to open, as <base_currency_id>:<quote_currency_id>. Repeatable
    #[arg(short, long = "position", value_name = "BASE:QUOTE")]
    pub positions: Vec<CurrencyPair>,
}

#[derive(Args)]
pub struct PortfolioUpdateArgs {
    /// Name of the portfolio
    #[arg(short, long, value_name = "NAME")]
    pub name: PortfolioName,

    /// New balance
    #[arg(short, long)]
    pub amount: i64,
}

#[derive(Args)]
pub struct PortfolioRemoveArgs {
    /// Name of the portfolio
    #[arg(short, long, value_name = "NAME")]
    pub name: PortfolioName,
}

#[derive(Args)]
pub struct PortfolioListArgs {}

#[derive(Args)]
pub struct OrderArgs {
    #[command(subcommand)]
    pub command: OrderCommands,
}

#[derive(Subcommand)]
pub enum OrderCommands {
    /// Place a new order
    New(OrderNewArgs),

    /// List orders of a portfolio
    List(OrderListArgs),
}

#[derive(Args)]
pub struct OrderNewArgs {
    /// Base currency code (e.g. BTC)
    #[arg(long, value_name = "CODE")]
    pub base: String,

    /// Quote currency code (e.g. USDT)
    #[arg(long, value_name = "CODE")]
    pub quote: String,

    /// Side of the order (buy/sell)
    #[arg(long, value_parser = clap::value_parser!(OrderSide))]
    pub side: OrderSide,

    /// Price per unit, in quote currency minor units
    #[arg(short, long)]
    pub price: u64,

    /// Quantity of the order (e.g. 1)
    #[arg(short, long)]
    pub quantity: Quantity,
}

#[derive(Args)]
pub struct OrderListArgs {
    /// Portfolio id whose orders to list
    #[arg(long, value_name = "ID")]
    pub id: i32,

    /// Offset into the result set
    #[arg(long, default_value_t = 0)]
    pub start: i32,

    /// Maximum number of records to return
    #[arg(long, default_value_t = 10, value_parser = value_parser!(i32).range(1..))]
    pub len: i32,

    /// Server side filter expression
    #[arg(long, default_value = "")]
    pub filter: String,
}

#[derive(Args)]
pub struct RiskArgs {
    #[command(subcommand)]
    pub command: RiskCommands,
}

#[derive(Subcommand)]
pub enum RiskCommands {
    /// Create or update a risk rule on a portfolio
    Set(RiskSetArgs),

    /// List the risk rules of your portfolios
    List(RiskListArgs),
}

#[derive(Args)]
pub struct RiskSetArgs {
    /// Rule kind, as the platform stores it (e.g. "pnl")
    #[arg(short = 't', long = "type", value_name = "KIND")]
    pub rule_type: String,

    /// Whether the rule is enforced
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set, value_name = "BOOL")]
    pub on: bool,

    /// PnL threshold of the rule
    #[arg(long, default_value_t = 0)]
    pub pnl: i64,

    /// Position the rule watches
    #[arg(long, default_value = "")]
    pub position: String,

    /// UUID of the portfolio the rule applies to
    #[arg(long, value_name = "UUID")]
    pub portfolio: String,
}

#[derive(Args)]
pub struct RiskListArgs {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_surface_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_order_new_parses_side_and_quantity() {
        let cli = Cli::try_parse_from([
            "quantdesk-cli",
            "order",
            "new",
            "--base",
            "BTC",
            "--quote",
            "USDT",
            "--side",
            "buy",
            "--price",
            "100",
            "--quantity",
            "2",
        ])
        .unwrap();
        let Commands::Order(order) = cli.command else {
            panic!("expected order subcommand");
        };
        let OrderCommands::New(new) = order.command else {
            panic!("expected order new subcommand");
        };
        assert_eq!(new.side, OrderSide::Buy);
        assert_eq!(new.quantity.get(), 2);
    }

    #[test]
    fn test_portfolio_create_parses_positions() {
        let cli = Cli::try_parse_from([
            "quantdesk-cli",
            "portfolio",
            "create",
            "--name",
            "test6",
            "--amount",
            "5000",
            "--position",
            "1:1",
            "--position",
            "2:2",
        ])
        .unwrap();
        let Commands::Portfolio(portfolio) = cli.command else {
            panic!("expected portfolio subcommand");
        };
        let PortfolioCommands::Create(create) = portfolio.command else {
            panic!("expected portfolio create subcommand");
        };
        assert_eq!(create.positions.len(), 2);
        assert_eq!(create.positions[1].base, 2);
        assert_eq!(create.currency_id, 1);
    }
}
