//! QIWI CLI - query and operate a QIWI wallet from the terminal
//!
//! Credentials come from `--token`/`--phone` or from the `TOKEN` and
//! `PHONE_NUMBER` variables (a `.env` file in the working directory is read).
//!
//! # Quick Start
//!
//! ```bash
//! qiwi balance
//! qiwi history --rows 20 --operation ALL
//! qiwi transfer --to +79991112233 --amount 100 --comment "lunch"
//! ```

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod client;
mod commands;
mod display;

use client::Connection;
use commands::wallet;

/// QIWI CLI - profile, balance, history and transfers for one wallet
#[derive(Parser)]
#[command(name = "qiwi")]
#[command(version)]
#[command(about = "Command-line client for the QIWI Wallet API", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// API access token (defaults to $TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Wallet phone number: 7XXXXXXXXXX, 8XXXXXXXXXX or +7XXXXXXXXXX (defaults to $PHONE_NUMBER)
    #[arg(long, global = true)]
    phone: Option<String>,

    /// Provider host (defaults to $QIWI_BASE_URL or https://edge.qiwi.com)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log requests to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the wallet owner's profile
    Profile,

    /// Show the wallet balance in rubles
    Balance,

    /// List recent payments
    History {
        /// Number of payments to fetch (at most 50)
        #[arg(short, long, default_value = "10", allow_hyphen_values = true)]
        rows: i64,

        /// IN, OUT, ALL or QIWI_CARD
        #[arg(short, long, default_value = "IN")]
        operation: String,

        /// Print the provider's JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Send money to another QIWI wallet
    Transfer {
        /// Destination phone number
        #[arg(long)]
        to: String,

        /// Amount in rubles
        #[arg(long)]
        amount: Decimal,

        /// Payment comment
        #[arg(long, default_value = "")]
        comment: String,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let qiwi = Connection {
        token: cli.token,
        phone: cli.phone,
        base_url: cli.base_url,
    }
    .connect()?;

    match cli.command {
        Commands::Profile => wallet::show_profile(&qiwi).await,
        Commands::Balance => wallet::show_balance(&qiwi).await,
        Commands::History { rows, operation, json } => {
            wallet::show_history(&qiwi, rows, &operation, json).await
        }
        Commands::Transfer { to, amount, comment } => {
            wallet::transfer(&qiwi, &to, amount, &comment).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_history_defaults() {
        let cli = Cli::parse_from(["qiwi", "history"]);
        match cli.command {
            Commands::History { rows, operation, json } => {
                assert_eq!(rows, 10);
                assert_eq!(operation, "IN");
                assert!(!json);
            }
            _ => panic!("expected history"),
        }
    }

    #[test]
    fn test_transfer_args() {
        let cli = Cli::parse_from([
            "qiwi", "--phone", "79990000000", "transfer", "--to", "+79991112233", "--amount", "100.50",
        ]);
        assert_eq!(cli.phone.as_deref(), Some("79990000000"));
        match cli.command {
            Commands::Transfer { to, amount, comment } => {
                assert_eq!(to, "+79991112233");
                assert_eq!(amount, Decimal::new(10050, 2));
                assert_eq!(comment, "");
            }
            _ => panic!("expected transfer"),
        }
    }
}
