//! Wallet commands - profile, balance, history and transfers

use colored::*;
use qiwi_wallet::{Decimal, HistoryQuery, WalletClient};
use serde_json::Value;

use crate::display::{self, Tone};

/// Show the owner's profile
pub async fn show_profile(wallet: &WalletClient) -> anyhow::Result<()> {
    let profile = wallet.profile().await?;

    display::heading(&format!("Profile: {}", wallet.phone()));
    display::json(&Value::Object(profile))
}

/// Show the wallet balance
pub async fn show_balance(wallet: &WalletClient) -> anyhow::Result<()> {
    let balance = wallet.balance().await?;

    println!("  {}: {}", "Wallet".bright_white(), wallet.phone().as_str().bright_cyan());
    println!("  {}: {}", "Balance".bright_white(), display::rubles(balance).bright_green());
    Ok(())
}

/// List recent payments
pub async fn show_history(
    wallet: &WalletClient,
    rows: i64,
    operation: &str,
    raw: bool,
) -> anyhow::Result<()> {
    let query = HistoryQuery::parse(rows, operation)?;
    let records = wallet.history(&query).await?;

    if raw {
        return display::json(&Value::Array(records));
    }

    display::heading(&format!(
        "History: {} ({}, {} rows)",
        wallet.phone(),
        query.operation(),
        query.rows()
    ));

    if records.is_empty() {
        println!("  {}", "No payments found".yellow());
        return Ok(());
    }

    println!(
        "  {:<14} {:<26} {:<5} {:>12}  {:<10} {}",
        "TXN", "DATE", "TYPE", "AMOUNT", "STATUS", "ACCOUNT"
    );
    println!("  {}", "─".repeat(86));
    for record in &records {
        let kind = display::field(record, "/type");
        let kind = match kind.as_str() {
            "IN" => kind.bright_green(),
            "OUT" => kind.bright_red(),
            _ => kind.normal(),
        };
        println!(
            "  {:<14} {:<26} {:<5} {:>12}  {:<10} {}",
            display::field(record, "/txnId"),
            display::field(record, "/date"),
            kind,
            display::field(record, "/sum/amount").bright_white(),
            display::field(record, "/status"),
            display::field(record, "/account").bright_cyan(),
        );
    }

    Ok(())
}

/// Send money to another wallet
pub async fn transfer(
    wallet: &WalletClient,
    to: &str,
    amount: Decimal,
    comment: &str,
) -> anyhow::Result<()> {
    if amount <= Decimal::ZERO {
        display::notice(Tone::Warn, "Amount is not positive; the provider will most likely reject it");
    }

    println!("{}", "Sending transfer...".bright_white().bold());
    println!("  From: {}", wallet.phone().as_str().bright_cyan());
    println!("  To: {}", to.bright_cyan());
    println!("  Amount: {}", display::rubles(amount).bright_cyan());
    println!();

    let result = wallet.transfer(amount, comment, to).await?;

    match result.pointer("/transaction/state/code").and_then(Value::as_str) {
        Some(state) => display::notice(Tone::Ok, &format!("Provider accepted the payment: {}", state)),
        None => display::notice(Tone::Fail, "Provider response has no transaction state"),
    }
    display::json(&result)
}
