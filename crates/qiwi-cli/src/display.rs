//! Terminal output for wallet commands

use colored::*;
use rust_decimal::Decimal;
use serde_json::Value;

/// Severity of a one-line notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Ok,
    Warn,
    Fail,
}

/// Title line followed by a rule as wide as the title
pub fn heading(title: &str) {
    println!();
    println!(" {}", title.bright_white().bold());
    println!(" {}", "─".repeat(title.chars().count()).bright_black());
}

/// One-line notice; failures go to stderr
pub fn notice(tone: Tone, message: &str) {
    match tone {
        Tone::Ok => println!("  {} {}", "✓".bright_green(), message),
        Tone::Warn => println!("  {} {}", "⚠".yellow(), message.yellow()),
        Tone::Fail => eprintln!("  {} {}", "✗".bright_red(), message.bright_red()),
    }
}

/// Ruble amount with two decimals, e.g. `1 234.50 RUB`
pub fn rubles(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let text = format!("{:.2}", rounded.abs());
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{}{}.{} RUB", sign, grouped, frac)
}

/// Any JSON value, indented
pub fn json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// A string or number field of a record, `?` when absent
pub fn field(value: &Value, pointer: &str) -> String {
    match value.pointer(pointer) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "?".to_string(),
        Some(other) => other.to_string(),
    }
}
