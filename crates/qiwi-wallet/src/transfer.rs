//! Peer-to-peer transfer requests

use rust_decimal::Decimal;
use serde::Serialize;

use crate::credentials::PhoneNumber;
use crate::error::WalletResult;

/// Provider id of the "transfer to QIWI wallet" payment
pub const TRANSFER_PROVIDER_ID: u32 = 99;

/// ISO 4217 numeric code for the Russian ruble
pub const RUB_CURRENCY_CODE: &str = "643";

/// Literal value the provider accepts in the `id` field of a transfer
pub const TRANSFER_ID_PLACEHOLDER: &str = "string";

/// A transfer to another wallet
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    pub amount: Decimal,
    pub comment: String,
    pub destination: PhoneNumber,
}

impl TransferRequest {
    pub fn new(amount: Decimal, comment: impl Into<String>, destination: &str) -> WalletResult<Self> {
        Ok(Self {
            amount,
            comment: comment.into(),
            destination: PhoneNumber::parse(destination)?,
        })
    }

    /// Request body sent to the payments endpoint
    pub fn envelope(&self) -> TransferEnvelope<'_> {
        TransferEnvelope {
            id: TRANSFER_ID_PLACEHOLDER,
            sum: Sum {
                amount: self.amount,
                currency: RUB_CURRENCY_CODE,
            },
            payment_method: PaymentMethod {
                kind: "Account",
                account_id: RUB_CURRENCY_CODE,
            },
            fields: Fields {
                account: self.destination.as_str(),
            },
            comment: &self.comment,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferEnvelope<'a> {
    id: &'a str,
    sum: Sum<'a>,
    payment_method: PaymentMethod<'a>,
    fields: Fields<'a>,
    comment: &'a str,
}

#[derive(Debug, Serialize)]
struct Sum<'a> {
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
    currency: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PaymentMethod<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    account_id: &'a str,
}

#[derive(Debug, Serialize)]
struct Fields<'a> {
    account: &'a str,
}
