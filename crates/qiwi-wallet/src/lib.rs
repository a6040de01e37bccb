//! QIWI Wallet client
//!
//! A thin async client for the QIWI Wallet REST API. One [`WalletClient`]
//! serves one wallet owner, identified by a bearer token and a phone number.
//!
//! # Quick Start
//!
//! ```ignore
//! use qiwi_wallet::{OperationFilter, HistoryQuery, WalletClient};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let wallet = WalletClient::new("<token>", "+79990000000")?;
//!
//!     println!("balance: {}", wallet.balance().await?);
//!
//!     let query = HistoryQuery::new(20, OperationFilter::All)?;
//!     for record in wallet.history(&query).await? {
//!         println!("{}", record);
//!     }
//!
//!     let result = wallet.transfer(dec!(100), "lunch", "+79991112233").await?;
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every operation returns [`WalletError`]. Input is validated before any
//! request goes out ([`ErrorKind::Validation`]); failed or non-2xx exchanges
//! are [`ErrorKind::Provider`]; a 2xx body missing the expected fields is
//! [`ErrorKind::ResponseShape`].

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod history;
pub mod transfer;
pub mod transport;

pub use client::{HistoryRecord, Profile, TransferResult, WalletClient};
pub use config::{WalletConfig, DEFAULT_BASE_URL};
pub use credentials::{Credentials, PhoneNumber};
pub use error::{ErrorKind, WalletError, WalletResult};
pub use history::{HistoryQuery, OperationFilter, DEFAULT_HISTORY_ROWS, MAX_HISTORY_ROWS};
pub use transfer::TransferRequest;
pub use transport::{HttpTransport, ProviderRequest, ProviderResponse, Transport};

pub use rust_decimal::Decimal;
