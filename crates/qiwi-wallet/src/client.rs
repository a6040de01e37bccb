//! The wallet client

use std::sync::Arc;

use reqwest::header::HeaderMap;
use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::config::WalletConfig;
use crate::credentials::{Credentials, PhoneNumber};
use crate::error::{WalletError, WalletResult};
use crate::history::HistoryQuery;
use crate::transfer::{TransferRequest, TRANSFER_PROVIDER_ID};
use crate::transport::{HttpTransport, ProviderRequest, ProviderResponse, Transport};

/// Profile of the wallet owner, as returned by the provider
pub type Profile = Map<String, Value>;

/// One entry of the payment history
pub type HistoryRecord = Value;

/// Provider answer to a transfer, success or provider-reported failure alike
pub type TransferResult = Value;

const PROFILE_PATH: &str = "/person-profile/v1/profile/current";

/// Client for a single QIWI wallet
///
/// Holds the owner's credentials and a [`Transport`]. Every operation is one
/// request/response exchange; nothing is cached and nothing is retried.
#[derive(Clone)]
pub struct WalletClient {
    credentials: Arc<Credentials>,
    headers: HeaderMap,
    transport: Arc<dyn Transport>,
}

impl WalletClient {
    /// Client for the public QIWI host with the default configuration.
    /// Environment overrides apply only through [`WalletConfig::from_env`].
    pub fn new(token: impl Into<String>, phone: &str) -> WalletResult<Self> {
        Self::with_config(token, phone, WalletConfig::default())
    }

    /// Client with an explicit configuration
    pub fn with_config(
        token: impl Into<String>,
        phone: &str,
        config: WalletConfig,
    ) -> WalletResult<Self> {
        let credentials = Credentials::new(token, phone)?;
        let headers = credentials.headers()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self::assemble(credentials, headers, Arc::new(transport)))
    }

    /// Client sending through a caller-supplied transport
    pub fn with_transport(
        token: impl Into<String>,
        phone: &str,
        transport: Arc<dyn Transport>,
    ) -> WalletResult<Self> {
        let credentials = Credentials::new(token, phone)?;
        let headers = credentials.headers()?;
        Ok(Self::assemble(credentials, headers, transport))
    }

    fn assemble(credentials: Credentials, headers: HeaderMap, transport: Arc<dyn Transport>) -> Self {
        Self {
            credentials: Arc::new(credentials),
            headers,
            transport,
        }
    }

    pub fn phone(&self) -> &PhoneNumber {
        self.credentials.phone()
    }

    pub fn token(&self) -> &str {
        self.credentials.token()
    }

    /// Host the transport sends to, if it exposes one
    pub fn base_url(&self) -> Option<&str> {
        self.transport.base_url()
    }

    /// Headers attached to every request
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the owner's profile
    pub async fn profile(&self) -> WalletResult<Profile> {
        let request = ProviderRequest::get(PROFILE_PATH, self.headers.clone());
        match self.call(request).await? {
            Value::Object(profile) => Ok(profile),
            other => Err(WalletError::shape(format!(
                "profile is not a JSON object: {}",
                other
            ))),
        }
    }

    /// Get the balance of the first funding source, in rubles
    pub async fn balance(&self) -> WalletResult<Decimal> {
        let path = format!("/funding-sources/v2/persons/{}/accounts", self.phone());
        let body = self
            .call(ProviderRequest::get(path, self.headers.clone()))
            .await?;

        let amount = body
            .get("accounts")
            .and_then(Value::as_array)
            .ok_or_else(|| WalletError::shape("response has no `accounts` array"))?
            .first()
            .ok_or_else(|| WalletError::shape("`accounts` is empty"))?
            .get("balance")
            .and_then(|balance| balance.get("amount"))
            .ok_or_else(|| WalletError::shape("first account has no `balance.amount`"))?;

        decimal_from_json(amount)
    }

    /// Get payment history using the defaults: 10 rows, incoming payments
    pub async fn recent_history(&self) -> WalletResult<Vec<HistoryRecord>> {
        self.history(&HistoryQuery::default()).await
    }

    /// Get payment history, validating `operation` and `rows` first
    pub async fn get_history(&self, rows: i64, operation: &str) -> WalletResult<Vec<HistoryRecord>> {
        let query = HistoryQuery::parse(rows, operation)?;
        self.history(&query).await
    }

    /// Get payment history for an already validated query
    pub async fn history(&self, query: &HistoryQuery) -> WalletResult<Vec<HistoryRecord>> {
        let path = format!("/payment-history/v2/persons/{}/payments", self.phone());
        let request =
            ProviderRequest::get(path, self.headers.clone()).with_query(query.query_pairs());

        match self.call(request).await? {
            Value::Object(mut body) => match body.remove("data") {
                Some(Value::Array(records)) => Ok(records),
                _ => Err(WalletError::shape("response has no `data` array")),
            },
            _ => Err(WalletError::shape("history response is not a JSON object")),
        }
    }

    /// Send money to another wallet
    ///
    /// Returns the provider's JSON unchanged; transfer-specific codes in it
    /// are left for the caller to inspect.
    pub async fn transfer(
        &self,
        amount: Decimal,
        comment: &str,
        destination: &str,
    ) -> WalletResult<TransferResult> {
        let request = TransferRequest::new(amount, comment, destination)?;
        self.send(&request).await
    }

    /// Send a prepared transfer
    pub async fn send(&self, transfer: &TransferRequest) -> WalletResult<TransferResult> {
        let path = format!("/sinap/api/v2/terms/{}/payments", TRANSFER_PROVIDER_ID);
        let body = serde_json::to_value(transfer.envelope())
            .map_err(|e| WalletError::validation(format!("transfer cannot be encoded: {}", e)))?;

        tracing::info!(
            destination = %transfer.destination,
            amount = %transfer.amount,
            "sending transfer"
        );
        self.call(ProviderRequest::post(path, self.headers.clone(), body))
            .await
    }

    async fn call(&self, request: ProviderRequest) -> WalletResult<Value> {
        let method = request.method.clone();
        let path = request.path.clone();
        tracing::debug!(%method, %path, "provider request");

        let resp = self.transport.execute(request).await?;
        tracing::debug!(%method, %path, status = resp.status, "provider response");

        decode(resp)
    }
}

impl std::fmt::Debug for WalletClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletClient")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

fn decode(resp: ProviderResponse) -> WalletResult<Value> {
    if !resp.is_success() {
        tracing::warn!(status = resp.status, "provider returned an error status");
        return Err(WalletError::Provider {
            status: resp.status,
            body: resp.body,
        });
    }

    serde_json::from_str(&resp.body)
        .map_err(|e| WalletError::shape(format!("response is not valid JSON: {}", e)))
}

fn decimal_from_json(value: &Value) -> WalletResult<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => {
            return Err(WalletError::shape(format!(
                "balance amount is not a number: {}",
                other
            )))
        }
    };
    text.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|e| WalletError::shape(format!("balance amount {:?} is not a decimal: {}", text, e)))
}
