//! Phone numbers and bearer credentials

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::error::{WalletError, WalletResult};

const PHONE_PATTERN: &str = r"^(7|8|\+7)[0-9]{10}$";

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern is a valid regex"))
}

/// A wallet phone number in one of the accepted forms:
/// `7XXXXXXXXXX`, `8XXXXXXXXXX` or `+7XXXXXXXXXX`.
///
/// The number is kept exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(raw: &str) -> WalletResult<Self> {
        if phone_regex().is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(WalletError::validation(format!(
                "phone number must match {}, got {:?}",
                PHONE_PATTERN, raw
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Token and phone of the wallet owner. Immutable once built.
#[derive(Clone)]
pub struct Credentials {
    token: String,
    phone: PhoneNumber,
}

impl Credentials {
    pub fn new(token: impl Into<String>, phone: &str) -> WalletResult<Self> {
        let phone = PhoneNumber::parse(phone)?;
        let token = token.into();
        if token.trim().is_empty() {
            return Err(WalletError::validation("access token must not be empty"));
        }
        Ok(Self { token, phone })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    /// Header set sent with every request
    pub fn headers(&self) -> WalletResult<HeaderMap> {
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|_| WalletError::validation("access token is not a valid header value"))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, bearer);
        Ok(headers)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("phone", &self.phone)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_accepts_all_prefixes() {
        for raw in ["79990000000", "89990000000", "+79990000000"] {
            let phone = PhoneNumber::parse(raw).unwrap();
            assert_eq!(phone.as_str(), raw);
        }
    }

    #[test]
    fn test_rejects_malformed_numbers() {
        let bad = [
            "",
            "7999000000",    // too short
            "799900000000",  // too long
            "+89990000000",  // '+' only allowed before 7
            "99990000000",   // wrong leading digit
            "7999000000a",
            " 79990000000",
            "79990000000\n",
            "+7 999 000 00 00",
            "7\u{0669}\u{0669}\u{0669}0000000",   // Arabic-Indic digits
            "+7\u{FF19}\u{FF19}\u{FF19}0000000",  // fullwidth digits
        ];
        for raw in bad {
            let err = PhoneNumber::parse(raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation, "accepted {:?}", raw);
        }
    }

    #[test]
    fn test_headers() {
        let creds = Credentials::new("secret", "79990000000").unwrap();
        let headers = creds.headers().unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer secret");
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_token_not_in_debug_output() {
        let creds = Credentials::new("secret", "79990000000").unwrap();
        let out = format!("{:?}", creds);
        assert!(!out.contains("secret"));
        assert!(out.contains("79990000000"));
    }

    #[test]
    fn test_empty_token_rejected() {
        let err = Credentials::new("  ", "79990000000").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_token_with_newline_rejected_as_header() {
        let creds = Credentials::new("bad\ntoken", "79990000000").unwrap();
        assert_eq!(creds.headers().unwrap_err().kind(), ErrorKind::Validation);
    }
}
