use chrono::{DateTime, Utc};
use tracing::{info, warn};
use url::Url;

use crate::error::StoreError;
use crate::models::order_models::PaymentMethod;

/// 2025-10-01T17:00:00Z as seconds since the Unix epoch.
pub const DEFAULT_BATCH_OPENS_AT_SECS: i64 = 1_759_338_000;
pub const DEFAULT_CONTACT_EMAIL: &str = "hello@godcandle.com";

/// External destinations the checkout button may send the browser to.
#[derive(Debug, Clone, Default)]
pub struct CheckoutLinks {
    pub card: Option<Url>,
    pub crypto: Option<Url>,
}

impl CheckoutLinks {
    /// Blank, "#" and non-http(s) values leave the link unconfigured.
    pub fn from_raw(card: Option<&str>, crypto: Option<&str>) -> Self {
        Self {
            card: card.and_then(|raw| parse_link("STRIPE_PAYMENT_LINK", raw)),
            crypto: crypto.and_then(|raw| parse_link("COINBASE_CHECKOUT_URL", raw)),
        }
    }

    pub fn for_method(&self, method: PaymentMethod) -> Option<&Url> {
        match method {
            PaymentMethod::Usd => self.card.as_ref(),
            PaymentMethod::Crypto => self.crypto.as_ref(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub checkout: CheckoutLinks,
    pub email_list_endpoint: Option<Url>,
    pub batch_opens_at: DateTime<Utc>,
    pub contact_email: String,
    pub port: u16,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            checkout: CheckoutLinks::default(),
            email_list_endpoint: None,
            batch_opens_at: default_batch_opens_at(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            port: 3000,
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, StoreError> {
        let var = |name: &str| std::env::var(name).ok();

        let batch_opens_at = match var("BATCH_OPENS_AT") {
            Some(raw) => parse_batch_opens_at(&raw)?,
            None => default_batch_opens_at(),
        };

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| StoreError::InvalidConfig {
                var: "PORT",
                reason: e.to_string(),
            })?,
            None => match std::env::var("ENVIRONMENT").as_deref() {
                Ok("staging") => 3100,
                _ => 3000,
            },
        };

        Ok(Self {
            checkout: CheckoutLinks::from_raw(
                var("STRIPE_PAYMENT_LINK").as_deref(),
                var("COINBASE_CHECKOUT_URL").as_deref(),
            ),
            email_list_endpoint: var("EMAIL_LIST_ENDPOINT")
                .as_deref()
                .and_then(|raw| parse_link("EMAIL_LIST_ENDPOINT", raw)),
            batch_opens_at,
            contact_email: var("CONTACT_EMAIL")
                .filter(|email| !email.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CONTACT_EMAIL.to_string()),
            port,
        })
    }

    /// Missing links only degrade checkout, so they are warnings, not errors.
    pub fn log_summary(&self) {
        if self.checkout.card.is_none() {
            warn!("STRIPE_PAYMENT_LINK is not set, card checkout will show a notice");
        }
        if self.checkout.crypto.is_none() {
            warn!("COINBASE_CHECKOUT_URL is not set, crypto checkout will show a notice");
        }
        if self.email_list_endpoint.is_none() {
            warn!("EMAIL_LIST_ENDPOINT is not set, email capture is hidden");
        }
        info!(
            batch_opens_at = %self.batch_opens_at.to_rfc3339(),
            port = self.port,
            "Storefront configured"
        );
    }
}

pub fn default_batch_opens_at() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + chrono::Duration::seconds(DEFAULT_BATCH_OPENS_AT_SECS)
}

pub fn parse_batch_opens_at(raw: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::InvalidConfig {
            var: "BATCH_OPENS_AT",
            reason: e.to_string(),
        })
}

fn parse_link(var: &'static str, raw: &str) -> Option<Url> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "#" {
        return None;
    }
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url),
        Ok(url) => {
            warn!("{} uses unsupported scheme {}, ignoring it", var, url.scheme());
            None
        }
        Err(e) => {
            warn!("{} is not a valid URL ({}), ignoring it", var, e);
            None
        }
    }
}
