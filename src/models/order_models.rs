use serde::{Deserialize, Serialize};

use crate::utils::theme::Mood;

pub const MAX_TICKER_LEN: usize = 32;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShippingRegion {
    #[default]
    Usa,
    Canada,
    Europe,
    Asia,
    Oceania,
    Other,
}

impl ShippingRegion {
    pub const ALL: [ShippingRegion; 6] = [
        ShippingRegion::Usa,
        ShippingRegion::Canada,
        ShippingRegion::Europe,
        ShippingRegion::Asia,
        ShippingRegion::Oceania,
        ShippingRegion::Other,
    ];

    /// Unknown codes ship at the rest-of-world rate.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "usa" => ShippingRegion::Usa,
            "canada" => ShippingRegion::Canada,
            "europe" => ShippingRegion::Europe,
            "asia" => ShippingRegion::Asia,
            "oceania" => ShippingRegion::Oceania,
            _ => ShippingRegion::Other,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ShippingRegion::Usa => "usa",
            ShippingRegion::Canada => "canada",
            ShippingRegion::Europe => "europe",
            ShippingRegion::Asia => "asia",
            ShippingRegion::Oceania => "oceania",
            ShippingRegion::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShippingRegion::Usa => "United States",
            ShippingRegion::Canada => "Canada",
            ShippingRegion::Europe => "Europe",
            ShippingRegion::Asia => "Asia",
            ShippingRegion::Oceania => "Oceania",
            ShippingRegion::Other => "Rest of World",
        }
    }

    /// Flat rate for the first candle, in dollars.
    pub fn base_rate(&self) -> f64 {
        match self {
            ShippingRegion::Usa => 6.90,
            ShippingRegion::Canada => 11.90,
            ShippingRegion::Europe => 16.90,
            ShippingRegion::Asia => 16.90,
            ShippingRegion::Oceania => 18.90,
            ShippingRegion::Other => 21.90,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Usd,
    Crypto,
}

impl PaymentMethod {
    /// Anything that isn't "crypto" pays by card.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "crypto" => PaymentMethod::Crypto,
            _ => PaymentMethod::Usd,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Usd => "usd",
            PaymentMethod::Crypto => "crypto",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Usd => "USD (Card/Apple Pay)",
            PaymentMethod::Crypto => "Crypto (USDC/ETH/BTC via Coinbase)",
        }
    }
}

/// A bundle offered in the quantity select.
pub struct Bundle {
    pub quantity: u32,
    pub label: &'static str,
}

pub const BUNDLES: [Bundle; 3] = [
    Bundle { quantity: 1, label: "Single Candle — No Discount" },
    Bundle { quantity: 4, label: "Bundle of 4 — 8% Off" },
    Bundle { quantity: 12, label: "Bundle of 12 — 15% Off" },
];

/// Raw selection as it arrives in a query string or form body.
///
/// Every field is optional text so that malformed input never rejects the
/// request; [`OrderSelection::from_params`] decides what each value means.
#[derive(Debug, Clone, Default)]
pub struct SelectionParams {
    pub quantity: Option<String>,
    pub region: Option<String>,
    pub custom: Option<String>,
    pub ticker: Option<String>,
    pub tithing: Option<String>,
    pub payment: Option<String>,
    pub mood: Option<String>,
}

impl SelectionParams {
    /// Parses `application/x-www-form-urlencoded` input. Unknown keys are
    /// ignored and the last occurrence of a repeated key wins.
    pub fn from_urlencoded(input: &[u8]) -> Self {
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(input) {
            let value = Some(value.into_owned());
            match key.as_ref() {
                "quantity" => params.quantity = value,
                "region" => params.region = value,
                "custom" => params.custom = value,
                "ticker" => params.ticker = value,
                "tithing" => params.tithing = value,
                "payment" => params.payment = value,
                "mood" => params.mood = value,
                _ => {}
            }
        }
        params
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OrderSelection {
    pub quantity: u32,
    pub shipping_region: ShippingRegion,
    pub custom_blessing: bool,
    pub custom_ticker: String,
    pub tithing_amount: f64,
    pub payment_method: PaymentMethod,
    pub mood: Mood,
}

impl Default for OrderSelection {
    fn default() -> Self {
        Self {
            quantity: 1,
            shipping_region: ShippingRegion::Usa,
            custom_blessing: false,
            custom_ticker: String::new(),
            tithing_amount: 0.0,
            payment_method: PaymentMethod::Usd,
            mood: Mood::Bullish,
        }
    }
}

impl OrderSelection {
    pub fn from_params(params: &SelectionParams) -> Self {
        let defaults = Self::default();
        Self {
            quantity: params
                .quantity
                .as_deref()
                .map(parse_quantity)
                .unwrap_or(defaults.quantity),
            shipping_region: params
                .region
                .as_deref()
                .map(ShippingRegion::from_code)
                .unwrap_or(defaults.shipping_region),
            custom_blessing: params.custom.as_deref().map(parse_checkbox).unwrap_or(false),
            custom_ticker: params
                .ticker
                .as_deref()
                .map(clean_ticker)
                .unwrap_or_default(),
            tithing_amount: parse_tithing(params.tithing.as_deref().unwrap_or("")),
            payment_method: params
                .payment
                .as_deref()
                .map(PaymentMethod::from_code)
                .unwrap_or(defaults.payment_method),
            mood: params.mood.as_deref().map(Mood::from_code).unwrap_or(defaults.mood),
        }
    }

    /// The ticker only means something while the blessing add-on is on.
    pub fn blessing_ticker(&self) -> Option<&str> {
        if self.custom_blessing && !self.custom_ticker.is_empty() {
            Some(&self.custom_ticker)
        } else {
            None
        }
    }

    /// Query pairs that reproduce this selection, used for links that change one field.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("quantity", self.quantity.to_string()),
            ("region", self.shipping_region.code().to_string()),
        ];
        if self.custom_blessing {
            pairs.push(("custom", "on".to_string()));
            if !self.custom_ticker.is_empty() {
                pairs.push(("ticker", self.custom_ticker.clone()));
            }
        }
        if self.tithing_amount > 0.0 {
            pairs.push(("tithing", self.tithing_amount.to_string()));
        }
        pairs.push(("payment", self.payment_method.code().to_string()));
        pairs.push(("mood", self.mood.code().to_string()));
        pairs
    }

    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_query_pairs())
            .finish()
    }
}

/// Quantities below one and garbage fall back to a single candle.
pub fn parse_quantity(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(0) | Err(_) => 1,
        Ok(n) => n,
    }
}

/// Empty, non-numeric, negative and non-finite amounts all count as zero.
pub fn parse_tithing(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

pub fn parse_checkbox(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "on" | "true" | "1" | "yes"
    )
}

fn clean_ticker(raw: &str) -> String {
    raw.trim().chars().take(MAX_TICKER_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_first_page_load() {
        let selection = OrderSelection::from_params(&SelectionParams::default());
        assert_eq!(selection, OrderSelection::default());
        assert_eq!(selection.quantity, 1);
        assert_eq!(selection.shipping_region, ShippingRegion::Usa);
        assert_eq!(selection.payment_method, PaymentMethod::Usd);
        assert_eq!(selection.mood, Mood::Bullish);
        assert_eq!(selection.tithing_amount, 0.0);
    }

    #[test]
    fn test_tithing_coercion() {
        assert_eq!(parse_tithing("abc"), 0.0);
        assert_eq!(parse_tithing(""), 0.0);
        assert_eq!(parse_tithing("-5"), 0.0);
        assert_eq!(parse_tithing("NaN"), 0.0);
        assert_eq!(parse_tithing("inf"), 0.0);
        assert_eq!(parse_tithing(" 10 "), 10.0);
        assert_eq!(parse_tithing("2.5"), 2.5);
    }

    #[test]
    fn test_quantity_parsing_is_lenient() {
        assert_eq!(parse_quantity("4"), 4);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-3"), 1);
        assert_eq!(parse_quantity("lots"), 1);
        assert_eq!(parse_quantity("7"), 7);
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        assert_eq!(ShippingRegion::from_code("mars"), ShippingRegion::Other);
        assert_eq!(ShippingRegion::from_code("EUROPE"), ShippingRegion::Europe);
        assert_eq!(PaymentMethod::from_code("paypal"), PaymentMethod::Usd);
        assert_eq!(PaymentMethod::from_code("crypto"), PaymentMethod::Crypto);
    }

    #[test]
    fn test_ticker_only_counts_with_blessing() {
        let params = SelectionParams {
            ticker: Some("$FART".to_string()),
            ..Default::default()
        };
        assert_eq!(OrderSelection::from_params(&params).blessing_ticker(), None);

        let params = SelectionParams {
            custom: Some("on".to_string()),
            ticker: Some("  $FART  ".to_string()),
            ..Default::default()
        };
        assert_eq!(OrderSelection::from_params(&params).blessing_ticker(), Some("$FART"));
    }

    #[test]
    fn test_urlencoded_parsing_is_lenient() {
        let params = SelectionParams::from_urlencoded(
            b"quantity=4&quantity=12&region=canada&tithing=abc&utm_source=x&ticker=%24DOGE",
        );
        assert_eq!(params.quantity.as_deref(), Some("12"));
        assert_eq!(params.region.as_deref(), Some("canada"));
        assert_eq!(params.ticker.as_deref(), Some("$DOGE"));

        let selection = OrderSelection::from_params(&params);
        assert_eq!(selection.quantity, 12);
        assert_eq!(selection.tithing_amount, 0.0);
    }

    #[test]
    fn test_query_string_keeps_selection() {
        let params = SelectionParams {
            quantity: Some("12".to_string()),
            region: Some("asia".to_string()),
            custom: Some("on".to_string()),
            ticker: Some("$WIF".to_string()),
            payment: Some("crypto".to_string()),
            mood: Some("bear".to_string()),
            ..Default::default()
        };
        let query = OrderSelection::from_params(&params).to_query_string();
        assert_eq!(
            query,
            "quantity=12&region=asia&custom=on&ticker=%24WIF&payment=crypto&mood=bear"
        );
    }
}
