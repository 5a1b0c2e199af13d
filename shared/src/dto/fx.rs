use serde::{Deserialize, Serialize};

use super::{amount_value, de_amount};

/// A priced conversion offer; executing it requires its `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FxQuote {
    pub id: String,
    #[serde(default, deserialize_with = "de_amount")]
    pub rate: String,
    #[serde(default, deserialize_with = "de_amount")]
    pub to_amount: String,
    #[serde(default, deserialize_with = "de_amount")]
    pub fee: String,
}

impl FxQuote {
    pub fn rate_value(&self) -> f64 {
        amount_value(&self.rate)
    }
}

/// `GET /api/v1/fx/quote`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FxQuoteResponse {
    pub quote: FxQuote,
}

/// `POST /api/v1/fx/exchanges`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRequest {
    pub quote_id: String,
}
