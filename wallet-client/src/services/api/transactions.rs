//! # Activity Endpoints
//!
//! Transaction feed and monthly expense breakdown.

use lib_utils::{parse_month, validate_currency};
use shared::{ExpensesResponse, TransactionsResponse};

use super::client::WalletApi;
use crate::core::error::{GatewayError, Result};
use crate::gateway::{HttpTransport, RequestOptions};

/// Filters for `GET /api/v1/transactions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    pub limit: Option<u32>,
    /// Transaction type, e.g. `cashback`.
    pub kind: Option<String>,
}

impl TransactionQuery {
    pub fn latest(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            kind: None,
        }
    }

    pub fn of_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    fn to_path(&self) -> Result<String> {
        let mut params = Vec::new();
        if let Some(kind) = &self.kind {
            if kind.is_empty() || !kind.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-') {
                return Err(GatewayError::InvalidRequest(format!(
                    "Invalid transaction type: {:?}",
                    kind
                )));
            }
            params.push(format!("type={}", kind));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }

        if params.is_empty() {
            Ok("/api/v1/transactions".to_string())
        } else {
            Ok(format!("/api/v1/transactions?{}", params.join("&")))
        }
    }
}

/// Get the activity feed.
pub async fn transactions<T: HttpTransport>(
    api: &WalletApi<T>,
    query: &TransactionQuery,
) -> Result<TransactionsResponse> {
    let path = query.to_path()?;
    api.gateway.call_json(&path, RequestOptions::get()).await
}

/// Get spending by category for `month` (`YYYY-MM`).
pub async fn expenses<T: HttpTransport>(
    api: &WalletApi<T>,
    month: &str,
    currency: &str,
) -> Result<ExpensesResponse> {
    parse_month(month).map_err(|e| GatewayError::InvalidRequest(e.to_string()))?;
    validate_currency(currency)?;

    let path = format!("/api/v1/expenses?month={}&currency={}", month, currency);
    api.gateway.call_json(&path, RequestOptions::get()).await
}
