//! # Exchange Endpoints
//!
//! Quote-then-execute currency conversion.

use lib_utils::{format_decimal, validate_currency};
use shared::{ExchangeRequest, FxQuoteResponse, OperationReceipt};

use super::client::WalletApi;
use crate::core::error::{GatewayError, Result};
use crate::gateway::{HttpTransport, IdempotencyKey, RequestOptions};

/// Price converting `amount` of `from` into `to`.
pub async fn fx_quote<T: HttpTransport>(
    api: &WalletApi<T>,
    from: &str,
    to: &str,
    amount: f64,
) -> Result<FxQuoteResponse> {
    validate_currency(from)?;
    validate_currency(to)?;
    if from == to {
        return Err(GatewayError::InvalidRequest(
            "Choose two different currencies".to_string(),
        ));
    }
    let amount = format_decimal(amount)?;

    let path = format!("/api/v1/fx/quote?from={}&to={}&amount={}", from, to, amount);
    api.gateway.call_json(&path, RequestOptions::get()).await
}

/// Execute the quote `quote_id`.
#[tracing::instrument(skip(api, key))]
pub async fn exchange<T: HttpTransport>(
    api: &WalletApi<T>,
    quote_id: &str,
    key: &IdempotencyKey,
) -> Result<OperationReceipt> {
    if quote_id.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(
            "Could not get an FX quote. Please enter an amount.".to_string(),
        ));
    }
    tracing::info!("Executing exchange");

    let body = ExchangeRequest {
        quote_id: quote_id.to_string(),
    };
    let options = RequestOptions::post(&body)?.idempotency_key(key);
    api.gateway.call_json("/api/v1/fx/exchanges", options).await
}
