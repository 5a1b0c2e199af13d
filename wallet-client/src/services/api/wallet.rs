//! # Wallet Endpoints
//!
//! Balances, top-ups and withdrawals.

use lib_utils::{format_amount, validate_currency, validate_not_empty};
use shared::{OperationReceipt, TopUpMethod, TopUpRequest, WalletsResponse, WithdrawalRequest};

use super::client::WalletApi;
use crate::core::error::Result;
use crate::gateway::{HttpTransport, IdempotencyKey, RequestOptions};

/// Get every currency wallet with its balance.
pub async fn wallets<T: HttpTransport>(api: &WalletApi<T>) -> Result<WalletsResponse> {
    api.gateway
        .call_json("/api/v1/wallets", RequestOptions::get())
        .await
}

/// Build a card top-up request for `amount` in `currency`.
pub fn card_top_up(amount: f64, currency: &str, source_ref: &str) -> Result<TopUpRequest> {
    validate_currency(currency)?;
    validate_not_empty(source_ref, "Card reference")?;
    Ok(TopUpRequest {
        amount: format_amount(amount, currency)?,
        currency: currency.to_string(),
        method: TopUpMethod::Card,
        source_ref: source_ref.to_string(),
    })
}

/// Add money to a wallet.
#[tracing::instrument(skip(api, request, key), fields(currency = %request.currency))]
pub async fn top_up<T: HttpTransport>(
    api: &WalletApi<T>,
    request: &TopUpRequest,
    key: &IdempotencyKey,
) -> Result<OperationReceipt> {
    validate_currency(&request.currency)?;
    tracing::info!("Submitting top-up");

    let options = RequestOptions::post(request)?.idempotency_key(key);
    api.gateway.call_json("/api/v1/wallets/topups", options).await
}

/// Cash out through an agent or a cardless ATM.
#[tracing::instrument(skip(api, request, key), fields(currency = %request.currency, method = ?request.method))]
pub async fn withdraw<T: HttpTransport>(
    api: &WalletApi<T>,
    request: &WithdrawalRequest,
    key: &IdempotencyKey,
) -> Result<OperationReceipt> {
    validate_currency(&request.currency)?;
    validate_not_empty(&request.destination.provider, "Provider")?;
    tracing::info!("Submitting withdrawal");

    let options = RequestOptions::post(request)?.idempotency_key(key);
    api.gateway.call_json("/api/v1/wallets/withdrawals", options).await
}
