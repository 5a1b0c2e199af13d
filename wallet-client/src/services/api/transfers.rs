//! # Transfer Endpoints
//!
//! Sending money to, and requesting money from, another user.

use lib_utils::{format_amount, validate_currency, validate_email, validate_not_empty};
use shared::{OperationReceipt, Recipient, RecipientKind, TransferRequest};

use super::client::WalletApi;
use crate::core::error::Result;
use crate::gateway::{HttpTransport, IdempotencyKey, RequestOptions};

/// Build a transfer body; a blank note is dropped.
pub fn transfer_request(
    recipient: Recipient,
    amount: f64,
    currency: &str,
    note: Option<&str>,
) -> Result<TransferRequest> {
    let request = TransferRequest {
        recipient,
        amount: format_amount(amount, currency)?,
        currency: currency.to_string(),
        note: note.map(str::trim).filter(|n| !n.is_empty()).map(str::to_string),
    };
    validate(&request)?;
    Ok(request)
}

fn validate(request: &TransferRequest) -> Result<()> {
    validate_not_empty(&request.recipient.value, "Recipient")?;
    if request.recipient.kind == RecipientKind::Email {
        validate_email(&request.recipient.value)?;
    }
    validate_currency(&request.currency)?;
    Ok(())
}

/// Send money.
#[tracing::instrument(skip_all, fields(currency = %request.currency, recipient_kind = ?request.recipient.kind))]
pub async fn transfer<T: HttpTransport>(
    api: &WalletApi<T>,
    request: &TransferRequest,
    key: &IdempotencyKey,
) -> Result<OperationReceipt> {
    validate(request)?;
    tracing::info!("Submitting transfer");

    let options = RequestOptions::post(request)?.idempotency_key(key);
    api.gateway.call_json("/api/v1/transfers", options).await
}

/// Request money.
#[tracing::instrument(skip_all, fields(currency = %request.currency))]
pub async fn request_money<T: HttpTransport>(
    api: &WalletApi<T>,
    request: &TransferRequest,
    key: &IdempotencyKey,
) -> Result<OperationReceipt> {
    validate(request)?;
    tracing::info!("Submitting money request");

    let options = RequestOptions::post(request)?.idempotency_key(key);
    api.gateway.call_json("/api/v1/transfer-requests", options).await
}
