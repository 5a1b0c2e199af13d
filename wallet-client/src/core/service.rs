//! # Service Traits
//!
//! Traits for dependency injection, so screens can be driven by a fake backend.

use async_trait::async_trait;
use shared::{
    ExpensesResponse, FxQuoteResponse, OperationReceipt, TopUpRequest, TransactionsResponse,
    TransferRequest, WalletsResponse, WithdrawalRequest,
};

use crate::core::error::Result;
use crate::gateway::IdempotencyKey;
use crate::services::api::TransactionQuery;

/// Wallet backend operations used by the application screens.
///
/// Every mutating operation takes the [`IdempotencyKey`] of the user action
/// it belongs to; pass the same key when retrying that action.
#[async_trait]
pub trait WalletService: Send + Sync {
    /// Balances of every currency wallet.
    async fn wallets(&self) -> Result<WalletsResponse>;

    /// Activity feed, newest first.
    async fn transactions(&self, query: &TransactionQuery) -> Result<TransactionsResponse>;

    /// Spending by category for `month` (`YYYY-MM`) in `currency`.
    async fn expenses(&self, month: &str, currency: &str) -> Result<ExpensesResponse>;

    /// Price a conversion of `amount` from one currency to another.
    async fn fx_quote(&self, from: &str, to: &str, amount: f64) -> Result<FxQuoteResponse>;

    /// Execute a previously obtained quote.
    async fn exchange(&self, quote_id: &str, key: &IdempotencyKey) -> Result<OperationReceipt>;

    async fn top_up(&self, request: &TopUpRequest, key: &IdempotencyKey) -> Result<OperationReceipt>;

    async fn withdraw(&self, request: &WithdrawalRequest, key: &IdempotencyKey) -> Result<OperationReceipt>;

    /// Send money to another user.
    async fn transfer(&self, request: &TransferRequest, key: &IdempotencyKey) -> Result<OperationReceipt>;

    /// Ask another user for money.
    async fn request_money(&self, request: &TransferRequest, key: &IdempotencyKey) -> Result<OperationReceipt>;
}
