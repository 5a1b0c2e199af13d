//! # API Client
//!
//! Gateway-backed implementation of [`WalletService`].

use async_trait::async_trait;
use shared::{
    ExpensesResponse, FxQuoteResponse, OperationReceipt, TopUpRequest, TransactionsResponse,
    TransferRequest, WalletsResponse, WithdrawalRequest,
};

use super::TransactionQuery;
use crate::core::error::Result;
use crate::core::service::WalletService;
use crate::gateway::{HttpTransport, IdempotencyKey, RequestGateway, ReqwestTransport};

/// Client for the `/api/v1` wallet routes.
pub struct WalletApi<T = ReqwestTransport> {
    pub(crate) gateway: RequestGateway<T>,
}

impl<T: HttpTransport> WalletApi<T> {
    pub fn new(gateway: RequestGateway<T>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &RequestGateway<T> {
        &self.gateway
    }
}

#[async_trait]
impl<T: HttpTransport + 'static> WalletService for WalletApi<T> {
    async fn wallets(&self) -> Result<WalletsResponse> {
        super::wallet::wallets(self).await
    }

    async fn transactions(&self, query: &TransactionQuery) -> Result<TransactionsResponse> {
        super::transactions::transactions(self, query).await
    }

    async fn expenses(&self, month: &str, currency: &str) -> Result<ExpensesResponse> {
        super::transactions::expenses(self, month, currency).await
    }

    async fn fx_quote(&self, from: &str, to: &str, amount: f64) -> Result<FxQuoteResponse> {
        super::fx::fx_quote(self, from, to, amount).await
    }

    async fn exchange(&self, quote_id: &str, key: &IdempotencyKey) -> Result<OperationReceipt> {
        super::fx::exchange(self, quote_id, key).await
    }

    async fn top_up(&self, request: &TopUpRequest, key: &IdempotencyKey) -> Result<OperationReceipt> {
        super::wallet::top_up(self, request, key).await
    }

    async fn withdraw(&self, request: &WithdrawalRequest, key: &IdempotencyKey) -> Result<OperationReceipt> {
        super::wallet::withdraw(self, request, key).await
    }

    async fn transfer(&self, request: &TransferRequest, key: &IdempotencyKey) -> Result<OperationReceipt> {
        super::transfers::transfer(self, request, key).await
    }

    async fn request_money(&self, request: &TransferRequest, key: &IdempotencyKey) -> Result<OperationReceipt> {
        super::transfers::request_money(self, request, key).await
    }
}
