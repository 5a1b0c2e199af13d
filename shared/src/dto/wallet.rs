use serde::{Deserialize, Serialize};

use super::{amount_value, de_amount};

/// One currency wallet of the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub currency: String,
    #[serde(deserialize_with = "de_amount")]
    pub balance: String,
}

impl Wallet {
    pub fn balance_value(&self) -> f64 {
        amount_value(&self.balance)
    }
}

/// `GET /api/v1/wallets`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletsResponse {
    #[serde(default)]
    pub wallets: Vec<Wallet>,
}

impl WalletsResponse {
    /// Balance of the wallet in `currency`, if the user holds one.
    pub fn balance_of(&self, currency: &str) -> Option<f64> {
        self.wallets
            .iter()
            .find(|w| w.currency == currency)
            .map(Wallet::balance_value)
    }
}

/// Funding source for a top-up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TopUpMethod {
    Card,
    CashAgent,
    BankTransfer,
}

/// `POST /api/v1/wallets/topups`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopUpRequest {
    pub amount: String,
    pub currency: String,
    pub method: TopUpMethod,
    pub source_ref: String,
}

/// Cash-out channel for a withdrawal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WithdrawalMethod {
    CashAgent,
    CardlessAtm,
}

/// Where withdrawn cash is collected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalDestination {
    pub provider: String,
    pub phone_number: Option<String>,
}

/// `POST /api/v1/wallets/withdrawals`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    pub amount: String,
    pub currency: String,
    pub method: WithdrawalMethod,
    pub destination: WithdrawalDestination,
}
