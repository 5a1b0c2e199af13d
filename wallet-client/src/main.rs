//! Command-line access to the wallet backend's read endpoints.
//!
//! ```text
//! wallet-client wallets
//! wallet-client transactions [limit]
//! wallet-client expenses <YYYY-MM> <CURRENCY>
//! ```
//!
//! `WALLET_API_TOKEN` is used as the bearer token when set.

use std::process::ExitCode;
use std::sync::Arc;

use wallet_client::config::init_config;
use wallet_client::core::service::WalletService;
use wallet_client::services::api::{TransactionQuery, WalletApi};
use wallet_client::session::{AuthModal, AuthSession, SessionStore};
use wallet_client::{GatewayError, RequestGateway};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match init_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };
    let _guard = wallet_client::logging::init(config);

    let session = Arc::new(SessionStore::new());
    if let Ok(token) = lib_utils::get_env("WALLET_API_TOKEN") {
        session.sign_in(AuthSession::new(token));
    }
    let modal = Arc::new(AuthModal::new());

    let gateway = match RequestGateway::from_config(config, session, modal.clone()) {
        Ok(gateway) => gateway,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };
    let api = WalletApi::new(gateway);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&api, &args).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("{}", e.user_message());
            if modal.is_open() {
                eprintln!("Set WALLET_API_TOKEN to a valid session token and retry.");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(api: &dyn WalletService, args: &[String]) -> Result<String, GatewayError> {
    let value = match args.first().map(String::as_str) {
        Some("wallets") | None => serde_json::to_value(api.wallets().await?),
        Some("transactions") => {
            let limit = match args.get(1) {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| GatewayError::InvalidRequest(format!("Invalid limit: {}", raw)))?,
                None => 20,
            };
            serde_json::to_value(api.transactions(&TransactionQuery::latest(limit)).await?)
        }
        Some("expenses") => {
            let month = args.get(1).cloned().unwrap_or_else(lib_utils::current_month);
            let currency = args.get(2).map(String::as_str).unwrap_or("USD");
            serde_json::to_value(api.expenses(&month, currency).await?)
        }
        Some(other) => {
            return Err(GatewayError::InvalidRequest(format!(
                "Unknown command {:?}; expected wallets, transactions or expenses",
                other
            )))
        }
    };

    let value = value.map_err(|e| GatewayError::Decode(e.to_string()))?;
    serde_json::to_string_pretty(&value).map_err(|e| GatewayError::Decode(e.to_string()))
}
