//! # Request Gateway
//!
//! Every screen talks to the wallet backend through [`RequestGateway`].
//!
//! ## Module Structure
//!
//! ```text
//! gateway/
//! ├── mod.rs        - Module exports and documentation
//! ├── client.rs     - RequestGateway: header stamping, 401 recovery, error mapping
//! ├── options.rs    - RequestOptions (per-call envelope) and IdempotencyKey
//! ├── response.rs   - ResponseBody (JSON or text) and typed decoding
//! └── transport.rs  - HttpTransport trait and the reqwest implementation
//! ```
//!
//! ## Outgoing Headers
//!
//! | Header | When |
//! |---|---|
//! | `X-Request-Id: req_<unique>` | always, overrides caller value |
//! | `Authorization: Bearer <jwt>` | session holds a token, overrides caller value |
//! | `Content-Type: application/json` | a body is present |
//! | `Idempotency-Key: <key>` | `idempotent`; caller key or fresh `idem_<unique>` |
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wallet_client::gateway::{IdempotencyKey, RequestGateway, RequestOptions, ReqwestTransport};
//! use wallet_client::session::{AuthModal, SessionStore};
//!
//! # async fn run() -> wallet_client::core::error::Result<()> {
//! let gateway = RequestGateway::new(
//!     "http://127.0.0.1:3001",
//!     ReqwestTransport::new(None)?,
//!     Arc::new(SessionStore::new()),
//!     Arc::new(AuthModal::new()),
//! );
//!
//! let key = IdempotencyKey::new();
//! let body = serde_json::json!({"amount": "25.00", "currency": "USD"});
//! let receipt: serde_json::Value = gateway
//!     .call_json("/api/v1/wallets/topups", RequestOptions::post(&body)?.idempotency_key(&key))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod options;
mod response;
mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{RequestGateway, IDEMPOTENCY_KEY_HEADER, REQUEST_ID_HEADER};
pub use options::{IdempotencyKey, RequestOptions};
pub use response::ResponseBody;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

#[cfg(test)]
mod tests {
    use super::mock::{self, harness, MockReply};
    use super::*;
    use crate::core::error::GatewayError;
    use crate::session::{AuthMode, AuthSession, SessionProvider};
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
    use reqwest::Method;
    use serde_json::json;
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;

    fn header(req: &HttpRequest, name: &str) -> Option<String> {
        req.headers
            .get(name)
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn plain_get_has_request_id_and_no_optional_headers() {
        let h = harness(None);

        h.gateway.call("/api/v1/wallets", RequestOptions::get()).await.unwrap();

        let req = h.transport.last();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.url, "http://wallet.test/api/v1/wallets");
        assert!(header(&req, "x-request-id").unwrap().starts_with("req_"));
        assert!(req.headers.get(AUTHORIZATION).is_none());
        assert!(req.headers.get(CONTENT_TYPE).is_none());
        assert!(req.headers.get("idempotency-key").is_none());
        assert!(req.body.is_none());
    }

    #[tokio::test]
    async fn request_ids_are_unique_per_call() {
        let h = harness(None);

        h.gateway.call("/a", RequestOptions::get()).await.unwrap();
        h.gateway.call("/a", RequestOptions::get()).await.unwrap();

        let reqs = h.transport.requests();
        let first = header(&reqs[0], "x-request-id").unwrap();
        let second = header(&reqs[1], "x-request-id").unwrap();
        assert!(!first.is_empty());
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn caller_cannot_override_request_id() {
        let h = harness(None);

        let opts = RequestOptions::get()
            .header("X-Request-Id", "mine")
            .unwrap()
            .header("X-Client", "ios")
            .unwrap();
        h.gateway.call("/a", opts).await.unwrap();

        let req = h.transport.last();
        assert_ne!(header(&req, "x-request-id").as_deref(), Some("mine"));
        assert_eq!(header(&req, "x-client").as_deref(), Some("ios"));
    }

    #[tokio::test]
    async fn bearer_token_matches_session_and_overrides_caller_auth() {
        let h = harness(Some("jwt-abc"));

        let opts = RequestOptions::get().header("Authorization", "Bearer other").unwrap();
        h.gateway.call("/a", opts).await.unwrap();

        assert_eq!(
            header(&h.transport.last(), "authorization").as_deref(),
            Some("Bearer jwt-abc")
        );
    }

    #[tokio::test]
    async fn caller_auth_is_kept_when_signed_out() {
        let h = harness(None);

        let opts = RequestOptions::get().header("Authorization", "Basic dXNlcg==").unwrap();
        h.gateway.call("/a", opts).await.unwrap();

        assert_eq!(
            header(&h.transport.last(), "authorization").as_deref(),
            Some("Basic dXNlcg==")
        );
    }

    #[tokio::test]
    async fn body_is_json_serialized_with_content_type() {
        let h = harness(None);
        let body = json!({"amount": "25.00", "currency": "USD", "note": null});

        h.gateway
            .call("/api/v1/transfers", RequestOptions::post(&body).unwrap())
            .await
            .unwrap();

        let req = h.transport.last();
        assert_eq!(req.method, Method::POST);
        assert_eq!(header(&req, "content-type").as_deref(), Some("application/json"));
        let sent: serde_json::Value = serde_json::from_slice(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, body);
        assert_eq!(req.body.unwrap(), serde_json::to_vec(&body).unwrap());
    }

    #[tokio::test]
    async fn idempotent_calls_get_fresh_distinct_keys() {
        let h = harness(None);

        h.gateway.call("/t", RequestOptions::new(Method::POST).idempotent()).await.unwrap();
        h.gateway.call("/t", RequestOptions::new(Method::POST).idempotent()).await.unwrap();

        let reqs = h.transport.requests();
        let a = header(&reqs[0], "idempotency-key").unwrap();
        let b = header(&reqs[1], "idempotency-key").unwrap();
        assert!(a.starts_with("idem_") && a.len() > "idem_".len());
        assert!(b.starts_with("idem_"));
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn supplied_key_is_reused_across_retries() {
        let h = harness(None);
        let key = IdempotencyKey::new();
        h.transport.push(MockReply::Fail("connection reset".into()));

        let opts = RequestOptions::post(&json!({"quoteId": "q1"})).unwrap().idempotency_key(&key);
        assert!(h.gateway.call("/api/v1/fx/exchanges", opts.clone()).await.is_err());
        h.gateway.call("/api/v1/fx/exchanges", opts).await.unwrap();

        let reqs = h.transport.requests();
        assert_eq!(header(&reqs[0], "idempotency-key").as_deref(), Some(key.as_str()));
        assert_eq!(header(&reqs[1], "idempotency-key").as_deref(), Some(key.as_str()));
        assert_ne!(header(&reqs[0], "x-request-id"), header(&reqs[1], "x-request-id"));
    }

    #[tokio::test]
    async fn json_success_resolves_to_parsed_value() {
        let h = harness(None);
        h.transport.push_json(200, json!({"wallets": []}));

        let body = h.gateway.call("/api/v1/wallets", RequestOptions::get()).await.unwrap();

        assert_eq!(body, ResponseBody::Json(json!({"wallets": []})));
    }

    #[tokio::test]
    async fn text_success_resolves_to_text() {
        let h = harness(None);
        h.transport.push_text(200, "pong");

        let body = h.gateway.call("/ping", RequestOptions::get()).await.unwrap();

        assert_eq!(body.as_text(), Some("pong"));
    }

    #[tokio::test]
    async fn typed_call_rejects_text_response() {
        let h = harness(None);
        h.transport.push_text(200, "<html></html>");

        let err = h
            .gateway
            .call_json::<shared::WalletsResponse>("/api/v1/wallets", RequestOptions::get())
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[tokio::test]
    async fn server_error_message_and_status_are_surfaced() {
        let h = harness(Some("jwt"));
        h.transport.push_json(500, json!({"error": {"message": "boom"}}));

        let err = h.gateway.call("/api/v1/wallets", RequestOptions::get()).await.unwrap_err();

        match err {
            GatewayError::Api(api) => {
                assert_eq!(api.message, "boom");
                assert_eq!(api.status_code(), 500);
                assert_eq!(api.data, ResponseBody::Json(json!({"error": {"message": "boom"}})));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        assert!(h.session.is_signed_in());
        assert!(h.prompt.opened().is_empty());
    }

    #[tokio::test]
    async fn not_found_without_body_uses_fallback_message() {
        let h = harness(None);
        h.transport.push(MockReply::Respond(mock::response(404, "", String::new())));

        let err = h.gateway.call("/api/v1/missing", RequestOptions::get()).await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        let message = err.to_string();
        assert!(message.contains("/api/v1/missing"));
        assert!(message.contains("404"));
    }

    #[tokio::test]
    async fn unauthorized_clears_session_and_prompts_sign_in() {
        let h = harness(Some("expired"));
        h.transport.push_json(401, json!({"message": "Token expired"}));

        let err = h.gateway.call("/api/v1/wallets", RequestOptions::get()).await.unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Token expired");
        assert!(h.session.auth().is_none());
        assert_eq!(h.prompt.opened(), vec![AuthMode::SignIn]);
    }

    #[tokio::test]
    async fn unauthorized_while_signed_out_still_prompts() {
        let h = harness(None);
        h.transport.push_text(401, "");

        let err = h.gateway.call("/api/v1/wallets", RequestOptions::get()).await.unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert!(h.session.auth().is_none());
        assert_eq!(h.prompt.opened(), vec![AuthMode::SignIn]);
    }

    #[tokio::test]
    async fn unauthorized_clears_session_established_in_flight() {
        let h = harness(Some("old"));
        let session = h.session.clone();
        h.transport.push(MockReply::RespondAfter(
            Box::new(move || session.sign_in(AuthSession::new("new"))),
            mock::response(401, "", String::new()),
        ));

        let err = h.gateway.call("/a", RequestOptions::get()).await.unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(h.session.token(), None);
        assert_eq!(h.prompt.opened(), vec![AuthMode::SignIn]);
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let h = harness(Some("jwt"));
        h.transport.push(MockReply::Fail("dns failure".into()));

        let err = h.gateway.call("/a", RequestOptions::get()).await.unwrap_err();

        assert!(matches!(err, GatewayError::Transport(_)));
        assert!(err.to_string().contains("dns failure"));
        assert!(h.session.is_signed_in());
        assert!(h.prompt.opened().is_empty());
    }

    #[tokio::test]
    async fn cancellation_aborts_in_flight_call() {
        let h = harness(None);
        h.transport.push(MockReply::Hang);
        let token = CancellationToken::new();

        let canceller = {
            let token = token.clone();
            async move {
                tokio::time::sleep(Duration::from_millis(10)).await;
                token.cancel();
            }
        };
        let (res, _) = tokio::join!(
            h.gateway.call("/slow", RequestOptions::get().cancel_on(token)),
            canceller
        );

        assert!(matches!(res, Err(GatewayError::Cancelled)));
    }

    #[tokio::test]
    async fn cancelled_token_never_sends() {
        let h = harness(None);
        let token = CancellationToken::new();
        token.cancel();

        let res = h.gateway.call("/a", RequestOptions::get().cancel_on(token)).await;

        assert!(matches!(res, Err(GatewayError::Cancelled)));
        assert!(h.transport.requests().is_empty());
    }

    #[test]
    fn urls_are_joined_against_base() {
        let h = harness(None);
        assert_eq!(h.gateway.url_for("/api/v1/wallets"), "http://wallet.test/api/v1/wallets");
        assert_eq!(h.gateway.url_for("api/v1/wallets"), "http://wallet.test/api/v1/wallets");
        assert_eq!(h.gateway.url_for("https://other.test/x"), "https://other.test/x");
    }
}
