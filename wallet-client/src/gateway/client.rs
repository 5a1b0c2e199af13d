use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;

use super::options::RequestOptions;
use super::response::ResponseBody;
use super::transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use crate::config::ClientConfig;
use crate::core::error::{ApiError, GatewayError, Result};
use crate::session::{AuthMode, AuthPrompt, AuthSession, SessionProvider};

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");
pub const IDEMPOTENCY_KEY_HEADER: HeaderName = HeaderName::from_static("idempotency-key");

/// Single entry point for every backend call.
///
/// Stamps each request with an `X-Request-Id`, attaches the session's bearer
/// token, adds an `Idempotency-Key` to idempotent calls and normalizes non-2xx
/// responses into [`ApiError`]. A 401 clears the session and opens the
/// sign-in prompt. Each call is attempted exactly once.
pub struct RequestGateway<T = ReqwestTransport> {
    base_url: String,
    transport: T,
    session: Arc<dyn SessionProvider>,
    prompt: Arc<dyn AuthPrompt>,
}

impl RequestGateway<ReqwestTransport> {
    /// Gateway over a `reqwest` transport configured from `config`.
    pub fn from_config(
        config: &ClientConfig,
        session: Arc<dyn SessionProvider>,
        prompt: Arc<dyn AuthPrompt>,
    ) -> Result<Self> {
        let transport = ReqwestTransport::new(config.request_timeout)?;
        Ok(Self::new(config.api_base_url.clone(), transport, session, prompt))
    }
}

impl<T: HttpTransport> RequestGateway<T> {
    pub fn new(
        base_url: impl Into<String>,
        transport: T,
        session: Arc<dyn SessionProvider>,
        prompt: Arc<dyn AuthPrompt>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            session,
            prompt,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<dyn SessionProvider> {
        &self.session
    }

    /// Resolve `path` against the base URL. Absolute URLs pass through.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Issue one request and return the parsed body.
    #[tracing::instrument(
        name = "api_call",
        skip(self, options),
        fields(method = %options.method, path = %path, request_id = tracing::field::Empty)
    )]
    pub async fn call(&self, path: &str, options: RequestOptions) -> Result<ResponseBody> {
        let RequestOptions {
            method,
            body,
            headers: extra_headers,
            idempotent,
            idempotency_key,
            cancel,
        } = options;

        if cancel.as_ref().is_some_and(|c| c.is_cancelled()) {
            tracing::debug!("Request cancelled before send");
            return Err(GatewayError::Cancelled);
        }

        let auth = self.session.auth();
        let request_id = lib_utils::new_request_id();
        tracing::Span::current().record("request_id", request_id.as_str());

        let idempotency_key = idempotent.then(|| {
            idempotency_key
                .map(|k| k.as_str().to_string())
                .unwrap_or_else(lib_utils::new_idempotency_key)
        });

        let headers = build_headers(
            extra_headers,
            &request_id,
            auth.as_ref(),
            body.is_some(),
            idempotency_key.as_deref(),
        )?;

        let payload = body
            .map(|b| serde_json::to_vec(&b))
            .transpose()
            .map_err(|e| GatewayError::InvalidRequest(format!("body is not serializable: {}", e)))?;

        let request = HttpRequest {
            method,
            url: self.url_for(path),
            headers,
            body: payload,
        };

        tracing::debug!(idempotent, authenticated = auth.is_some(), "Sending request");
        let start = Instant::now();

        let sent = match cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::info!(duration_ms = start.elapsed().as_millis(), "Request cancelled");
                    return Err(GatewayError::Cancelled);
                }
                res = self.transport.send(request) => res,
            },
            None => self.transport.send(request).await,
        };

        let response = sent.map_err(|e| {
            tracing::error!(error = %e, duration_ms = start.elapsed().as_millis(), "Network error");
            GatewayError::Transport(e)
        })?;

        self.finish(path, response, start)
    }

    fn finish(
        &self,
        path: &str,
        response: HttpResponse,
        start: Instant,
    ) -> Result<ResponseBody> {
        let status = response.status;
        let duration_ms = start.elapsed().as_millis();
        let data = ResponseBody::parse(response.content_type(), &response.body);

        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                self.handle_unauthorized();
            }

            let error = ApiError::from_response(path, status, data);
            tracing::warn!(
                status = status.as_u16(),
                error = %error.message,
                duration_ms,
                "Request failed"
            );
            return Err(error.into());
        }

        tracing::info!(status = status.as_u16(), duration_ms, "Request completed");
        Ok(data)
    }

    /// Clear whatever session is stored and prompt for sign-in.
    fn handle_unauthorized(&self) {
        if self.session.auth().is_some() {
            tracing::warn!("Session rejected by backend, signing out");
            self.session.set_auth(None);
        }
        self.prompt.open(AuthMode::SignIn);
    }

    /// Issue a request and decode the JSON body into `R`.
    pub async fn call_json<R: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<R> {
        self.call(path, options).await?.decode()
    }

    /// Issue a request and return the body as text.
    pub async fn call_text(&self, path: &str, options: RequestOptions) -> Result<String> {
        Ok(self.call(path, options).await?.into_text())
    }
}

fn build_headers(
    mut headers: HeaderMap,
    request_id: &str,
    auth: Option<&AuthSession>,
    has_body: bool,
    idempotency_key: Option<&str>,
) -> Result<HeaderMap> {
    headers.insert(REQUEST_ID_HEADER, header_value(request_id, "X-Request-Id")?);

    if let Some(auth) = auth {
        let mut value = header_value(&format!("Bearer {}", auth.jwt), "Authorization")?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    if has_body {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }

    if let Some(key) = idempotency_key {
        headers.insert(IDEMPOTENCY_KEY_HEADER, header_value(key, "Idempotency-Key")?);
    }

    Ok(headers)
}

fn header_value(value: &str, name: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| GatewayError::InvalidRequest(format!("invalid value for header {}", name)))
}
