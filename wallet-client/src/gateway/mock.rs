//! Recording transport and prompt for gateway tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;

use super::transport::{HttpRequest, HttpResponse, HttpTransport};
use super::RequestGateway;
use crate::core::error::TransportError;
use crate::services::api::WalletApi;
use crate::session::{AuthMode, AuthPrompt, AuthSession, SessionStore};

pub enum MockReply {
    Respond(HttpResponse),
    /// Run the hook while the request is in flight, then respond.
    RespondAfter(Box<dyn FnOnce() + Send>, HttpResponse),
    Fail(String),
    Hang,
}

#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, reply: MockReply) {
        self.replies.lock().push_back(reply);
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push(MockReply::Respond(response(status, "application/json", body.to_string())));
    }

    pub fn push_text(&self, status: u16, body: &str) {
        self.push(MockReply::Respond(response(status, "text/plain", body.to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.requests
            .lock()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

pub fn response(status: u16, content_type: &str, body: String) -> HttpResponse {
    let mut headers = HeaderMap::new();
    if !content_type.is_empty() {
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
    }
    HttpResponse {
        status: StatusCode::from_u16(status).unwrap(),
        headers,
        body: body.into_bytes(),
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().push(request);
        let reply = self.replies.lock().pop_front();
        match reply {
            Some(MockReply::Respond(res)) => Ok(res),
            Some(MockReply::RespondAfter(hook, res)) => {
                hook();
                Ok(res)
            }
            Some(MockReply::Fail(msg)) => Err(TransportError::Other(msg)),
            Some(MockReply::Hang) => std::future::pending().await,
            None => Ok(response(200, "application/json", "{}".to_string())),
        }
    }
}

#[derive(Default)]
pub struct RecordingPrompt {
    opened: Mutex<Vec<AuthMode>>,
}

impl RecordingPrompt {
    pub fn opened(&self) -> Vec<AuthMode> {
        self.opened.lock().clone()
    }
}

impl AuthPrompt for RecordingPrompt {
    fn open(&self, mode: AuthMode) {
        self.opened.lock().push(mode);
    }
}

pub struct Harness {
    pub gateway: RequestGateway<Arc<MockTransport>>,
    pub transport: Arc<MockTransport>,
    pub session: Arc<SessionStore>,
    pub prompt: Arc<RecordingPrompt>,
}

pub fn harness(token: Option<&str>) -> Harness {
    let transport = MockTransport::new();
    let session = Arc::new(match token {
        Some(t) => SessionStore::signed_in(AuthSession::new(t)),
        None => SessionStore::new(),
    });
    let prompt = Arc::new(RecordingPrompt::default());
    let gateway = RequestGateway::new(
        "http://wallet.test",
        transport.clone(),
        session.clone(),
        prompt.clone(),
    );
    Harness {
        gateway,
        transport,
        session,
        prompt,
    }
}

pub struct ApiHarness {
    pub api: WalletApi<Arc<MockTransport>>,
    pub transport: Arc<MockTransport>,
    pub session: Arc<SessionStore>,
    pub prompt: Arc<RecordingPrompt>,
}

pub fn api_harness(token: Option<&str>) -> ApiHarness {
    let Harness {
        gateway,
        transport,
        session,
        prompt,
    } = harness(token);
    ApiHarness {
        api: WalletApi::new(gateway),
        transport,
        session,
        prompt,
    }
}
