use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use studyhall::gateway::{GatewayError, ModelGateway};
use studyhall::{router, AppState};

/// Gateway stub that replays a scripted sequence of completions. An entry of
/// `None`, or an exhausted script, makes the call fail.
#[derive(Clone, Default)]
pub struct ScriptedGateway {
    replies: Arc<Mutex<VecDeque<Option<String>>>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, text: &str) {
        self.replies
            .lock()
            .expect("scripted gateway lock")
            .push_back(Some(text.to_string()));
    }

    pub fn push_err(&self) {
        self.replies
            .lock()
            .expect("scripted gateway lock")
            .push_back(None);
    }
}

#[async_trait]
impl ModelGateway for ScriptedGateway {
    async fn generate(&self, _prompt: &str) -> Result<String, GatewayError> {
        match self
            .replies
            .lock()
            .expect("scripted gateway lock")
            .pop_front()
        {
            Some(Some(text)) => Ok(text),
            _ => Err(GatewayError::EmptyResponse),
        }
    }
}

pub fn app(gateway: ScriptedGateway) -> axum::Router {
    router(AppState::new(Arc::new(gateway), false))
}

/// The `name=value` part of the session cookie set by a response.
pub fn session_cookie(headers: &axum::http::HeaderMap) -> Option<String> {
    headers
        .get(axum::http::header::SET_COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .next()
        .map(str::to_string)
}

pub async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    String::from_utf8(bytes.to_vec()).expect("response body is UTF-8")
}
