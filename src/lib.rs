pub mod gateway;
pub mod handlers;
pub mod models;
pub mod names;
pub mod parse;
pub mod prompts;
pub mod rejections;
pub mod store;
pub mod utils;
pub mod views;

use std::sync::Arc;

use axum::{extract::FromRef, Router};
use axum_extra::extract::cookie::Key;

use crate::gateway::ModelGateway;
use crate::store::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub store: SessionStore,
    pub gateway: Arc<dyn ModelGateway>,
    pub cookie_key: Key,
    pub secure_cookies: bool,
}

impl AppState {
    /// The cookie signing key is generated per process; session state lives
    /// in memory, so sessions do not outlive a restart anyway.
    pub fn new(gateway: Arc<dyn ModelGateway>, secure_cookies: bool) -> Self {
        Self {
            store: SessionStore::new(),
            gateway,
            cookie_key: Key::generate(),
            secure_cookies,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::quiz::routes())
        .merge(handlers::news::routes())
        .merge(handlers::review::routes())
        .merge(handlers::chat::routes())
        .with_state(state)
}
