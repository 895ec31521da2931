use axum::{
    extract::{Form, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::SignedCookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    models::{ChatMessage, Role},
    names, parse,
    store::resolve_session,
    views,
    views::chat as chat_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::CHAT_URL, get(chat_page).post(send_message))
        .route(names::CLEAR_CHAT_URL, post(clear_chat))
}

async fn chat_page(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    let (sid, jar) = resolve_session(jar, state.secure_cookies);
    let history = state.store.chat_history(&sid);
    let page = views::page("Chat", chat_views::transcript(&history, None));
    (jar, page).into_response()
}

#[derive(Deserialize)]
struct ChatBody {
    #[serde(default)]
    user_message: String,
}

async fn send_message(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(body): Form<ChatBody>,
) -> Response {
    let (sid, jar) = resolve_session(jar, state.secure_cookies);

    if body.user_message.is_empty() {
        let history = state.store.chat_history(&sid);
        let page = views::page("Chat", chat_views::transcript(&history, None));
        return (jar, page).into_response();
    }

    state.store.push_chat(
        &sid,
        ChatMessage {
            role: Role::User,
            content: body.user_message.clone(),
        },
    );

    match state.gateway.generate(&body.user_message).await {
        Ok(text) => {
            let history = state.store.push_chat(
                &sid,
                ChatMessage {
                    role: Role::Assistant,
                    content: parse::format_response(&text),
                },
            );
            let page = views::page("Chat", chat_views::transcript(&history, None));
            (jar, page).into_response()
        }
        Err(e) => {
            // The user turn stays in the transcript; the failure is shown
            // next to it instead of failing the whole request.
            tracing::error!("chat generation failed: {e}");
            let history = state.store.chat_history(&sid);
            let page = views::page("Chat", chat_views::transcript(&history, Some(&e.to_string())));
            (jar, page).into_response()
        }
    }
}

#[derive(Serialize)]
struct ClearChatResponse {
    message: &'static str,
}

async fn clear_chat(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    let (sid, jar) = resolve_session(jar, state.secure_cookies);
    state.store.clear_chat(&sid);
    tracing::info!("chat history cleared");
    (jar, Json(ClearChatResponse { message: "Chat cleared" })).into_response()
}
