use axum::{
    extract::{Form, State},
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::{
    gateway::GatewayError,
    models::ReviewResult,
    names, prompts, views,
    views::review as review_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::REVIEW_URL, get(review_page).post(generate_review))
}

async fn review_page() -> maud::Markup {
    views::page("Review", review_views::form(None))
}

#[derive(Deserialize)]
struct ReviewBody {
    #[serde(default)]
    topic_prompt: String,
}

async fn generate_review(
    State(state): State<AppState>,
    Form(body): Form<ReviewBody>,
) -> maud::Markup {
    match generate(&state, &body.topic_prompt).await {
        Ok(review) => views::page("Review", review_views::review(&review)),
        Err(e) => {
            tracing::error!("review generation failed: {e}");
            views::page("Review", review_views::form(Some(&e.to_string())))
        }
    }
}

/// Two independent generations per request; either failure aborts the whole
/// operation. Nothing is stored in the session.
async fn generate(state: &AppState, topic: &str) -> Result<ReviewResult, GatewayError> {
    let info = state.gateway.generate(&prompts::review_info(topic)).await?;
    let links = state.gateway.generate(&prompts::review_links(topic)).await?;

    let youtube_links = links.trim().lines().map(str::to_string).collect();

    Ok(ReviewResult {
        info: info.trim().to_string(),
        youtube_links,
    })
}
