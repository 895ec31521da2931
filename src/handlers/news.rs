use axum::{
    extract::{Form, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_extra::extract::SignedCookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    models::NewsArticle,
    names, parse, prompts,
    rejections::{AppError, ResultExt},
    store::resolve_session,
    views,
    views::news as news_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::NEWS_URL, get(news_page).post(generate_news))
        .route(names::NEWS_LOAD_MORE_URL, get(load_more))
}

async fn news_page(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    let (sid, jar) = resolve_session(jar, state.secure_cookies);
    let articles = state.store.news_articles(&sid).unwrap_or_default();
    let page = views::page("News", news_views::articles(&articles, None));
    (jar, page).into_response()
}

#[derive(Deserialize)]
struct NewsBody {
    #[serde(default = "default_news_prompt")]
    news_prompt: String,
}

fn default_news_prompt() -> String {
    names::DEFAULT_NEWS_PROMPT.to_string()
}

async fn generate_news(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(body): Form<NewsBody>,
) -> Response {
    let (sid, jar) = resolve_session(jar, state.secure_cookies);

    // Remember the prompt before calling out, so load-more can reuse it
    // even if this generation fails.
    state.store.set_news_prompt(&sid, body.news_prompt.clone());

    match state.gateway.generate(&prompts::news(&body.news_prompt)).await {
        Ok(text) => {
            let articles = parse::news_articles(&text);
            tracing::info!(
                "generated {} articles for '{}'",
                articles.len(),
                body.news_prompt
            );
            state.store.cache_news_articles(&sid, articles.clone());
            let page = views::page("News", news_views::articles(&articles, None));
            (jar, page).into_response()
        }
        Err(e) => {
            tracing::error!("news generation failed: {e}");
            let articles = state.store.news_articles(&sid).unwrap_or_default();
            let page = views::page("News", news_views::articles(&articles, Some(&e.to_string())));
            (jar, page).into_response()
        }
    }
}

#[derive(Deserialize)]
struct LoadMoreQuery {
    #[serde(default)]
    offset: usize,
}

#[derive(Serialize)]
struct LoadMoreResponse {
    news_articles: Vec<NewsArticle>,
}

/// Pagination slices the article list cached by the last news POST; a fresh
/// generation happens only when nothing is cached yet for this session.
async fn load_more(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Query(query): Query<LoadMoreQuery>,
) -> Result<Response, AppError> {
    let (sid, jar) = resolve_session(jar, state.secure_cookies);

    let articles = match state.store.news_articles(&sid) {
        Some(articles) => articles,
        None => {
            let prompt = state
                .store
                .news_prompt(&sid)
                .unwrap_or_else(|| names::DEFAULT_NEWS_PROMPT.to_string());
            let text = state
                .gateway
                .generate(&prompts::news(&prompt))
                .await
                .reject("could not load more news")?;
            let articles = parse::news_articles(&text);
            state.store.cache_news_articles(&sid, articles.clone());
            articles
        }
    };

    let page: Vec<NewsArticle> = articles
        .into_iter()
        .skip(query.offset)
        .take(names::NEWS_PAGE_SIZE)
        .collect();

    Ok((jar, Json(LoadMoreResponse { news_articles: page })).into_response())
}
