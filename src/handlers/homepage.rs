use axum::{routing::get, Router};

use crate::{views, views::homepage as homepage_views, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(homepage))
}

async fn homepage() -> maud::Markup {
    views::page("Home", homepage_views::home())
}
