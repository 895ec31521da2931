use maud::{html, Markup};

use crate::models::NewsArticle;
use crate::names;

pub fn articles(articles: &[NewsArticle], error: Option<&str>) -> Markup {
    html! {
        h2 { "News" }

        @if let Some(error) = error {
            p style="color: #d32f2f;" { (error) }
        }

        form method="post" action=(names::NEWS_URL) {
            label {
                "Topic"
                input type="text" name="news_prompt" placeholder=(names::DEFAULT_NEWS_PROMPT);
            }
            button type="submit" { "Get news" }
        }

        @if articles.is_empty() {
            p { "No articles yet. Ask for a topic above." }
        }

        @for article in articles {
            article {
                h4 { a href=(article.url) { (article.title) } }
                p { (article.description) }
            }
        }
    }
}
