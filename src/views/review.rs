use maud::{html, Markup};

use crate::models::ReviewResult;
use crate::names;

pub fn form(error: Option<&str>) -> Markup {
    html! {
        h2 { "Review a topic" }

        @if let Some(error) = error {
            p style="color: #d32f2f;" { (error) }
        }

        form method="post" action=(names::REVIEW_URL) {
            label {
                "Topic"
                input type="text" name="topic_prompt" placeholder="e.g. the French Revolution" required;
            }
            button type="submit" { "Review" }
        }
    }
}

pub fn review(result: &ReviewResult) -> Markup {
    html! {
        h2 { "Review" }

        article {
            @for line in result.info.lines() {
                p { (line) }
            }
        }

        @if !result.youtube_links.is_empty() {
            h3 { "Videos" }
            ul {
                @for link in &result.youtube_links {
                    li { a href=(link) target="_blank" { (link) } }
                }
            }
        }

        a href=(names::REVIEW_URL) role="button" { "Review another topic" }
    }
}
