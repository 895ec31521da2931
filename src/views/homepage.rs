use maud::{html, Markup};

use crate::names;

pub fn home() -> Markup {
    html! {
        h2 { "Welcome to Studyhall" }
        p { "Generate practice quizzes, catch up on news, review a topic, or chat with the assistant." }

        div."grid" {
            a href=(names::QUIZ_URL) role="button" { "Quiz" }
            a href=(names::NEWS_URL) role="button" { "News" }
            a href=(names::REVIEW_URL) role="button" { "Review" }
            a href=(names::CHAT_URL) role="button" { "Chat" }
        }
    }
}
