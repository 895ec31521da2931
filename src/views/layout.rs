use maud::{html, Markup, DOCTYPE};

use crate::{names, utils};

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
    }
}

fn header() -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        a href="/" {
                            strong { "Studyhall" }
                        }
                    }
                }
                ul {
                    li { a href=(names::QUIZ_URL) { "Quiz" } }
                    li { a href=(names::NEWS_URL) { "News" } }
                    li { a href=(names::REVIEW_URL) { "Review" } }
                    li { a href=(names::CHAT_URL) { "Chat" } }
                    li."secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())

            title { (format!("{title} - Studyhall")) }
        }

        body."container" {
            (header())
            (main(body))
        }
    }
}
