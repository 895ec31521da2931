use maud::{html, Markup, PreEscaped};

use crate::models::{ChatMessage, Role};
use crate::names;

pub fn transcript(history: &[ChatMessage], error: Option<&str>) -> Markup {
    html! {
        h2 { "Chat" }

        @if let Some(error) = error {
            p style="color: #d32f2f;" { (error) }
        }

        @for message in history {
            article {
                @match message.role {
                    Role::User => {
                        header { strong { "You" } }
                        p { (message.content) }
                    }
                    Role::Assistant => {
                        header { strong { "Assistant" } }
                        // Assistant content already carries <br> markup.
                        p { (PreEscaped(&message.content)) }
                    }
                }
            }
        }

        form method="post" action=(names::CHAT_URL) {
            input type="text" name="user_message" placeholder="Ask anything" required;
            button type="submit" { "Send" }
        }
        form method="post" action=(names::CLEAR_CHAT_URL) {
            button type="submit" class="secondary" { "Clear chat" }
        }
    }
}
