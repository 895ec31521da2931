// Turns free-form model output into structured records. Model output is
// untrusted text; everything here must tolerate malformed input without
// failing the request.

mod chat;
mod news;
mod quiz;

pub use chat::format_response;
pub use news::news_articles;
pub use quiz::{quiz_questions, NoValidQuestions};
