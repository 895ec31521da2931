//! Builds the natural-language prompts sent to the model gateway.
//! Text formatting only: no parsing, no networking.

pub fn quiz(topic: &str, difficulty: &str, num_questions: u32) -> String {
    format!(
        "Generate {num_questions} multiple choice questions about {topic}. \
         The difficulty should be {difficulty}. Each question must have 4 options \
         labeled A), B), C), and D), and indicate the correct answer."
    )
}

pub fn news(news_prompt: &str) -> String {
    format!("Provide the latest {news_prompt}")
}

pub fn review_info(topic: &str) -> String {
    format!("Provide detailed information about {topic}.")
}

pub fn review_links(topic: &str) -> String {
    format!("Generate YouTube links related to {topic}.")
}
