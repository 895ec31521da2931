use serde::{Deserialize, Serialize};

/// One multiple-choice question extracted from a model completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    /// Exactly four entries, each carrying its "A)".."D)" prefix.
    pub options: Vec<String>,
    /// The option recorded as correct while scanning: always the first
    /// option listed under the question. The model is asked to indicate the
    /// right answer but its reply format gives no reliable way to read it
    /// back, so this stays a documented placeholder.
    pub correct_answer: String,
}

/// Progress of a running quiz, stored in the session between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    pub questions: Vec<QuizQuestion>,
    pub current: usize,
    pub answers: Vec<String>,
    pub timer_secs: u32,
}

impl QuizState {
    pub fn new(questions: Vec<QuizQuestion>, timer_secs: u32) -> Self {
        Self {
            questions,
            current: 0,
            answers: Vec::new(),
            timer_secs,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Number of answers equal to the recorded correct answer, compared by
    /// position.
    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .zip(&self.answers)
            .filter(|(q, a)| q.correct_answer == **a)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    /// Assistant content carries `<br>` markup inserted around fenced code
    /// blocks; user content is stored verbatim.
    pub content: String,
}

/// Outcome of a review request. Never stored in the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewResult {
    pub info: String,
    pub youtube_links: Vec<String>,
}
