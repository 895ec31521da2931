pub const QUIZ_URL: &str = "/quiz";
pub const NEXT_QUESTION_URL: &str = "/next_question";
pub const NEWS_URL: &str = "/news";
pub const NEWS_LOAD_MORE_URL: &str = "/news/load_more";
pub const REVIEW_URL: &str = "/review";
pub const CHAT_URL: &str = "/chat";
pub const CLEAR_CHAT_URL: &str = "/clear_chat";

pub const SESSION_COOKIE_NAME: &str = "studyhall_session";

// Quiz defaults
pub const DEFAULT_TIMER_SECS: u32 = 30;
pub const DEFAULT_DIFFICULTY: &str = "medium";
pub const DEFAULT_NUM_QUESTIONS: u32 = 5;

// News defaults
pub const DEFAULT_NEWS_PROMPT: &str = "student news";
pub const NEWS_PAGE_SIZE: usize = 5;
