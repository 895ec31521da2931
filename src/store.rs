// Per-session state, kept in memory for the lifetime of the process. Each
// browser session is identified by an opaque ulid carried in a signed cookie.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum_extra::extract::cookie::SignedCookieJar;
use ulid::Ulid;

use crate::models::{ChatMessage, NewsArticle, QuizState};
use crate::{names, utils};

/// State owned by one session. Fields start absent and are initialized on
/// first touch by the store accessors; `chat_history` distinguishes
/// "never used" from "empty" because clearing the chat must remove the
/// field so the next request re-initializes it.
#[derive(Debug, Clone, Default)]
pub struct SessionData {
    pub quiz: Option<QuizState>,
    pub chat_history: Option<Vec<ChatMessage>>,
    pub news_prompt: Option<String>,
    pub news_articles: Option<Vec<NewsArticle>>,
}

/// Shared handle to all session state. Cheap to clone.
///
/// Operations take the map lock once each, so a single call is atomic, but
/// there is no per-session mutual exclusion across requests: two concurrent
/// submissions from the same session are last-write-wins.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<String, SessionData>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with<R>(&self, sid: &str, f: impl FnOnce(&mut SessionData) -> R) -> R {
        let mut sessions = self.inner.lock().expect("session store lock poisoned");
        f(sessions.entry(sid.to_owned()).or_default())
    }

    /// Installs a fresh quiz, discarding any prior quiz state.
    pub fn start_quiz(&self, sid: &str, quiz: QuizState) {
        self.with(sid, |s| s.quiz = Some(quiz));
    }

    pub fn active_quiz(&self, sid: &str) -> Option<QuizState> {
        self.with(sid, |s| s.quiz.clone())
    }

    /// Appends the answer and advances the question index under a single
    /// lock acquisition. Returns the updated quiz, or `None` when no quiz
    /// is in progress.
    pub fn submit_answer(&self, sid: &str, answer: String) -> Option<QuizState> {
        self.with(sid, |s| {
            let quiz = s.quiz.as_mut()?;
            quiz.answers.push(answer);
            quiz.current += 1;
            Some(quiz.clone())
        })
    }

    /// Returns the chat history, initializing it to empty if absent.
    pub fn chat_history(&self, sid: &str) -> Vec<ChatMessage> {
        self.with(sid, |s| s.chat_history.get_or_insert_with(Vec::new).clone())
    }

    /// Appends one turn and returns the full transcript.
    pub fn push_chat(&self, sid: &str, message: ChatMessage) -> Vec<ChatMessage> {
        self.with(sid, |s| {
            let history = s.chat_history.get_or_insert_with(Vec::new);
            history.push(message);
            history.clone()
        })
    }

    /// Removes the chat history entirely, so the next chat request starts
    /// from a fresh transcript.
    pub fn clear_chat(&self, sid: &str) {
        self.with(sid, |s| s.chat_history = None);
    }

    pub fn set_news_prompt(&self, sid: &str, prompt: String) {
        self.with(sid, |s| s.news_prompt = Some(prompt));
    }

    pub fn news_prompt(&self, sid: &str) -> Option<String> {
        self.with(sid, |s| s.news_prompt.clone())
    }

    pub fn cache_news_articles(&self, sid: &str, articles: Vec<NewsArticle>) {
        self.with(sid, |s| s.news_articles = Some(articles));
    }

    pub fn news_articles(&self, sid: &str) -> Option<Vec<NewsArticle>> {
        self.with(sid, |s| s.news_articles.clone())
    }
}

/// Reads the session id from the signed cookie, minting a new id (and
/// setting the cookie) when the request carries none. Handlers return the
/// jar with their response so a minted cookie reaches the browser.
pub fn resolve_session(jar: SignedCookieJar, secure_cookies: bool) -> (String, SignedCookieJar) {
    if let Some(cookie) = jar.get(names::SESSION_COOKIE_NAME) {
        (cookie.value().to_owned(), jar)
    } else {
        let sid = Ulid::new().to_string();
        let cookie = utils::cookie(names::SESSION_COOKIE_NAME, &sid, secure_cookies);
        (sid, jar.add(cookie))
    }
}
