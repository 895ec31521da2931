use studyhall::models::{ChatMessage, NewsArticle, QuizQuestion, QuizState, Role};
use studyhall::store::SessionStore;

fn question(n: usize) -> QuizQuestion {
    let options: Vec<String> = ["A)", "B)", "C)", "D)"]
        .iter()
        .map(|prefix| format!("{prefix} option {n}"))
        .collect();
    QuizQuestion {
        question: format!("Question {n}"),
        correct_answer: options[0].clone(),
        options,
    }
}

fn sample_quiz(count: usize) -> QuizState {
    QuizState::new((0..count).map(question).collect(), 30)
}

fn user(content: &str) -> ChatMessage {
    ChatMessage {
        role: Role::User,
        content: content.to_string(),
    }
}

#[test]
fn submit_answer_appends_and_advances() {
    let store = SessionStore::new();
    store.start_quiz("s", sample_quiz(3));

    let quiz = store.submit_answer("s", "A) option 0".to_string()).unwrap();
    assert_eq!(quiz.current, 1);
    assert_eq!(quiz.answers, vec!["A) option 0".to_string()]);
    assert!(!quiz.is_finished());

    // answers always tracks the question index
    let quiz = store.submit_answer("s", "wrong".to_string()).unwrap();
    assert_eq!(quiz.answers.len(), quiz.current);
}

#[test]
fn submit_answer_without_quiz_returns_none() {
    let store = SessionStore::new();
    assert!(store.submit_answer("s", "anything".to_string()).is_none());
}

#[test]
fn quiz_finishes_after_last_answer() {
    let store = SessionStore::new();
    store.start_quiz("s", sample_quiz(2));

    let quiz = store.submit_answer("s", "x".to_string()).unwrap();
    assert!(!quiz.is_finished());

    let quiz = store.submit_answer("s", "y".to_string()).unwrap();
    assert!(quiz.is_finished());
}

#[test]
fn score_counts_positional_matches() {
    let store = SessionStore::new();
    store.start_quiz("s", sample_quiz(3));

    store.submit_answer("s", "A) option 0".to_string());
    store.submit_answer("s", "B) option 1".to_string());
    let quiz = store.submit_answer("s", "A) option 2".to_string()).unwrap();

    assert_eq!(quiz.score(), 2);
}

#[test]
fn empty_quiz_scores_zero_of_zero() {
    let quiz = QuizState::new(Vec::new(), 30);

    assert_eq!(quiz.score(), 0);
    assert_eq!(quiz.questions.len(), 0);
    assert!(quiz.is_finished());
}

#[test]
fn starting_a_new_quiz_resets_progress() {
    let store = SessionStore::new();
    store.start_quiz("s", sample_quiz(2));
    store.submit_answer("s", "a".to_string());
    store.submit_answer("s", "b".to_string());
    assert!(store.active_quiz("s").unwrap().is_finished());

    store.start_quiz("s", sample_quiz(3));
    let fresh = store.active_quiz("s").unwrap();

    assert_eq!(fresh.current, 0);
    assert!(fresh.answers.is_empty());
    assert_eq!(fresh.questions.len(), 3);
}

// --- Chat history ---

#[test]
fn chat_history_initializes_empty() {
    let store = SessionStore::new();
    assert!(store.chat_history("s").is_empty());
}

#[test]
fn push_chat_appends_in_order() {
    let store = SessionStore::new();
    store.push_chat("s", user("first"));
    let history = store.push_chat("s", user("second"));

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].content, "first");
    assert_eq!(history[1].content, "second");
}

#[test]
fn clear_chat_removes_history_entirely() {
    let store = SessionStore::new();
    store.push_chat("s", user("old"));
    store.clear_chat("s");

    assert!(store.chat_history("s").is_empty());

    // A fresh transcript starts from the new turn only.
    let history = store.push_chat("s", user("new"));
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].content, "new");
}

// --- News state ---

#[test]
fn news_prompt_and_articles_round_trip() {
    let store = SessionStore::new();
    assert!(store.news_prompt("s").is_none());
    assert!(store.news_articles("s").is_none());

    store.set_news_prompt("s", "tech news".to_string());
    let articles = vec![NewsArticle {
        title: "T".to_string(),
        description: "D".to_string(),
        url: "#".to_string(),
    }];
    store.cache_news_articles("s", articles.clone());

    assert_eq!(store.news_prompt("s").unwrap(), "tech news");
    assert_eq!(store.news_articles("s").unwrap(), articles);
}

// --- Isolation ---

#[test]
fn sessions_do_not_share_state() {
    let store = SessionStore::new();
    store.start_quiz("a", sample_quiz(1));
    store.push_chat("a", user("hello"));
    store.set_news_prompt("a", "prompt".to_string());

    assert!(store.active_quiz("b").is_none());
    assert!(store.chat_history("b").is_empty());
    assert!(store.news_prompt("b").is_none());
}
