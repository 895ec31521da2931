use axum::{
    extract::{Form, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;

use crate::{
    models::QuizState,
    names, parse, prompts,
    rejections::AppError,
    store::resolve_session,
    views,
    views::quiz as quiz_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::QUIZ_URL, get(quiz_page).post(start_quiz))
        .route(names::NEXT_QUESTION_URL, post(next_question))
}

async fn quiz_page() -> maud::Markup {
    views::page("Quiz", quiz_views::start_form(None))
}

#[derive(Deserialize)]
struct StartQuizBody {
    #[serde(default)]
    prompt: String,
    #[serde(default = "default_timer")]
    timer: u32,
    #[serde(default = "default_difficulty")]
    difficulty: String,
    #[serde(default = "default_num_questions")]
    num_questions: u32,
}

fn default_timer() -> u32 {
    names::DEFAULT_TIMER_SECS
}

fn default_difficulty() -> String {
    names::DEFAULT_DIFFICULTY.to_string()
}

fn default_num_questions() -> u32 {
    names::DEFAULT_NUM_QUESTIONS
}

async fn start_quiz(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(body): Form<StartQuizBody>,
) -> Result<Response, AppError> {
    let (sid, jar) = resolve_session(jar, state.secure_cookies);

    let prompt = prompts::quiz(&body.prompt, &body.difficulty, body.num_questions);
    let text = match state.gateway.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("quiz generation failed: {e}");
            let page = views::page("Quiz", quiz_views::start_form(Some(&e.to_string())));
            return Ok((jar, page).into_response());
        }
    };

    // No quiz session is started when the output yields no valid questions.
    let questions = match parse::quiz_questions(&text) {
        Ok(questions) => questions,
        Err(e) => {
            tracing::warn!("completion contained no valid questions");
            let page = views::page("Quiz", quiz_views::start_form(Some(&e.to_string())));
            return Ok((jar, page).into_response());
        }
    };

    let quiz = QuizState::new(questions, body.timer);
    tracing::info!(
        "quiz started: {} questions, timer {}s",
        quiz.questions.len(),
        quiz.timer_secs
    );

    let Some(first) = quiz.questions.first().cloned() else {
        return Err(AppError::Internal("generated quiz is empty"));
    };
    let total = quiz.questions.len();
    let timer_secs = quiz.timer_secs;
    state.store.start_quiz(&sid, quiz);

    let page = views::page(
        "Quiz",
        quiz_views::question(quiz_views::QuestionData {
            question: first,
            index: 0,
            total,
            timer_secs,
        }),
    );
    Ok((jar, page).into_response())
}

#[derive(Deserialize)]
struct NextQuestionBody {
    #[serde(default)]
    user_answer: String,
}

async fn next_question(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(body): Form<NextQuestionBody>,
) -> Result<Response, AppError> {
    let (sid, jar) = resolve_session(jar, state.secure_cookies);

    let Some(quiz) = state.store.submit_answer(&sid, body.user_answer) else {
        return Err(AppError::MissingState("no quiz in progress"));
    };

    if quiz.is_finished() {
        let score = quiz.score();
        tracing::info!("quiz finished: score {}/{}", score, quiz.questions.len());
        let page = views::page(
            "Results",
            quiz_views::results(quiz_views::ResultsData { quiz, score }),
        );
        return Ok((jar, page).into_response());
    }

    let Some(question) = quiz.questions.get(quiz.current).cloned() else {
        return Err(AppError::Internal("question index out of range"));
    };
    let page = views::page(
        "Quiz",
        quiz_views::question(quiz_views::QuestionData {
            question,
            index: quiz.current,
            total: quiz.questions.len(),
            timer_secs: quiz.timer_secs,
        }),
    );
    Ok((jar, page).into_response())
}
