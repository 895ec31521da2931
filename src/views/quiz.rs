use maud::{html, Markup};

use crate::models::{QuizQuestion, QuizState};
use crate::names;

pub struct QuestionData {
    pub question: QuizQuestion,
    pub index: usize,
    pub total: usize,
    pub timer_secs: u32,
}

pub struct ResultsData {
    pub quiz: QuizState,
    pub score: usize,
}

pub fn start_form(error: Option<&str>) -> Markup {
    html! {
        h2 { "Generate a quiz" }

        @if let Some(error) = error {
            p style="color: #d32f2f;" { (error) }
        }

        form method="post" action=(names::QUIZ_URL) {
            label {
                "Topic"
                input type="text" name="prompt" placeholder="e.g. photosynthesis" required;
            }
            label {
                "Difficulty"
                select name="difficulty" {
                    option value="easy" { "Easy" }
                    option value="medium" selected { "Medium" }
                    option value="hard" { "Hard" }
                }
            }
            label {
                "Number of questions"
                input type="number" name="num_questions" value=(names::DEFAULT_NUM_QUESTIONS) min="1" max="20";
            }
            label {
                "Seconds per question"
                input type="number" name="timer" value=(names::DEFAULT_TIMER_SECS) min="5" max="600";
            }
            button type="submit" { "Start quiz" }
        }
    }
}

pub fn question(data: QuestionData) -> Markup {
    html! {
        article style="width: fit-content;" {
            p style="color: #666; font-size: 0.9rem;" {
                "Question "
                strong { (data.index + 1) }
                " of "
                (data.total)
                " · "
                (data.timer_secs)
                "s per question"
            }

            h3 { (data.question.question) }

            form method="post" action=(names::NEXT_QUESTION_URL) {
                fieldset {
                    @for option in &data.question.options {
                        label {
                            input type="radio" name="user_answer" value=(option) required;
                            (option)
                        }
                    }
                }
                button type="submit" { "Next" }
            }
        }
    }
}

pub fn results(data: ResultsData) -> Markup {
    html! {
        h2 { "Results" }
        p {
            "You scored "
            strong { (data.score) }
            " out of "
            (data.quiz.questions.len())
            "."
        }

        @for (i, question) in data.quiz.questions.iter().enumerate() {
            article {
                h4 { (i + 1) ". " (question.question) }
                p { "Correct answer: " (question.correct_answer) }
                @if let Some(answer) = data.quiz.answers.get(i) {
                    @if *answer == question.correct_answer {
                        p style="color: #28a745;" { "Your answer: " (answer) }
                    } @else {
                        p style="color: #d32f2f;" { "Your answer: " (answer) }
                    }
                }
            }
        }

        a href=(names::QUIZ_URL) role="button" { "New quiz" }
    }
}
