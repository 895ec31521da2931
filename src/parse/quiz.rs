use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::QuizQuestion;

/// A numbered question line, with or without `**` bold delimiters:
/// `**1. Question?**`, `1. Question?`, `2) Question?`.
static QUESTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*{0,2}(\d+)[.)]\s*(.*?)\*{0,2}$").expect("valid regex"));

const OPTION_PREFIXES: [&str; 4] = ["A)", "B)", "C)", "D)"];

#[derive(Debug, Error)]
#[error("No valid questions generated. Try again.")]
pub struct NoValidQuestions;

struct PartialQuestion {
    question: String,
    options: Vec<String>,
    correct_answer: Option<String>,
}

/// Extracts multiple-choice questions from a model completion.
///
/// Lines are scanned in order: a header line opens a new question, option
/// lines attach to the most recently opened one. The first option seen for a
/// question is recorded as its correct answer. Questions that do not end up
/// with exactly four options are dropped; an empty result is an error and
/// the caller must not start a quiz from it.
pub fn quiz_questions(text: &str) -> Result<Vec<QuizQuestion>, NoValidQuestions> {
    let mut parsed: Vec<PartialQuestion> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = QUESTION_HEADER.captures(line) {
            parsed.push(PartialQuestion {
                question: caps[2].trim().to_string(),
                options: Vec::new(),
                correct_answer: None,
            });
            continue;
        }

        if OPTION_PREFIXES.iter().any(|p| line.starts_with(p)) {
            if let Some(current) = parsed.last_mut() {
                current.options.push(line.to_string());
                if current.correct_answer.is_none() {
                    current.correct_answer = Some(line.to_string());
                }
            }
        }
    }

    let questions: Vec<QuizQuestion> = parsed
        .into_iter()
        .filter_map(|q| match q.correct_answer {
            Some(correct_answer) if q.options.len() == 4 => Some(QuizQuestion {
                question: q.question,
                options: q.options,
                correct_answer,
            }),
            _ => None,
        })
        .collect();

    if questions.is_empty() {
        return Err(NoValidQuestions);
    }

    Ok(questions)
}
