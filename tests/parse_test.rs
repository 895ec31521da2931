use studyhall::models::NewsArticle;
use studyhall::parse;

const WELL_FORMED: &str = "\
**1. What is the capital of France?**
A) Paris
B) London
C) Berlin
D) Madrid

**2. What is 2 + 2?**
A) 3
B) 4
C) 5
D) 6
";

#[test]
fn one_question_per_header_in_source_order() {
    let questions = parse::quiz_questions(WELL_FORMED).unwrap();

    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].question, "What is the capital of France?");
    assert_eq!(questions[1].question, "What is 2 + 2?");
    for question in &questions {
        assert_eq!(question.options.len(), 4);
    }
}

#[test]
fn header_recognized_without_bold_markers() {
    let text = "1. Plain question\nA) a\nB) b\nC) c\nD) d\n";
    let questions = parse::quiz_questions(text).unwrap();

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].question, "Plain question");
}

#[test]
fn header_recognized_with_parenthesis_numbering() {
    let text = "3) Numbered differently\nA) a\nB) b\nC) c\nD) d\n";
    let questions = parse::quiz_questions(text).unwrap();

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].question, "Numbered differently");
}

#[test]
fn questions_with_wrong_option_count_are_dropped() {
    let text = "\
**1. Complete?**
A) yes
B) no
C) maybe
D) unsure

**2. Incomplete?**
A) only
B) three
C) options
";
    let questions = parse::quiz_questions(text).unwrap();

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].question, "Complete?");
}

#[test]
fn correct_answer_is_first_option_after_header() {
    let questions = parse::quiz_questions(WELL_FORMED).unwrap();

    assert_eq!(questions[0].correct_answer, "A) Paris");
    assert_eq!(questions[1].correct_answer, "A) 3");
}

#[test]
fn empty_result_is_an_error() {
    assert!(parse::quiz_questions("nothing that looks like a quiz").is_err());
    assert!(parse::quiz_questions("").is_err());
}

#[test]
fn option_lines_before_any_header_are_ignored() {
    let text = "A) stray\n1. Question\nA) a\nB) b\nC) c\nD) d\n";
    let questions = parse::quiz_questions(text).unwrap();

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].options[0], "A) a");
}

// --- News parsing ---

#[test]
fn two_blocks_produce_two_articles() {
    let articles = parse::news_articles("Title1\nDesc1\n\nTitle2\nDesc2");

    assert_eq!(
        articles,
        vec![
            NewsArticle {
                title: "Title1".to_string(),
                description: "Desc1".to_string(),
                url: "#".to_string(),
            },
            NewsArticle {
                title: "Title2".to_string(),
                description: "Desc2".to_string(),
                url: "#".to_string(),
            },
        ]
    );
}

#[test]
fn single_line_block_yields_no_article() {
    assert!(parse::news_articles("Lonely headline").is_empty());

    let articles = parse::news_articles("Title\nDesc\n\nJust one line");
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title, "Title");
}

#[test]
fn lines_beyond_the_second_are_ignored() {
    let articles = parse::news_articles("Title\nDesc\nExtra\nMore");

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].description, "Desc");
}

// --- Chat formatting ---

#[test]
fn format_is_identity_without_newlines_or_fences() {
    assert_eq!(parse::format_response("hello world"), "hello world");
}

#[test]
fn newlines_become_line_break_markers() {
    assert_eq!(parse::format_response("a\nb"), "a<br>b");
}

#[test]
fn code_fences_get_surrounding_breaks() {
    let formatted = parse::format_response("```\nlet x = 1;\n```");

    assert_eq!(formatted, "<br>```<br><br>let x = 1;<br><br>```<br>");
}
