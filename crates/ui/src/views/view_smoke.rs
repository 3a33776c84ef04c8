use dioxus::prelude::{Key, Modifiers};
use quiz_core::model::Question;
use quiz_core::quiz::QuizPhase;

use super::test_harness::{ViewKind, is_disabled, setup_quiz_harness, setup_view_harness};
use crate::vm::{QuizIntent, QuizOutcome};

/// Correct options at `[1, 0, 2]`.
fn three_questions() -> Vec<Question> {
    vec![
        Question::new("Which tag holds page metadata?", ["body", "head", "main"], 1).unwrap(),
        Question::new("Which property sets text color?", ["color", "font", "fill"], 0).unwrap(),
        Question::new("Which hook holds local state?", ["useRef", "useMemo", "useState"], 2)
            .unwrap(),
    ]
}

#[test]
fn home_view_smoke_lists_sections() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();

    for expected in ["HTML Quiz", "CSS Quiz", "JavaScript Quiz", "React Quiz", "6 questions"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_page_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz("html".to_string()));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("HTML Quiz"), "missing title in {html}");
    assert!(html.contains("Question 1 of 6"), "missing position in {html}");
    assert!(html.contains("What does HTML stand for?"), "missing prompt in {html}");
    assert!(html.contains("Previous"), "missing previous in {html}");
    assert!(html.contains("Next"), "missing next in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_page_smoke_renders_unknown_section() {
    let mut harness = setup_view_harness(ViewKind::Quiz("cobol".to_string()));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("That quiz does not exist."), "missing error in {html}");
}

#[test]
fn quiz_view_smoke_renders_empty_state() {
    let mut harness = setup_quiz_harness("Empty", Vec::new());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Empty Quiz"), "missing title in {html}");
    assert!(html.contains("This quiz has no questions yet."), "missing empty state in {html}");
    assert!(!html.contains("Question 1"), "unexpected question in {html}");
}

#[test]
fn quiz_view_next_without_answer_stays_put() {
    let mut harness = setup_quiz_harness("Basics", three_questions());
    harness.rebuild();

    harness.dispatch(QuizIntent::Next);
    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "moved without an answer: {html}");

    let session = harness.session().expect("session");
    assert_eq!(session.current_index(), 0);
}

#[test]
fn quiz_view_last_question_offers_finish() {
    let mut harness = setup_quiz_harness("Basics", three_questions());
    harness.rebuild();

    for option in [1, 0] {
        harness.dispatch(QuizIntent::Select(option));
        harness.dispatch(QuizIntent::Next);
    }
    let html = harness.render();
    assert!(html.contains("Question 3 of 3"), "missing position in {html}");
    assert!(html.contains("Finish"), "missing finish label in {html}");
}

#[test]
fn quiz_view_smoke_results_and_retake() {
    let mut harness = setup_quiz_harness("Basics", three_questions());
    harness.rebuild();

    for _ in 0..3 {
        harness.dispatch(QuizIntent::Select(0));
        harness.dispatch(QuizIntent::Next);
    }

    let html = harness.render();
    assert!(html.contains("1/3"), "missing score in {html}");
    assert!(
        html.contains("Keep practicing! Go back over the lessons and try again."),
        "missing feedback in {html}"
    );
    assert!(html.contains("Correct answer:"), "missing review in {html}");
    assert!(html.contains("Retake Quiz"), "missing retake in {html}");
    assert_eq!(harness.session().map(|s| s.phase()), Some(QuizPhase::Results));

    harness.dispatch(QuizIntent::Retake);
    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "retake did not restart: {html}");

    let session = harness.session().expect("session");
    assert_eq!(session.phase(), QuizPhase::InProgress);
    assert_eq!(session.selected_answers(), [None, None, None]);
}

#[test]
fn quiz_view_nav_buttons_follow_answer_and_position() {
    let mut harness = setup_quiz_harness("Basics", three_questions());
    harness.rebuild();

    let html = harness.render();
    assert!(is_disabled(&html, "quiz-prev"), "previous enabled on first question: {html}");
    assert!(is_disabled(&html, "quiz-next"), "next enabled before an answer: {html}");

    harness.dispatch(QuizIntent::Select(1));
    let html = harness.render();
    assert!(!is_disabled(&html, "quiz-next"), "next still disabled: {html}");
    assert!(is_disabled(&html, "quiz-prev"), "previous enabled on first question: {html}");

    assert_eq!(harness.dispatch(QuizIntent::Next), QuizOutcome::Changed);
    let html = harness.render();
    assert!(!is_disabled(&html, "quiz-prev"), "previous disabled on question 2: {html}");
    assert!(is_disabled(&html, "quiz-next"), "next enabled before an answer: {html}");
}

#[test]
fn quiz_view_shortcuts_drive_the_quiz() {
    let mut harness = setup_quiz_harness("Basics", three_questions());
    harness.rebuild();
    let none = Modifiers::empty();

    assert!(harness.press(Key::Character("2".to_string()), none));
    assert!(harness.press(Key::ArrowRight, none));
    assert!(harness.render().contains("Question 2 of 3"));

    assert!(harness.press(Key::ArrowLeft, none));
    let session = harness.session().expect("session");
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.current_answer(), Some(1));
}

#[test]
fn quiz_view_leaves_unhandled_keys_to_the_page() {
    let mut harness = setup_quiz_harness("Basics", three_questions());
    harness.rebuild();
    let none = Modifiers::empty();

    // Blocked transitions are not claimed.
    assert!(!harness.press(Key::ArrowRight, none));
    assert!(!harness.press(Key::ArrowLeft, none));

    harness.dispatch(QuizIntent::Select(1));
    assert!(!harness.press(Key::Enter, none));
    assert!(!harness.press(Key::ArrowRight, Modifiers::ALT));
    assert!(!harness.press(Key::Character("3".to_string()), Modifiers::CONTROL));

    let session = harness.session().expect("session");
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.current_answer(), Some(1));
}

#[test]
fn quiz_view_results_keep_enter_for_retake() {
    let mut harness = setup_quiz_harness("Basics", three_questions());
    harness.rebuild();
    for option in [1, 0, 2] {
        harness.dispatch(QuizIntent::Select(option));
        harness.dispatch(QuizIntent::Next);
    }
    assert_eq!(harness.session().map(|s| s.phase()), Some(QuizPhase::Results));

    let none = Modifiers::empty();
    assert!(!harness.press(Key::Enter, none));
    assert!(!harness.press(Key::ArrowRight, none));
    assert!(!harness.press(Key::Character("1".to_string()), none));
    assert!(harness.render().contains("Retake Quiz"));
    assert_eq!(harness.session().map(|s| s.phase()), Some(QuizPhase::Results));
}
