use dioxus::prelude::*;

use crate::vm::QuizResultsVm;

#[component]
pub(super) fn ResultsPanel(results: QuizResultsVm, on_retake: EventHandler<()>) -> Element {
    rsx! {
        section { class: "quiz-results {results.tier_class}",
            h3 { class: "quiz-results__title", "Your score" }
            p { class: "quiz-results__score", id: "quiz-score", "{results.score_label}" }
            p { class: "quiz-results__percent", "{results.percent_label}" }
            p { class: "quiz-results__message", "{results.message}" }

            ol { class: "quiz-review",
                for row in results.rows {
                    li { key: "{row.number}", class: "{row.css_class}",
                        div { class: "quiz-review__prompt", dangerous_inner_html: "{row.prompt_html}" }
                        p { class: "quiz-review__answer",
                            "Your answer: "
                            span { dangerous_inner_html: "{row.answer_html}" }
                        }
                        if let Some(correct_html) = row.correct_html {
                            p { class: "quiz-review__correct",
                                "Correct answer: "
                                span { dangerous_inner_html: "{correct_html}" }
                            }
                        }
                    }
                }
            }

            button {
                class: "btn btn-primary",
                id: "quiz-retake",
                r#type: "button",
                onclick: move |_| on_retake.call(()),
                "Retake Quiz"
            }
        }
    }
}
