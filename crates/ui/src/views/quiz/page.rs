use dioxus::prelude::*;

use quiz_core::model::Question;
use services::CatalogError;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

use super::view::QuizView;

#[derive(Clone, Debug, PartialEq)]
struct QuizData {
    section_name: String,
    questions: Vec<Question>,
}

fn view_error(err: &CatalogError) -> ViewError {
    match err {
        CatalogError::UnknownSection(_) => ViewError::UnknownSection,
        _ => ViewError::Unknown,
    }
}

/// Route target: resolves the slug and mounts a fresh quiz for it.
#[component]
pub fn QuizPage(slug: String) -> Element {
    rsx! {
        // Keyed so that switching sections remounts the quiz with a new session.
        QuizLoader { key: "{slug}", slug: slug.clone() }
    }
}

#[component]
fn QuizLoader(slug: String) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        let slug = slug.clone();

        async move {
            let section = catalog.section(&slug).map_err(|err| {
                tracing::warn!(%slug, %err, "quiz unavailable");
                view_error(&err)
            })?;
            Ok::<_, ViewError>(QuizData {
                section_name: section.name().to_string(),
                questions: section.questions().to_vec(),
            })
        }
    });

    let state = view_state_from_resource(&resource);

    match state {
        ViewState::Idle => rsx! {
            div { class: "page", p { "Idle" } }
        },
        ViewState::Loading => rsx! {
            div { class: "page", p { "Loading..." } }
        },
        ViewState::Ready(data) => rsx! {
            QuizView { section_name: data.section_name, questions: data.questions }
        },
        ViewState::Error(err) => rsx! {
            div { class: "page",
                h2 { "Quiz" }
                p { class: "quiz-error", "{err.message()}" }
            }
        },
    }
}
