use dioxus::prelude::*;

use quiz_core::model::Question;
use quiz_core::quiz::{QuizPhase, QuizSession};

use crate::views::ViewError;
use crate::vm::{
    QuizIntent, QuizOutcome, QuizQuestionVm, QuizResultsVm, apply_intent, intent_for_key,
    map_quiz_question, map_quiz_results,
};

use super::results::ResultsPanel;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
enum QuizBody {
    Question(QuizQuestionVm),
    Results(QuizResultsVm),
}

impl QuizBody {
    fn from_session(session: &QuizSession) -> Self {
        match session.phase() {
            QuizPhase::InProgress => Self::Question(map_quiz_question(session)),
            QuizPhase::Results => Self::Results(map_quiz_results(session)),
        }
    }
}

/// Self-contained quiz over a fixed question list.
///
/// The session lives for as long as the component is mounted. An empty
/// question list renders an explanatory empty state.
#[component]
pub fn QuizView(section_name: String, questions: Vec<Question>) -> Element {
    let session = use_signal(move || QuizSession::new(questions).ok());

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut session = session;
        let mut guard = session.write();
        let Some(quiz) = guard.as_mut() else {
            return QuizOutcome::Ignored;
        };
        let outcome = apply_intent(quiz, intent);
        if let QuizOutcome::Finished(score) = outcome {
            tracing::info!(%score, "quiz completed");
        }
        outcome
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, session);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if handle_shortcut(dispatch_intent, &evt.data.key(), evt.data.modifiers()) {
            evt.prevent_default();
        }
    });

    let body = session.read().as_ref().map(QuizBody::from_session);

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            h2 { class: "quiz-title", "{section_name} Quiz" }
            match body {
                None => rsx! {
                    p { class: "quiz-empty", "{ViewError::EmptyQuiz.message()}" }
                },
                Some(QuizBody::Question(vm)) => rsx! {
                    QuestionPanel {
                        vm,
                        on_intent: move |intent: QuizIntent| {
                            dispatch_intent.call(intent);
                        },
                    }
                },
                Some(QuizBody::Results(results)) => rsx! {
                    ResultsPanel {
                        results,
                        on_retake: move |()| {
                            dispatch_intent.call(QuizIntent::Retake);
                        },
                    }
                },
            }
        }
    }
}

/// Run the shortcut bound to `key`. Returns true when it changed the quiz,
/// in which case the browser default is suppressed.
pub(crate) fn handle_shortcut(
    dispatch: Callback<QuizIntent, QuizOutcome>,
    key: &Key,
    modifiers: Modifiers,
) -> bool {
    intent_for_key(key, modifiers)
        .is_some_and(|intent| dispatch.call(intent) != QuizOutcome::Ignored)
}

#[component]
fn QuestionPanel(vm: QuizQuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div {
            class: "quiz-progress",
            role: "progressbar",
            aria_valuemin: "0",
            aria_valuemax: "100",
            aria_valuenow: "{vm.progress_percent}",
            div { class: "quiz-progress__bar", style: "width: {vm.progress_percent}%" }
        }
        p { class: "quiz-position", "{vm.position_label}" }
        div { class: "quiz-prompt", dangerous_inner_html: "{vm.prompt_html}" }

        div { class: "quiz-options", role: "radiogroup",
            for option in vm.options {
                button {
                    key: "{option.index}",
                    class: "{option.css_class}",
                    role: "radio",
                    aria_checked: "{option.selected}",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Select(option.index)),
                    span { class: "quiz-option__key", "{option.key_hint}" }
                    span { class: "quiz-option__text", dangerous_inner_html: "{option.html}" }
                }
            }
        }

        div { class: "quiz-nav",
            button {
                class: "btn btn-secondary",
                id: "quiz-prev",
                r#type: "button",
                disabled: !vm.can_prev,
                onclick: move |_| on_intent.call(QuizIntent::Prev),
                "Previous"
            }
            button {
                class: "btn btn-primary",
                id: "quiz-next",
                r#type: "button",
                disabled: !vm.can_next,
                onclick: move |_| on_intent.call(QuizIntent::Next),
                "{vm.next_label}"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent, QuizOutcome>>>>,
    session: Rc<RefCell<Option<Signal<Option<QuizSession>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent, QuizOutcome>,
        session: Signal<Option<QuizSession>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent, QuizOutcome> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<Option<QuizSession>> {
        (*self.session.borrow()).expect("quiz session registered")
    }
}
