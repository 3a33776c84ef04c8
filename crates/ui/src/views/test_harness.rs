use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::Question;
use quiz_core::quiz::QuizSession;
use services::{EmbeddedSections, QuizCatalogService};

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::{QuizTestHandles, handle_shortcut};
use crate::views::{HomeView, QuizPage, QuizView};
use crate::vm::{QuizIntent, QuizOutcome};

#[derive(Clone)]
struct TestApp {
    catalog: Arc<QuizCatalogService>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<QuizCatalogService> {
        Arc::clone(&self.catalog)
    }

    fn initial_section(&self) -> Option<String> {
        None
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz(slug) => rsx! { QuizPage { slug } },
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    section_name: String,
    questions: Vec<Question>,
    handles: QuizTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    use_context_provider(|| props.handles.clone());
    rsx! {
        QuizView {
            section_name: props.section_name.clone(),
            questions: props.questions.clone(),
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: Option<QuizTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Send an intent through the mounted quiz and flush the resulting render.
    pub fn dispatch(&mut self, intent: QuizIntent) -> QuizOutcome {
        let handles = self.handles.clone().expect("quiz harness handles");
        let outcome = self.dom.in_runtime(|| handles.dispatch().call(intent));
        drive_dom(&mut self.dom);
        outcome
    }

    /// Press a key on the quiz root. Returns whether the default was suppressed.
    pub fn press(&mut self, key: Key, modifiers: Modifiers) -> bool {
        let handles = self.handles.clone().expect("quiz harness handles");
        let claimed = self
            .dom
            .in_runtime(|| handle_shortcut(handles.dispatch(), &key, modifiers));
        drive_dom(&mut self.dom);
        claimed
    }

    /// Snapshot of the mounted quiz session.
    pub fn session(&self) -> Option<QuizSession> {
        let handles = self.handles.clone().expect("quiz harness handles");
        self.dom.in_runtime(|| {
            let session = handles.session();
            let guard = session.peek();
            (*guard).clone()
        })
    }
}

/// Whether the rendered element with `id` carries a true `disabled` attribute.
pub fn is_disabled(html: &str, id: &str) -> bool {
    let marker = format!("id=\"{id}\"");
    let at = html
        .find(&marker)
        .unwrap_or_else(|| panic!("missing #{id} in {html}"));
    let start = html[..at].rfind('<').expect("tag start");
    let end = at + html[at..].find('>').expect("tag end");
    let tag = &html[start..=end];
    ["disabled=true", "disabled=\"true\"", "disabled=\"\"", "disabled>", "disabled "]
        .iter()
        .any(|needle| tag.contains(needle))
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn embedded_catalog() -> Arc<QuizCatalogService> {
    Arc::new(QuizCatalogService::from_source(&EmbeddedSections).expect("embedded catalog"))
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let app = Arc::new(TestApp {
        catalog: embedded_catalog(),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom, handles: None }
}

pub fn setup_quiz_harness(section_name: &str, questions: Vec<Question>) -> ViewHarness {
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        QuizHarness,
        QuizHarnessProps {
            section_name: section_name.to_string(),
            questions,
            handles: handles.clone(),
        },
    );
    ViewHarness {
        dom,
        handles: Some(handles),
    }
}
