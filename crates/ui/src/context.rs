use std::sync::{Arc, Mutex};

use services::QuizCatalogService;

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<QuizCatalogService>;

    /// Section to open on launch instead of the section list.
    fn initial_section(&self) -> Option<String>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<QuizCatalogService>,
    initial_section_once: Arc<Mutex<Option<String>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let initial_section = app.initial_section();
        Self {
            catalog: app.catalog(),
            initial_section_once: Arc::new(Mutex::new(initial_section)),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<QuizCatalogService> {
        Arc::clone(&self.catalog)
    }

    /// Returns the launch section the first time it is called, then `None`.
    #[must_use]
    pub fn take_initial_section(&self) -> Option<String> {
        self.initial_section_once
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::EmbeddedSections;

    struct FixedApp(Option<String>);

    impl UiApp for FixedApp {
        fn catalog(&self) -> Arc<QuizCatalogService> {
            Arc::new(QuizCatalogService::from_source(&EmbeddedSections).unwrap())
        }

        fn initial_section(&self) -> Option<String> {
            self.0.clone()
        }
    }

    #[test]
    fn initial_section_is_taken_once() {
        let app: Arc<dyn UiApp> = Arc::new(FixedApp(Some("css".to_string())));
        let ctx = build_app_context(&app);
        let clone = ctx.clone();

        assert_eq!(clone.take_initial_section().as_deref(), Some("css"));
        assert_eq!(ctx.take_initial_section(), None);
    }
}
