use std::sync::Arc;

use quiz_core::session::{SessionEvent, SessionState};
use services::SessionHandle;
use tracing::warn;

pub trait UiApp: Send + Sync {
    fn title(&self) -> String;

    fn session(&self) -> SessionHandle;
}

#[derive(Clone)]
pub struct AppContext {
    title: Arc<str>,
    session: SessionHandle,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            title: Arc::from(app.title()),
            session: app.session(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn session(&self) -> SessionHandle {
        self.session.clone()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// Forward a user gesture to the session loop.
    pub fn dispatch(&self, event: SessionEvent) {
        let kind = event.kind();
        if let Err(err) = self.session.submit(event) {
            warn!(event = %kind, error = %err, "dropping ui event");
        }
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
