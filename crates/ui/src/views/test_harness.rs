use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::Question;
use quiz_core::session::{SessionEvent, SessionState, transition};
use services::{SessionHandle, SessionLoopService, StaticQuestionSource};

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{QuizScreen, QuizView};

pub const TEST_TITLE: &str = "Rust Quiz";

struct TestApp {
    session: SessionHandle,
}

impl UiApp for TestApp {
    fn title(&self) -> String {
        TEST_TITLE.to_string()
    }

    fn session(&self) -> SessionHandle {
        self.session.clone()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    ctx: AppContext,
    state: Option<SessionState>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let ctx = props.ctx.clone();
    use_context_provider(|| ctx);
    match props.state.clone() {
        Some(state) => rsx! { QuizScreen { state } },
        None => rsx! { QuizView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub session: SessionHandle,
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
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn sample_questions() -> Vec<Question> {
    vec![
        Question::new(
            "Which keyword declares an immutable binding?",
            vec!["let".into(), "mut".into(), "var".into()],
            0,
            10,
        )
        .expect("valid question"),
        Question::new(
            "Which trait powers the `?` conversion?",
            vec!["Display".into(), "From".into()],
            1,
            30,
        )
        .expect("valid question"),
    ]
}

/// Fold `events` over a fresh state.
pub fn state_after(events: &[SessionEvent]) -> SessionState {
    events
        .iter()
        .fold(SessionState::new(), |state, event| transition(&state, event))
}

fn start_session() -> SessionHandle {
    SessionLoopService::new(Arc::new(StaticQuestionSource::new(sample_questions()))).start()
}

/// Harness rendering a fixed state. Must run inside a tokio runtime.
pub fn setup_screen_harness(state: SessionState) -> ViewHarness {
    setup(Some(state))
}

/// Harness following a live session loop. Must run inside a tokio runtime.
pub fn setup_live_harness() -> ViewHarness {
    setup(None)
}

fn setup(state: Option<SessionState>) -> ViewHarness {
    let session = start_session();
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        session: session.clone(),
    });
    let ctx = build_app_context(&app);

    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { ctx, state });

    ViewHarness { dom, session }
}
