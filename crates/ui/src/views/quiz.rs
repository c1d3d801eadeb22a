use dioxus::prelude::*;
use quiz_core::session::{SessionState, SessionStatus};

use crate::context::AppContext;

use super::active::ActiveScreen;
use super::screens::{ErrorMessage, FinishedScreen, Header, Loader, StartScreen};

/// Root view: mirrors the session loop's published state and renders it.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let snapshot = use_signal(|| ctx.state());

    let session = ctx.session();
    use_future(move || {
        let mut updates = session.subscribe();
        let mut snapshot = snapshot;
        async move {
            while updates.changed().await.is_ok() {
                let next = updates.borrow_and_update().clone();
                snapshot.set(next);
            }
        }
    });

    let state = snapshot.read().clone();
    rsx! {
        QuizScreen { state }
    }
}

/// Pure rendering of one state; every screen below is a read-only view.
#[component]
pub fn QuizScreen(state: SessionState) -> Element {
    let ctx = use_context::<AppContext>();
    let title = ctx.title().to_string();

    rsx! {
        div { class: "app",
            Header { title: title.clone() }
            main { class: "main",
                match state.status() {
                    SessionStatus::Loading => rsx! {
                        Loader {}
                    },
                    SessionStatus::Error => rsx! {
                        ErrorMessage {}
                    },
                    SessionStatus::Ready => rsx! {
                        StartScreen { title, num_questions: state.num_questions() }
                    },
                    SessionStatus::Active => rsx! {
                        ActiveScreen { state: state.clone() }
                    },
                    SessionStatus::Finished => rsx! {
                        FinishedScreen { state: state.clone() }
                    },
                }
            }
        }
    }
}
