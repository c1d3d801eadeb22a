use dioxus::prelude::*;
use quiz_core::session::{SessionEvent, SessionState};

use crate::context::AppContext;
use crate::vm::map_finished;

#[component]
pub fn Header(title: String) -> Element {
    rsx! {
        header { class: "app-header",
            h1 { "{title}" }
        }
    }
}

#[component]
pub fn Loader() -> Element {
    rsx! {
        div { class: "loader-container",
            div { class: "loader" }
            p { "Loading questions..." }
        }
    }
}

#[component]
pub fn ErrorMessage() -> Element {
    rsx! {
        p { class: "error",
            span { "💥" }
            " There was an error fetching questions."
        }
    }
}

#[component]
pub fn StartScreen(title: String, num_questions: usize) -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        div { class: "start",
            h2 { "Welcome to {title}!" }
            h3 { "{num_questions} questions to test your mastery" }
            button {
                class: "btn btn-ui",
                id: "quiz-start",
                r#type: "button",
                onclick: move |_| ctx.dispatch(SessionEvent::Start),
                "Let's start"
            }
        }
    }
}

#[component]
pub fn FinishedScreen(state: SessionState) -> Element {
    let ctx = use_context::<AppContext>();
    let summary = map_finished(&state);

    rsx! {
        if summary.timed_out {
            p { class: "timeout", "Time is up!" }
        }
        p { class: "result",
            span { "{summary.emoji}" }
            " You scored "
            strong { "{summary.points}" }
            " out of {summary.max_points} ({summary.percentage}%)"
        }
        p { class: "highscore", "(Highscore: {summary.highscore} points)" }
        button {
            class: "btn btn-ui",
            id: "quiz-restart",
            r#type: "button",
            onclick: move |_| ctx.dispatch(SessionEvent::Restart),
            "Restart quiz"
        }
    }
}
