use dioxus::prelude::*;
use quiz_core::session::{SessionEvent, SessionState};

use crate::context::AppContext;
use crate::vm::{
    NextButtonVm, OptionVm, ProgressVm, QuestionVm, map_next_button, map_progress, map_question,
    timer_label,
};

#[component]
pub fn ActiveScreen(state: SessionState) -> Element {
    let progress = map_progress(&state);
    let question = map_question(&state);
    let next = map_next_button(&state);
    let timer = timer_label(&state);

    rsx! {
        Progress { vm: progress }
        if let Some(question) = question {
            QuestionCard { question }
        }
        footer { class: "quiz-footer",
            Timer { label: timer }
            if let Some(next) = next {
                NextButton { next }
            }
        }
    }
}

#[component]
fn Progress(vm: ProgressVm) -> Element {
    rsx! {
        header { class: "progress",
            progress { max: "{vm.max}", value: "{vm.value}" }
            p { "{vm.question_label}" }
            p { "{vm.points_label}" }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm) -> Element {
    rsx! {
        div { class: "question",
            h4 { "{question.text}" }
            div { class: "options",
                for option in question.options {
                    OptionButton { key: "{option.index}", option }
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm) -> Element {
    let ctx = use_context::<AppContext>();
    let index = option.index;

    rsx! {
        button {
            class: "{option.class}",
            r#type: "button",
            disabled: option.disabled,
            onclick: move |_| ctx.dispatch(SessionEvent::NewAnswer(index)),
            "{option.label}"
        }
    }
}

#[component]
fn Timer(label: String) -> Element {
    rsx! {
        div { class: "timer", id: "quiz-timer", "{label}" }
    }
}

#[component]
fn NextButton(next: NextButtonVm) -> Element {
    let ctx = use_context::<AppContext>();
    let event = next.event.clone();

    rsx! {
        button {
            class: "btn btn-ui",
            id: "quiz-next",
            r#type: "button",
            onclick: move |_| ctx.dispatch(event.clone()),
            "{next.label}"
        }
    }
}
