use quiz_core::session::{SessionEvent, SessionState};

use crate::vm::time_fmt::format_countdown;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub value: usize,
    pub max: usize,
    pub question_label: String,
    pub points_label: String,
}

/// Progress counts the current question as done once it has been answered.
#[must_use]
pub fn map_progress(state: &SessionState) -> ProgressVm {
    let max = state.num_questions();
    let value = (state.index() + usize::from(state.is_answered())).min(max);
    let position = (state.index() + 1).min(max);

    ProgressVm {
        value,
        max,
        question_label: format!("Question {position} / {max}"),
        points_label: format!("{} / {} points", state.points(), state.max_possible_points()),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub class: String,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub text: String,
    pub options: Vec<OptionVm>,
}

/// Once answered, every option is disabled and marked correct or wrong; the
/// picked one is also marked as the answer.
#[must_use]
pub fn map_question(state: &SessionState) -> Option<QuestionVm> {
    let question = state.current_question()?;
    let answer = state.answer();
    let answered = answer.is_some();

    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let mut class = String::from("btn btn-option");
            if answer == Some(index) {
                class.push_str(" answer");
            }
            if answered {
                class.push_str(if question.is_correct(index) {
                    " correct"
                } else {
                    " wrong"
                });
            }
            OptionVm {
                index,
                label: label.clone(),
                class,
                disabled: answered,
            }
        })
        .collect();

    Some(QuestionVm {
        text: question.text().to_string(),
        options,
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NextButtonVm {
    pub label: &'static str,
    pub event: SessionEvent,
}

/// Hidden until the current question is answered.
#[must_use]
pub fn map_next_button(state: &SessionState) -> Option<NextButtonVm> {
    if !state.is_answered() {
        return None;
    }

    Some(if state.is_last_question() {
        NextButtonVm {
            label: "Finish",
            event: SessionEvent::Finish,
        }
    } else {
        NextButtonVm {
            label: "Next",
            event: SessionEvent::NextQuestion,
        }
    })
}

#[must_use]
pub fn timer_label(state: &SessionState) -> String {
    format_countdown(state.seconds_remaining().unwrap_or(0))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinishedVm {
    pub points: u32,
    pub max_points: u32,
    pub percentage: u32,
    pub emoji: &'static str,
    pub highscore: u32,
    pub timed_out: bool,
}

#[must_use]
pub fn map_finished(state: &SessionState) -> FinishedVm {
    let points = state.points();
    let max_points = state.max_possible_points();
    let percentage = if max_points == 0 {
        0
    } else {
        let pct = u64::from(points) * 100 / u64::from(max_points);
        u32::try_from(pct).unwrap_or(100)
    };
    let emoji = match percentage {
        100.. => "🥇",
        80..=99 => "🎉",
        50..=79 => "🙃",
        1..=49 => "🤨",
        0 => "🤦",
    };

    FinishedVm {
        points,
        max_points,
        percentage,
        emoji,
        highscore: state.highscore(),
        timed_out: state.seconds_remaining() == Some(0),
    }
}

#[cfg(test)]
mod tests {
    use quiz_core::model::Question;
    use quiz_core::session::transition;

    use super::*;

    fn active_state() -> SessionState {
        let questions = vec![
            Question::new("First", vec!["a".into(), "b".into(), "c".into()], 1, 10).unwrap(),
            Question::new("Second", vec!["a".into(), "b".into()], 0, 30).unwrap(),
        ];
        [SessionEvent::DataReceived(questions), SessionEvent::Start]
            .iter()
            .fold(SessionState::new(), |state, event| transition(&state, event))
    }

    fn apply(state: &SessionState, event: SessionEvent) -> SessionState {
        transition(state, &event)
    }

    #[test]
    fn progress_counts_answered_question() {
        let state = active_state();
        let vm = map_progress(&state);
        assert_eq!(vm.value, 0);
        assert_eq!(vm.question_label, "Question 1 / 2");
        assert_eq!(vm.points_label, "0 / 40 points");

        let state = apply(&state, SessionEvent::NewAnswer(1));
        let vm = map_progress(&state);
        assert_eq!(vm.value, 1);
        assert_eq!(vm.points_label, "10 / 40 points");
    }

    #[test]
    fn options_are_marked_after_answering() {
        let state = active_state();
        let vm = map_question(&state).unwrap();
        assert!(vm.options.iter().all(|o| !o.disabled && o.class == "btn btn-option"));

        let state = apply(&state, SessionEvent::NewAnswer(2));
        let vm = map_question(&state).unwrap();
        assert_eq!(vm.text, "First");
        assert_eq!(vm.options[0].class, "btn btn-option wrong");
        assert_eq!(vm.options[1].class, "btn btn-option correct");
        assert_eq!(vm.options[2].class, "btn btn-option answer wrong");
        assert!(vm.options.iter().all(|o| o.disabled));
    }

    #[test]
    fn next_button_turns_into_finish_on_last_question() {
        let state = active_state();
        assert_eq!(map_next_button(&state), None);

        let state = apply(&state, SessionEvent::NewAnswer(0));
        assert_eq!(map_next_button(&state).unwrap().event, SessionEvent::NextQuestion);

        let state = apply(&state, SessionEvent::NextQuestion);
        let state = apply(&state, SessionEvent::NewAnswer(0));
        let vm = map_next_button(&state).unwrap();
        assert_eq!(vm.label, "Finish");
        assert_eq!(vm.event, SessionEvent::Finish);
    }

    #[test]
    fn finished_summary_reports_percentage_and_highscore() {
        let state = active_state();
        let state = apply(&state, SessionEvent::NewAnswer(1));
        let state = apply(&state, SessionEvent::Finish);

        let vm = map_finished(&state);

        assert_eq!(vm.points, 10);
        assert_eq!(vm.max_points, 40);
        assert_eq!(vm.percentage, 25);
        assert_eq!(vm.emoji, "🤨");
        assert_eq!(vm.highscore, 10);
        assert!(!vm.timed_out);
    }

    #[test]
    fn timer_label_formats_remaining_seconds() {
        assert_eq!(timer_label(&active_state()), "01:00");
        assert_eq!(timer_label(&SessionState::new()), "00:00");
    }
}
