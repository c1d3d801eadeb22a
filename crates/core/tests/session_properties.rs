use quiz_core::{Question, SessionEvent, SessionState, SessionStatus, transition};

const DEPTH: usize = 5;

fn questions() -> Vec<Question> {
    vec![
        Question::new("First", vec!["a".into(), "b".into()], 0, 10).unwrap(),
        Question::new("Second", vec!["a".into(), "b".into()], 1, 20).unwrap(),
    ]
}

fn alphabet() -> Vec<SessionEvent> {
    vec![
        SessionEvent::Start,
        SessionEvent::NewAnswer(0),
        SessionEvent::NewAnswer(1),
        SessionEvent::NextQuestion,
        SessionEvent::Tick,
        SessionEvent::Finish,
        SessionEvent::Restart,
        SessionEvent::DataFailed,
    ]
}

/// Answers recorded for the running session, indexed by question.
#[derive(Clone)]
struct Model {
    answers: Vec<Option<usize>>,
}

impl Model {
    fn expected_points(&self, questions: &[Question]) -> u32 {
        self.answers
            .iter()
            .zip(questions)
            .filter(|(answer, q)| answer.is_some_and(|a| q.is_correct(a)))
            .map(|(_, q)| q.points())
            .sum()
    }
}

fn check_invariants(before: &SessionState, event: &SessionEvent, after: &SessionState) {
    assert!(after.index() <= after.num_questions(), "index out of bounds");
    assert!(
        after.highscore() >= before.highscore(),
        "highscore decreased on {event:?}"
    );
    assert_eq!(after.questions(), before.questions());

    if matches!(event, SessionEvent::Restart) && before.accepts(event) {
        assert_eq!(after.status(), SessionStatus::Ready);
        assert_eq!(after.index(), 0);
        assert_eq!(after.answer(), None);
        assert_eq!(after.seconds_remaining(), None);
        assert_eq!(after.highscore(), before.highscore());
    }

    if matches!(event, SessionEvent::Tick) && before.status() == SessionStatus::Finished {
        assert_eq!(after, before);
    }

    if after.status() != SessionStatus::Active {
        assert!(!after.accepts(&SessionEvent::Tick));
    }
}

fn explore(state: &SessionState, model: &Model, depth: usize, events: &[SessionEvent]) {
    if depth == 0 {
        return;
    }
    for event in events {
        let next = transition(state, event);
        check_invariants(state, event, &next);

        let mut next_model = model.clone();
        match event {
            SessionEvent::Start | SessionEvent::Restart if state.accepts(event) => {
                next_model.answers = vec![None; state.num_questions()];
            }
            SessionEvent::NewAnswer(selected) if state.accepts(event) => {
                next_model.answers[state.index()] = Some(*selected);
            }
            _ => {}
        }
        assert_eq!(
            next.points(),
            next_model.expected_points(next.questions()),
            "points diverged after {event:?}"
        );

        explore(&next, &next_model, depth - 1, events);
    }
}

#[test]
fn invariants_hold_for_all_short_event_sequences() {
    let ready = transition(
        &SessionState::with_seconds_per_question(1),
        &SessionEvent::DataReceived(questions()),
    );
    let model = Model {
        answers: vec![None; 2],
    };

    explore(&ready, &model, DEPTH, &alphabet());
}

#[test]
fn loading_state_only_accepts_data_events() {
    let loading = SessionState::new();
    for event in alphabet() {
        let accepted = loading.accepts(&event);
        assert_eq!(accepted, matches!(event, SessionEvent::DataFailed), "{event:?}");
    }
    assert!(loading.accepts(&SessionEvent::DataReceived(questions())));
}

#[test]
fn highscore_keeps_best_session() {
    let mut state = transition(
        &SessionState::new(),
        &SessionEvent::DataReceived(questions()),
    );

    let best_run = [
        SessionEvent::Start,
        SessionEvent::NewAnswer(0),
        SessionEvent::NextQuestion,
        SessionEvent::NewAnswer(1),
        SessionEvent::Finish,
        SessionEvent::Restart,
    ];
    let worse_run = [
        SessionEvent::Start,
        SessionEvent::NewAnswer(1),
        SessionEvent::Finish,
    ];

    for event in best_run.iter().chain(worse_run.iter()) {
        state = transition(&state, event);
    }

    assert_eq!(state.status(), SessionStatus::Finished);
    assert_eq!(state.points(), 0);
    assert_eq!(state.highscore(), 30);
}
