use std::sync::Arc;

use crate::model::Question;

/// Seconds of session time granted per loaded question.
pub const SECONDS_PER_QUESTION: u32 = 30;

/// Lifecycle of a quiz session.
///
/// - `Loading`: question fetch in flight
/// - `Error`: fetch failed; terminal until the process restarts
/// - `Ready`: questions available, awaiting start
/// - `Active`: session running, timer live
/// - `Finished`: session ended, awaiting restart or exit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    #[default]
    Loading,
    Error,
    Ready,
    Active,
    Finished,
}

impl SessionStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SessionStatus::Loading => "loading",
            SessionStatus::Error => "error",
            SessionStatus::Ready => "ready",
            SessionStatus::Active => "active",
            SessionStatus::Finished => "finished",
        }
    }
}

/// The single authoritative value describing quiz progress.
///
/// A new value is produced by [`crate::session::transition`] for every event;
/// existing values are never mutated. `questions` is shared, so cloning a state
/// is cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub(super) questions: Arc<[Question]>,
    pub(super) status: SessionStatus,
    pub(super) index: usize,
    pub(super) answer: Option<usize>,
    pub(super) points: u32,
    pub(super) highscore: u32,
    pub(super) seconds_remaining: Option<u32>,
    pub(super) seconds_per_question: u32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Initial state: `Loading`, no questions, zero score.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seconds_per_question(SECONDS_PER_QUESTION)
    }

    /// Initial state with a custom per-question time budget.
    #[must_use]
    pub fn with_seconds_per_question(seconds_per_question: u32) -> Self {
        Self {
            questions: Arc::from(Vec::new()),
            status: SessionStatus::Loading,
            index: 0,
            answer: None,
            points: 0,
            highscore: 0,
            seconds_remaining: None,
            seconds_per_question,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn answer(&self) -> Option<usize> {
        self.answer
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn highscore(&self) -> u32 {
        self.highscore
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> Option<u32> {
        self.seconds_remaining
    }

    #[must_use]
    pub fn seconds_per_question(&self) -> u32 {
        self.seconds_per_question
    }

    #[must_use]
    pub fn num_questions(&self) -> usize {
        self.questions.len()
    }

    /// Sum of the points of every loaded question.
    #[must_use]
    pub fn max_possible_points(&self) -> u32 {
        self.questions
            .iter()
            .fold(0_u32, |acc, q| acc.saturating_add(q.points()))
    }

    /// Time budget granted on `Start` for the loaded questions.
    #[must_use]
    pub fn session_time_budget(&self) -> u32 {
        u32::try_from(self.questions.len())
            .unwrap_or(u32::MAX)
            .saturating_mul(self.seconds_per_question)
    }

    /// The question at `index`, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }

    /// True when the current question is the final one.
    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.index + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(points: u32) -> Question {
        Question::new("Q", vec!["a".into(), "b".into()], 0, points).unwrap()
    }

    #[test]
    fn initial_state_is_loading_and_empty() {
        let state = SessionState::new();

        assert_eq!(state.status(), SessionStatus::Loading);
        assert!(state.questions().is_empty());
        assert_eq!(state.index(), 0);
        assert_eq!(state.answer(), None);
        assert_eq!(state.points(), 0);
        assert_eq!(state.highscore(), 0);
        assert_eq!(state.seconds_remaining(), None);
        assert_eq!(state.seconds_per_question(), SECONDS_PER_QUESTION);
    }

    #[test]
    fn derived_values_follow_questions() {
        let state = SessionState {
            questions: Arc::from(vec![question(10), question(20), question(5)]),
            ..SessionState::new()
        };

        assert_eq!(state.num_questions(), 3);
        assert_eq!(state.max_possible_points(), 35);
        assert_eq!(state.session_time_budget(), 90);
        assert!(state.current_question().is_some());
        assert!(!state.is_last_question());
    }
}
