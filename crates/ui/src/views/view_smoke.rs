use quiz_core::session::{SessionEvent, SessionStatus};

use super::test_harness::{
    TEST_TITLE, sample_questions, setup_live_harness, setup_screen_harness, state_after,
};

#[tokio::test(flavor = "current_thread")]
async fn loading_screen_renders_loader() {
    let mut harness = setup_screen_harness(state_after(&[]));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Loading questions"), "missing loader in {html}");
    assert!(html.contains(TEST_TITLE), "missing header in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn error_screen_renders_message() {
    let mut harness = setup_screen_harness(state_after(&[SessionEvent::DataFailed]));
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("There was an error fetching questions."),
        "missing error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn start_screen_shows_question_count() {
    let state = state_after(&[SessionEvent::DataReceived(sample_questions())]);
    let mut harness = setup_screen_harness(state);
    harness.rebuild();
    let html = harness.render();
    let welcome = format!("Welcome to {TEST_TITLE}!");
    assert!(html.contains(&welcome), "missing {welcome} in {html}");
    assert!(
        html.contains("2 questions to test your mastery"),
        "missing count in {html}"
    );
    assert!(html.contains("Let&#39;s start") || html.contains("Let's start"));
}

#[tokio::test(flavor = "current_thread")]
async fn active_screen_marks_answer_and_offers_next() {
    let state = state_after(&[
        SessionEvent::DataReceived(sample_questions()),
        SessionEvent::Start,
        SessionEvent::NewAnswer(0),
    ]);
    let mut harness = setup_screen_harness(state);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 1 / 2"), "missing progress in {html}");
    assert!(html.contains("10 / 40 points"), "missing points in {html}");
    assert!(html.contains("01:00"), "missing timer in {html}");
    assert!(
        html.contains("btn btn-option answer correct"),
        "missing answer mark in {html}"
    );
    assert!(html.contains("Next"), "missing next button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unanswered_question_hides_next_button() {
    let state = state_after(&[
        SessionEvent::DataReceived(sample_questions()),
        SessionEvent::Start,
    ]);
    let mut harness = setup_screen_harness(state);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Which keyword declares"), "missing question in {html}");
    assert!(!html.contains("quiz-next"), "unexpected next button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn finished_screen_reports_score_and_highscore() {
    let state = state_after(&[
        SessionEvent::DataReceived(sample_questions()),
        SessionEvent::Start,
        SessionEvent::NewAnswer(0),
        SessionEvent::Finish,
    ]);
    let mut harness = setup_screen_harness(state);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("You scored"), "missing score in {html}");
    assert!(html.contains("out of 40 (25%)"), "missing percentage in {html}");
    assert!(html.contains("Highscore: 10 points"), "missing highscore in {html}");
    assert!(html.contains("Restart quiz"), "missing restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn live_view_follows_session_loop() {
    let mut harness = setup_live_harness();
    harness
        .session
        .wait_for(|s| s.status() == SessionStatus::Ready)
        .await
        .expect("questions load");

    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("2 questions to test your mastery"),
        "missing start screen in {html}"
    );

    harness.session.submit(SessionEvent::Start).expect("loop running");
    harness
        .session
        .wait_for(|s| s.is_active())
        .await
        .expect("session starts");
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Question 1 / 2"), "missing active screen in {html}");
}
