//! Terminal front end: one command per stdin line, state printed as it changes.

use std::fmt;

use quiz_core::session::{EventKind, SessionState, SessionStatus, UnknownEventError};
use services::{SessionHandle, SessionLoopError};
use tokio::io::{AsyncBufReadExt, BufReader};
use ui::vm::{format_countdown, map_finished, map_next_button, map_progress, map_question};

/// Countdown lines are printed this often while a session runs.
const TIMER_REPORT_EVERY: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
enum PlayCommand {
    Submit {
        kind: EventKind,
        answer: Option<usize>,
    },
    Help,
    Quit,
}

#[derive(Debug)]
enum PlayError {
    UnknownEvent(UnknownEventError),
    NotAGesture(EventKind),
    InvalidOption { raw: String },
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::UnknownEvent(err) => write!(f, "{err} (type `help`)"),
            PlayError::NotAGesture(kind) => write!(f, "{kind} cannot be sent from the terminal"),
            PlayError::InvalidOption { raw } => write!(f, "invalid option number: {raw}"),
        }
    }
}

impl std::error::Error for PlayError {}

impl From<UnknownEventError> for PlayError {
    fn from(err: UnknownEventError) -> Self {
        PlayError::UnknownEvent(err)
    }
}

/// Options are numbered from 1 on screen; events carry 0-based indexes.
fn parse_option(raw: &str) -> Result<usize, PlayError> {
    raw.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| PlayError::InvalidOption {
            raw: raw.to_string(),
        })
}

fn parse_command(line: &str) -> Result<Option<PlayCommand>, PlayError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();

    let command = match head {
        "quit" | "exit" | "q" => PlayCommand::Quit,
        "help" | "?" => PlayCommand::Help,
        "answer" | "newAnswer" => PlayCommand::Submit {
            kind: EventKind::NewAnswer,
            answer: arg.map(parse_option).transpose()?,
        },
        "next" => PlayCommand::Submit {
            kind: EventKind::NextQuestion,
            answer: None,
        },
        _ if head.chars().all(|c| c.is_ascii_digit()) => PlayCommand::Submit {
            kind: EventKind::NewAnswer,
            answer: Some(parse_option(head)?),
        },
        _ => {
            let kind: EventKind = head.parse()?;
            if !kind.is_user_gesture() {
                return Err(PlayError::NotAGesture(kind));
            }
            PlayCommand::Submit { kind, answer: None }
        }
    };

    Ok(Some(command))
}

fn print_help() {
    println!("Commands:");
    println!("  start             begin the quiz");
    println!("  <n> | answer <n>  pick option n");
    println!("  next              go to the next question");
    println!("  finish            end the quiz now");
    println!("  restart           play again");
    println!("  quit              leave");
}

/// Text for everything except the countdown, so ticks alone do not reprint it.
fn render_screen(state: &SessionState, title: &str) -> String {
    let mut out = String::new();
    match state.status() {
        SessionStatus::Loading => out.push_str("Loading questions..."),
        SessionStatus::Error => out.push_str("There was an error fetching questions."),
        SessionStatus::Ready => {
            out.push_str(&format!("Welcome to {title}!\n"));
            out.push_str(&format!(
                "{} questions to test your mastery. Type `start`.",
                state.num_questions()
            ));
        }
        SessionStatus::Active => {
            let progress = map_progress(state);
            out.push_str(&format!(
                "{}  |  {}\n",
                progress.question_label, progress.points_label
            ));
            if let Some(question) = map_question(state) {
                out.push_str(&question.text);
                for option in &question.options {
                    let mark = match (state.answer() == Some(option.index), option.class.as_str()) {
                        (true, class) if class.ends_with("correct") => " <- your answer, correct",
                        (true, _) => " <- your answer, wrong",
                        (false, class) if class.ends_with("correct") => " <- correct",
                        _ => "",
                    };
                    out.push_str(&format!("\n  {}) {}{mark}", option.index + 1, option.label));
                }
            }
            if let Some(next) = map_next_button(state) {
                out.push_str(&format!("\nType `{}` to continue.", next.label.to_lowercase()));
            }
        }
        SessionStatus::Finished => {
            let finished = map_finished(state);
            if finished.timed_out {
                out.push_str("Time is up!\n");
            }
            out.push_str(&format!(
                "{} You scored {} out of {} ({}%)\n(Highscore: {} points)\nType `restart` to play again.",
                finished.emoji,
                finished.points,
                finished.max_points,
                finished.percentage,
                finished.highscore
            ));
        }
    }
    out
}

fn should_report_timer(state: &SessionState) -> bool {
    state.is_active()
        && state
            .seconds_remaining()
            .is_some_and(|secs| secs > 0 && secs % TIMER_REPORT_EVERY == 0)
}

fn submit(session: &SessionHandle, command: PlayCommand) -> Result<(), SessionLoopError> {
    match command {
        PlayCommand::Submit { kind, answer } => session.submit_named(kind.as_str(), answer),
        PlayCommand::Help | PlayCommand::Quit => Ok(()),
    }
}

/// Drive `session` from stdin until `quit`, end of input or the loop closes.
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub async fn run(session: &SessionHandle, title: &str) -> Result<(), std::io::Error> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut updates = session.subscribe();

    let mut last_screen = render_screen(&updates.borrow_and_update(), title);
    println!("{last_screen}");

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                let screen = render_screen(&state, title);
                if screen != last_screen {
                    println!("\n{screen}");
                    last_screen = screen;
                } else if should_report_timer(&state) {
                    println!("[{}]", format_countdown(state.seconds_remaining().unwrap_or(0)));
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_command(&line) {
                    Ok(Some(PlayCommand::Quit)) => break,
                    Ok(Some(PlayCommand::Help)) => print_help(),
                    Ok(Some(command)) => {
                        if let Err(err) = submit(session, command) {
                            eprintln!("{err}");
                            if matches!(err, SessionLoopError::Closed) {
                                break;
                            }
                        }
                    }
                    Ok(None) => {}
                    Err(err) => eprintln!("{err}"),
                }
            }
        }
    }

    Ok(())
}
