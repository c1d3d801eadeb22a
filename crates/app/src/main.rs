use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::{parse_positive, parse_url};
use services::{AppServices, QuestionOrigin, QuizConfig, SessionHandle};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

mod play;

const APP_TITLE: &str = "The Rust Quiz";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidUrl { raw: String },
    InvalidSeconds { raw: String },
    InvalidFile { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidUrl { raw } => write!(f, "invalid --url value: {raw}"),
            ArgsError::InvalidSeconds { raw } => {
                write!(f, "invalid --seconds-per-question value: {raw}")
            }
            ArgsError::InvalidFile { raw } => write!(f, "invalid --file value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    title: String,
    session: SessionHandle,
}

impl UiApp for DesktopApp {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn session(&self) -> SessionHandle {
        self.session.clone()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--url <http_url> | --file <path>] [--seconds-per-question <n>]");
    eprintln!("  cargo run -p app -- play [--url <http_url> | --file <path>] [--seconds-per-question <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --url {}", services::config::DEFAULT_QUESTIONS_URL);
    eprintln!("  --seconds-per-question {}", quiz_core::SECONDS_PER_QUESTION);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS_URL, QUIZ_QUESTIONS_FILE, QUIZ_SECONDS_PER_QUESTION,");
    eprintln!("  QUIZ_FETCH_TIMEOUT_SECS, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Play,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "play" => Some(Self::Play),
            _ => None,
        }
    }
}

/// Flags layered over whatever the environment already configured.
fn apply_flags(
    mut config: QuizConfig,
    args: &mut impl Iterator<Item = String>,
) -> Result<QuizConfig, ArgsError> {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--url" => {
                let value = require_value(args, "--url")?;
                let url = parse_url("--url", &value)
                    .map_err(|_| ArgsError::InvalidUrl { raw: value.clone() })?;
                config.origin = QuestionOrigin::Http(url);
            }
            "--file" => {
                let value = require_value(args, "--file")?;
                if value.trim().is_empty() {
                    return Err(ArgsError::InvalidFile { raw: value });
                }
                config.origin = QuestionOrigin::File(PathBuf::from(value));
            }
            "--seconds-per-question" => {
                let value = require_value(args, "--seconds-per-question")?;
                config.seconds_per_question = parse_positive("--seconds-per-question", &value)
                    .map_err(|_| ArgsError::InvalidSeconds { raw: value.clone() })?;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(config)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand means the desktop UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let config = QuizConfig::from_env()?;
    let mut iter = argv.into_iter();
    let config = apply_flags(config, &mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();
    match &config.origin {
        QuestionOrigin::Http(url) => info!(url = %url, "loading questions over http"),
        QuestionOrigin::File(path) => info!(path = %path.display(), "loading questions from file"),
    }

    let services = AppServices::from_config(config)?;
    let session = services.session_loop().start();

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                title: APP_TITLE.to_string(),
                session: session.clone(),
            });
            let context = build_app_context(&app);

            // Some dev setups open the window always-on-top; keep it a normal window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_TITLE)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            session.shutdown();
            Ok(())
        }
        Command::Play => {
            play::run(&session, APP_TITLE).await?;
            session.shutdown();
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
