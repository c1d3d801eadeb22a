use std::env;
use std::path::PathBuf;
use std::time::Duration;

use quiz_core::SECONDS_PER_QUESTION;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_QUESTIONS_URL: &str = "http://localhost:8000/questions";
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Where questions are loaded from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionOrigin {
    Http(Url),
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    pub origin: QuestionOrigin,
    pub seconds_per_question: u32,
    pub fetch_timeout: Duration,
    pub tick_period: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            origin: QuestionOrigin::Http(default_questions_url()),
            seconds_per_question: SECONDS_PER_QUESTION,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            tick_period: DEFAULT_TICK_PERIOD,
        }
    }
}

impl QuizConfig {
    /// Read configuration from `QUIZ_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`QuizConfig::from_env`] with an explicit variable lookup.
    ///
    /// `QUIZ_QUESTIONS_FILE` wins over `QUIZ_QUESTIONS_URL` when both are set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let value = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(raw) = value("QUIZ_QUESTIONS_URL") {
            config.origin = QuestionOrigin::Http(parse_url("QUIZ_QUESTIONS_URL", &raw)?);
        }
        if let Some(raw) = value("QUIZ_QUESTIONS_FILE") {
            config.origin = QuestionOrigin::File(PathBuf::from(raw));
        }
        if let Some(raw) = value("QUIZ_SECONDS_PER_QUESTION") {
            config.seconds_per_question = parse_positive("QUIZ_SECONDS_PER_QUESTION", &raw)?;
        }
        if let Some(raw) = value("QUIZ_FETCH_TIMEOUT_SECS") {
            let secs = parse_positive("QUIZ_FETCH_TIMEOUT_SECS", &raw)?;
            config.fetch_timeout = Duration::from_secs(u64::from(secs));
        }

        Ok(config)
    }
}

/// Parse an HTTP(S) question endpoint.
///
/// # Errors
///
/// Returns `ConfigError::InvalidUrl` for unparseable input.
pub fn parse_url(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl {
        var,
        raw: raw.to_string(),
        source,
    })
}

/// Parse a strictly positive integer setting.
///
/// # Errors
///
/// Returns `ConfigError::InvalidNumber` for zero or non-numeric input.
pub fn parse_positive(var: &'static str, raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|value| *value > 0)
        .ok_or_else(|| ConfigError::InvalidNumber {
            var,
            raw: raw.to_string(),
        })
}

fn default_questions_url() -> Url {
    Url::parse(DEFAULT_QUESTIONS_URL).expect("default questions url should be valid")
}
