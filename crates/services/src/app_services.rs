use std::sync::Arc;

use crate::config::{QuestionOrigin, QuizConfig};
use crate::error::AppServicesError;
use crate::question_source::{FileQuestionSource, HttpQuestionSource, QuestionSource};
use crate::sessions::SessionLoopService;

/// Assembles app-facing services from a resolved configuration.
#[derive(Clone)]
pub struct AppServices {
    config: QuizConfig,
    session_loop: Arc<SessionLoopService>,
}

impl AppServices {
    /// Build the question source named by `config.origin` and a session loop around it.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the HTTP client cannot be built.
    pub fn from_config(config: QuizConfig) -> Result<Self, AppServicesError> {
        let source: Arc<dyn QuestionSource> = match &config.origin {
            QuestionOrigin::Http(url) => Arc::new(HttpQuestionSource::with_timeout(
                url.clone(),
                config.fetch_timeout,
            )?),
            QuestionOrigin::File(path) => Arc::new(FileQuestionSource::new(path.clone())),
        };

        Ok(Self::with_source(config, source))
    }

    /// Build services around an already constructed question source.
    #[must_use]
    pub fn with_source(config: QuizConfig, source: Arc<dyn QuestionSource>) -> Self {
        let session_loop = Arc::new(
            SessionLoopService::new(source)
                .with_seconds_per_question(config.seconds_per_question)
                .with_tick_period(config.tick_period),
        );

        Self {
            config,
            session_loop,
        }
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[must_use]
    pub fn session_loop(&self) -> Arc<SessionLoopService> {
        Arc::clone(&self.session_loop)
    }
}
