use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quiz_core::model::Question;

use super::{QuestionSource, parse_questions};
use crate::error::QuestionSourceError;

/// Questions read from a local JSON file, in the same shapes the HTTP endpoint serves.
#[derive(Clone, Debug)]
pub struct FileQuestionSource {
    path: PathBuf,
}

impl FileQuestionSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionSource for FileQuestionSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| QuestionSourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        parse_questions(&bytes)
    }
}
