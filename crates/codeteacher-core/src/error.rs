//! Error types for CodeTeacher core.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON5 parse error: {0}")]
    Json5(String),
}

/// Lesson catalog errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog file not found: {0}")]
    NotFound(PathBuf),

    #[error("Catalog parse error: {0}")]
    Parse(String),

    #[error("Language not found: {0}")]
    LanguageNotFound(String),

    #[error("Selected topic not found: {language}/{title}")]
    TopicNotFound { language: String, title: String },

    #[error("Invalid catalog: {0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Lesson generation errors.
#[derive(Debug, Error)]
pub enum LessonError {
    #[error("Please select a language and a topic.")]
    MissingSelection,

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Failed to generate lesson: {0}")]
    Generation(String),
}

impl LessonError {
    /// Create a generation error.
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }
}
