//! Lesson generation seam.
//!
//! Lessons come from a remote text-generation service. This crate only defines
//! the interface and resolves a language/topic selection to the prompt that is
//! sent to it.

use crate::catalog::LanguageCatalog;
use crate::error::LessonError;
use async_trait::async_trait;
use tracing::debug;

/// A service that turns a topic prompt into lesson text.
#[async_trait]
pub trait LessonGenerator: Send + Sync {
    /// Generate lesson text for a prompt.
    async fn generate_lesson(&self, prompt: &str) -> Result<String, LessonError>;
}

/// Resolve a selection against the catalog and generate its lesson.
///
/// Empty selections are rejected before the catalog is consulted.
pub async fn prepare_lesson(
    catalog: &LanguageCatalog,
    generator: &dyn LessonGenerator,
    language: &str,
    title: &str,
) -> Result<String, LessonError> {
    if language.is_empty() || title.is_empty() {
        return Err(LessonError::MissingSelection);
    }

    let topic = catalog.topic(language, title)?;
    debug!(language, title, "Generating lesson");
    generator.generate_lesson(&topic.prompt).await
}
