//! Language and topic catalog.
//!
//! The catalog maps a language key (e.g. `javascript`) to its display name and
//! the topics a lesson can be generated for. Keys are unique by construction;
//! topic titles must be unique within a language, which [`LanguageCatalog::validate`]
//! enforces.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// A lesson topic within a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTopic {
    /// Title shown in the topic picker.
    pub title: String,

    /// Prompt sent to the text-generation service.
    pub prompt: String,
}

/// A language with its topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Display name.
    pub name: String,

    /// Topics in display order.
    #[serde(default)]
    pub topics: Vec<LanguageTopic>,
}

impl Language {
    /// Find a topic by title.
    pub fn topic(&self, title: &str) -> Option<&LanguageTopic> {
        self.topics.iter().find(|t| t.title == title)
    }
}

/// Catalog of languages keyed by language key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCatalog {
    languages: BTreeMap<String, Language>,
}

impl LanguageCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate a catalog from JSON5.
    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        let catalog: Self =
            json5::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Add or replace a language.
    pub fn insert(&mut self, key: impl Into<String>, language: Language) {
        self.languages.insert(key.into(), language);
    }

    /// Check catalog invariants.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (key, language) in &self.languages {
            if language.name.trim().is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "language '{}' has an empty name",
                    key
                )));
            }

            let mut seen = HashSet::new();
            for topic in &language.topics {
                if !seen.insert(topic.title.as_str()) {
                    return Err(CatalogError::Invalid(format!(
                        "duplicate topic '{}' in language '{}'",
                        topic.title, key
                    )));
                }
            }
        }
        Ok(())
    }

    /// Language keys with their display names, in key order.
    pub fn languages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.languages
            .iter()
            .map(|(key, language)| (key.as_str(), language.name.as_str()))
    }

    /// Look up a language by key.
    pub fn language(&self, key: &str) -> Result<&Language, CatalogError> {
        self.languages
            .get(key)
            .ok_or_else(|| CatalogError::LanguageNotFound(key.to_string()))
    }

    /// Reverse lookup from display name to key.
    pub fn key_for_name(&self, name: &str) -> Option<&str> {
        self.languages
            .iter()
            .find(|(_, language)| language.name == name)
            .map(|(key, _)| key.as_str())
    }

    /// Look up a topic of a language by title.
    pub fn topic(&self, key: &str, title: &str) -> Result<&LanguageTopic, CatalogError> {
        self.language(key)?
            .topic(title)
            .ok_or_else(|| CatalogError::TopicNotFound {
                language: key.to_string(),
                title: title.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
