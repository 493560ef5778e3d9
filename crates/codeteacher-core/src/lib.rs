//! # codeteacher-core
//!
//! Core types, configuration, and the lesson catalog for CodeTeacher.
//!
//! This crate provides shared functionality used across the CodeTeacher crates:
//!
//! - **Configuration**: Loading, validation, and persistence of the config file
//! - **Catalog**: Languages and topics a lesson can be generated for
//! - **Lessons**: The seam to the remote text-generation service
//! - **Environment**: Well-known variables and lookup helpers

pub mod catalog;
pub mod config;
pub mod env;
pub mod error;
pub mod lesson;

// Re-exports for convenience
pub use catalog::{Language, LanguageCatalog, LanguageTopic};
pub use config::Config;
pub use error::{CatalogError, ConfigError, LessonError};
pub use lesson::{prepare_lesson, LessonGenerator};
