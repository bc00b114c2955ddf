//! Error types for unitconv.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping every domain failure
//!   - [`ConversionError`] - Bad category/unit input or an empty target selection
//!   - [`PresetError`] - Unknown preset name
//!   - [`ConfigError`](crate::config::ConfigError) - Configuration file failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing setup failures
//!   - [`ExportError`](crate::export::ExportError) - History download failures
//!
//! # Error Recovery Strategy
//!
//! Conversion errors are **never fatal**. The core always returns a typed failure
//! and the presentation layer decides how to surface it (the TUI shows it in the
//! results panel). [`ConversionError::EmptySelection`] is not an error from the
//! user's point of view at all: it means "nothing to convert yet".

use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// Returned from the shell (CLI one-shot mode, TUI setup). Domain errors
/// convert automatically via `From`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid conversion input.
    #[error("Conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    /// Unknown preset requested.
    #[error("{0}")]
    Preset(#[from] PresetError),

    /// Configuration file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// History export failed.
    #[error("Export error: {0}")]
    Export(#[from] crate::export::ExportError),

    /// Terminal or TUI rendering error.
    ///
    /// Fatal: without a working terminal the TUI cannot function.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors raised by the conversion engine and unit registry.
///
/// All variants are local and synchronous. Arithmetic has no transient
/// failure mode, so there is nothing to retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// A category name that is not one of the six known categories.
    ///
    /// # Examples
    ///
    /// ```
    /// use unitconv::model::{Category, ConversionError};
    ///
    /// let err = "Currency".parse::<Category>().unwrap_err();
    /// assert_eq!(err, ConversionError::InvalidCategory("Currency".into()));
    /// ```
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// A unit name that does not belong to the category's unit set.
    ///
    /// Cross-category names (e.g. "pounds" under Length) land here too; they
    /// are never silently computed.
    #[error("Unknown unit '{unit}' for category {category}")]
    UnknownUnit {
        /// Category the unit was looked up in.
        category: super::Category,
        /// The rejected unit name.
        unit: String,
    },

    /// No target units were selected.
    ///
    /// Not fatal: callers simply skip the conversion.
    #[error("No target units selected")]
    EmptySelection,
}

impl ConversionError {
    /// Whether this error only means "nothing to convert yet".
    pub fn is_empty_selection(&self) -> bool {
        matches!(self, ConversionError::EmptySelection)
    }
}

/// Errors raised when applying a preset by name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PresetError {
    /// No preset with this exact name exists.
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}
