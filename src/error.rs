//! Unified error types for dpdp-assess.
//!
//! The scoring core itself is total over its inputs and never fails; these
//! errors cover the surrounding infrastructure: catalog loading, input files,
//! configuration and the storage collaborator.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dpdp-assess operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AssessError {
    /// Invalid question catalog (detected at load time)
    #[error("Invalid question catalog: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// Errors reading profile, answer or report input
    #[error("Failed to read input: {context}")]
    Input {
        context: String,
        #[source]
        source: InputErrorKind,
    },

    /// Errors raised by the storage collaborator
    #[error("Store operation failed: {context}")]
    Store {
        context: String,
        #[source]
        source: StoreErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Catalog violations. These are programmer errors in a catalog definition.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("Catalog contains no questions")]
    Empty,

    #[error("Question at position {index} has an empty id")]
    EmptyId { index: usize },

    #[error("Duplicate question id: {id}")]
    DuplicateId { id: String },

    #[error("Question {id} has an empty category")]
    EmptyCategory { id: String },

    #[error("Question {id} has invalid weight {weight} (must be positive and finite)")]
    InvalidWeight { id: String, weight: f64 },

    #[error("Catalog document is malformed: {0}")]
    Malformed(String),
}

/// Input loading error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InputErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Expected a JSON/YAML object, found {found}")]
    NotAnObject { found: String },
}

/// Storage collaborator error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StoreErrorKind {
    #[error("Store lock poisoned")]
    Poisoned,
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for dpdp-assess operations
pub type Result<T> = std::result::Result<T, AssessError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl AssessError {
    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create an input error with context
    pub fn input(context: impl Into<String>, source: InputErrorKind) -> Self {
        Self::Input {
            context: context.into(),
            source,
        }
    }

    /// Create a store error with context
    pub fn store(context: impl Into<String>, source: StoreErrorKind) -> Self {
        Self::Store {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The catalog violation, if this is a catalog error.
    #[must_use]
    pub const fn catalog_kind(&self) -> Option<&CatalogErrorKind> {
        match self {
            Self::Catalog { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for AssessError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for AssessError {
    fn from(err: serde_json::Error) -> Self {
        Self::input(
            "JSON deserialization",
            InputErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml_ng::Error> for AssessError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::input(
            "YAML deserialization",
            InputErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained outermost-first, so an error surfacing from
/// three layers reads `"outer: middle: base"`.
///
/// # Example
///
/// ```ignore
/// use dpdp_assess::error::ErrorContext;
///
/// let content = std::fs::read_to_string(path)
///     .with_context(|| format!("reading answers from {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<AssessError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: AssessError, new_ctx: &str) -> AssessError {
    match err {
        AssessError::Catalog {
            context: existing,
            source,
        } => AssessError::Catalog {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AssessError::Input {
            context: existing,
            source,
        } => AssessError::Input {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AssessError::Store {
            context: existing,
            source,
        } => AssessError::Store {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AssessError::Io {
            path,
            message,
            source,
        } => AssessError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        AssessError::Config(msg) => AssessError::Config(chain_context(new_ctx, &msg)),
        AssessError::Validation(msg) => AssessError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to an error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| AssessError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| AssessError::Validation(f().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = AssessError::catalog(
            "loading catalog",
            CatalogErrorKind::InvalidWeight {
                id: "q7".to_string(),
                weight: -1.0,
            },
        );
        let display = err.to_string();
        assert!(display.contains("catalog"), "unexpected display: {display}");
        assert!(matches!(
            err.catalog_kind(),
            Some(CatalogErrorKind::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_io_error_mentions_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = AssessError::io("/path/to/answers.json", io_err);

        assert!(err.to_string().contains("/path/to/answers.json"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(AssessError::input(
                "base",
                InputErrorKind::NotAnObject {
                    found: "array".to_string(),
                },
            ))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(AssessError::Input { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Input error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(AssessError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_option_context() {
        let none_value: Option<i32> = None;
        match none_value.context_none("missing value") {
            Err(AssessError::Validation(msg)) => assert_eq!(msg, "missing value"),
            other => panic!("Expected Validation error, got {other:?}"),
        }
        assert_eq!(Some(3).context_none("unused").ok(), Some(3));
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
