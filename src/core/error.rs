//! Typed error handling
//!
//! Repositories only ever fail in a handful of ways, captured by
//! [`RepositoryError`]. Services layered on top add validation and conflict
//! failures; everything is gathered under [`QuillError`] so callers can match
//! on the exact case.
//!
//! # Example
//!
//! ```rust,ignore
//! match categories.get(42) {
//!     Ok(category) => println!("Found: {}", category.name),
//!     Err(RepositoryError::NotFound { id, .. }) => println!("No category {}", id),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use crate::core::entity::EntityId;
use serde::Serialize;
use thiserror::Error;

/// Result alias used by repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Result alias used by services
pub type QuillResult<T> = Result<T, QuillError>;

/// The main error type for the crate
#[derive(Debug, Error)]
pub enum QuillError {
    /// Repository failures (null arguments, missing entities, store failures)
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Input rejected before reaching the repository
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Input clashes with an existing entity
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl QuillError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            QuillError::Repository(e) => e.error_code(),
            QuillError::Validation(_) => "VALIDATION_ERROR",
            QuillError::Conflict(_) => "CONFLICT",
            QuillError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Check whether this is a missing-entity failure
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            QuillError::Repository(RepositoryError::NotFound { .. })
        )
    }
}

// =============================================================================
// Repository Errors
// =============================================================================

/// Errors raised by repository operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// A required entity, collection or lookup value was absent
    #[error("Argument '{argument}' must not be null")]
    ArgumentNull { argument: &'static str },

    /// No entity carries the requested identity
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: String, id: EntityId },

    /// The backing store failed (e.g. a poisoned lock)
    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl RepositoryError {
    pub fn argument_null(argument: &'static str) -> Self {
        RepositoryError::ArgumentNull { argument }
    }

    pub fn not_found(entity_type: &str, id: EntityId) -> Self {
        RepositoryError::NotFound {
            entity_type: entity_type.to_string(),
            id,
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        RepositoryError::Storage {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RepositoryError::ArgumentNull { .. } => "ARGUMENT_NULL",
            RepositoryError::NotFound { .. } => "ENTITY_NOT_FOUND",
            RepositoryError::Storage { .. } => "STORAGE_ERROR",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors related to input validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Single field validation error
    #[error("Validation error for field '{}': {}", .0.field, .0.message)]
    Field(FieldValidationError),

    /// Multiple field validation errors
    #[error("Validation errors: {}", join_fields(.0))]
    Fields(Vec<FieldValidationError>),
}

impl ValidationError {
    /// Collapse a list of field errors; `None` when the list is empty
    pub fn from_fields(mut errors: Vec<FieldValidationError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop().map(ValidationError::Field),
            _ => Some(ValidationError::Fields(errors)),
        }
    }

    /// All field errors, whichever variant holds them
    pub fn fields(&self) -> Vec<&FieldValidationError> {
        match self {
            ValidationError::Field(e) => vec![e],
            ValidationError::Fields(errors) => errors.iter().collect(),
        }
    }
}

fn join_fields(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Conflict Errors
// =============================================================================

/// An entity with the same unique value already exists
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{entity_type} with {field} '{value}' already exists")]
pub struct ConflictError {
    pub entity_type: String,
    pub field: String,
    pub value: String,
}

impl ConflictError {
    pub fn new(entity_type: &str, field: &str, value: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.to_string(),
            field: field.to_string(),
            value: value.into(),
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config{}: {message}", file_suffix(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

fn file_suffix(file: &Option<String>) -> String {
    file.as_ref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}
