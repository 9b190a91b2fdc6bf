use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using HomefitError
pub type Result<T> = std::result::Result<T, HomefitError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure surfaced by the store, the engine or the CLI is classified
/// into one of these kinds. Each kind maps to a stable code that callers can
/// match on without parsing messages.
///
/// A malformed list field read back from the database is deliberately absent
/// here: it degrades to an empty list and is only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Entity, database file or backup file is absent
    NotFound,
    /// Required field missing or numeric field out of range
    InvalidInput,
    /// Restore candidate is SQLite but lacks the application tables
    InvalidFormat,
    /// Restore candidate is not an SQLite database at all
    NotADatabase,
    /// Database engine failure
    Persistence,
    /// File system failure
    Io,
    Serialization,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidFormat => "ERR_INVALID_FORMAT",
            ExErrorKind::NotADatabase => "ERR_NOT_A_DATABASE",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional context (operation, entity
/// code, file path) for debugging and for rendering messages at the adapter.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    path: Option<PathBuf>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity code context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }

    /// True when the error means "absent", which adapters usually report
    /// rather than treat as a failure
    pub fn is_not_found(&self) -> bool {
        self.kind == ExErrorKind::NotFound
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (code: {})", entity_id)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        if let Some(source) = &self.source {
            write!(f, " <- {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for Homefit operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HomefitError {
    // ===== Lookup Errors =====
    /// Workout set not found
    #[error("Workout set not found: {code}")]
    WorkoutSetNotFound { code: String },

    /// Exercise not found
    #[error("Exercise not found: {code}")]
    ExerciseNotFound { code: String },

    // ===== Validation Errors =====
    /// Required name is empty or whitespace-only
    #[error("Invalid {entity} name: {reason}")]
    InvalidName { entity: String, reason: String },

    /// Numeric field outside its accepted range
    #[error("{field} = {value} is outside the accepted range [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Workout duration must be positive
    #[error("Invalid workout duration: {seconds}s (must be > 0)")]
    InvalidDuration { seconds: i64 },

    // ===== Backup/Restore Errors =====
    /// Live database file does not exist
    #[error("Database file not found: {}", .path.display())]
    DatabaseMissing { path: PathBuf },

    /// Backup candidate does not exist
    #[error("Backup file not found: {}", .path.display())]
    BackupNotFound { path: PathBuf },

    /// Candidate is SQLite but not this application's schema
    #[error("Backup {} lacks required tables: {}", .path.display(), .missing_tables.join(", "))]
    InvalidBackupFormat {
        path: PathBuf,
        missing_tables: Vec<String>,
    },

    /// Candidate is not an SQLite database
    #[error("Not a database file: {} ({reason})", .path.display())]
    NotADatabase { path: PathBuf, reason: String },

    // ===== Generic Errors =====
    /// Serialization error (JSON/YAML encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from HomefitError to ExError
impl From<HomefitError> for ExError {
    fn from(err: HomefitError) -> Self {
        let message = err.to_string();
        match err {
            HomefitError::WorkoutSetNotFound { code } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(code)
                .with_message("Workout set not found"),

            HomefitError::ExerciseNotFound { code } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(code)
                .with_message("Exercise not found"),

            HomefitError::InvalidName { .. }
            | HomefitError::OutOfRange { .. }
            | HomefitError::InvalidDuration { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }

            HomefitError::DatabaseMissing { path } => ExError::new(ExErrorKind::NotFound)
                .with_path(path)
                .with_message("Database file not found"),

            HomefitError::BackupNotFound { path } => ExError::new(ExErrorKind::NotFound)
                .with_path(path)
                .with_message("Backup file not found"),

            HomefitError::InvalidBackupFormat { path, .. } => {
                ExError::new(ExErrorKind::InvalidFormat)
                    .with_path(path)
                    .with_message(message)
            }

            HomefitError::NotADatabase { path, .. } => ExError::new(ExErrorKind::NotADatabase)
                .with_path(path)
                .with_message(message),

            HomefitError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            HomefitError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to HomefitError
impl From<serde_json::Error> for HomefitError {
    fn from(err: serde_json::Error) -> Self {
        HomefitError::Serialization {
            message: err.to_string(),
        }
    }
}
