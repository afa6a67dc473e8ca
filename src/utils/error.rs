use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Conflicting options: {message}")]
    ConflictingOptions { message: String },

    #[error("No terms available after applying exclusions")]
    EmptyTermSet,

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {message}")]
    TomlParse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification so callers can branch without matching on fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ConflictingOptions,
    EmptyTermSet,
    Config,
    Io,
}

impl TransformError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransformError::ConflictingOptions { .. } => ErrorKind::ConflictingOptions,
            TransformError::EmptyTermSet => ErrorKind::EmptyTermSet,
            TransformError::InvalidConfigValue { .. }
            | TransformError::TomlParse { .. } => ErrorKind::Config,
            TransformError::Io(_) => ErrorKind::Io,
        }
    }

    /// True for the two errors raised while resolving apartment terms.
    pub fn is_term_configuration_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::ConflictingOptions | ErrorKind::EmptyTermSet
        )
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
