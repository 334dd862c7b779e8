// crates/gazetteer-core/src/error.rs
use thiserror::Error;

/// Errors produced by the gazetteer.
///
/// Load-time variants (`Io`, `DataLoad`, `DuplicateId`) are fatal for the
/// process that is starting up. `NotFound` and `Validation` are ordinary query
/// outcomes that the caller turns into a user-facing answer.
#[derive(Debug, Error)]
pub enum GazetteerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A source row does not fit the fixed column schema.
    #[error("line {line}: invalid `{field}`: {reason}")]
    DataLoad {
        line: usize,
        field: &'static str,
        reason: String,
    },

    #[error("line {line}: duplicate geonameid {id}")]
    DuplicateId { line: usize, id: String },

    #[error("{0} not found")]
    NotFound(String),

    #[error("invalid parameter: {0}")]
    Validation(String),
}

impl GazetteerError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, GazetteerError::NotFound(_))
    }

    pub(crate) fn data_load(line: usize, field: &'static str, reason: impl Into<String>) -> Self {
        GazetteerError::DataLoad {
            line,
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GazetteerError>;
