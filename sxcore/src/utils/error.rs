use strum::EnumIs;
use thiserror::Error;

use crate::operation::Operation;

#[derive(Debug, Error, EnumIs)]
pub enum SxError {
    /// A query that is only defined for some node kinds was issued on another kind, e.g.
    /// asking a symbol for its operator.
    #[error("Invalid operation `{query}`: {reason}")]
    InvalidOperation {
        query: &'static str,
        reason: &'static str,
    },

    /// Operand index beyond the arity of the operator.
    #[error("Operand index {index} is out of range for `{op}` which has {ndeps} operand(s)")]
    DepIndexOutOfRange {
        index: usize,
        ndeps: usize,
        op: Operation,
    },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration file '{file}': {source}")]
    ConfigParseError {
        source: toml::de::Error,
        file: String,
    },
}

impl SxError {
    pub(crate) fn invalid(query: &'static str, reason: &'static str) -> Self {
        SxError::InvalidOperation { query, reason }
    }
}

pub type SxResult<T> = Result<T, SxError>;
