use thiserror::Error;

pub type DashResult<T> = Result<T, ConfigurationError>;

/// The single error taxonomy of this crate.
///
/// Every failure is a static configuration mismatch surfaced before any
/// primitive is produced, so nothing here is retryable.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("chart `{kind}` references missing column `{column}` in dataset `{dataset}`")]
    MissingColumn {
        kind: String,
        column: String,
        dataset: String,
    },

    #[error("chart `{kind}` is missing required channel `{channel}`")]
    MissingChannel { kind: String, channel: String },

    #[error("unsupported chart kind: `{0}`")]
    UnsupportedKind(String),

    #[error(
        "channel `{channel}` of chart `{kind}` needs a numeric column, but `{column}` holds {actual}"
    )]
    ColumnTypeMismatch {
        kind: String,
        channel: String,
        column: String,
        actual: String,
    },

    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("invalid theme: {0}")]
    InvalidTheme(String),

    #[error("invalid visual element: {0}")]
    InvalidElement(String),

    #[error("contract payload: {0}")]
    ContractPayload(String),
}
