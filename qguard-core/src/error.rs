use thiserror::Error;

pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A malformed asset record aborts the whole batch: partial silent
    /// omission would skew every downstream aggregate.
    #[error("invalid asset '{asset_id}': {reason}")]
    InvalidAsset { asset_id: String, reason: String },

    #[error("invalid global parameters: {0}")]
    InvalidParameters(String),

    #[error("unknown compliance framework '{0}'")]
    UnknownFramework(String),

    #[error("unknown cost scenario '{0}'")]
    UnknownScenario(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
