use thiserror::Error;

/// Top-level error type for ARGUS operations.
#[derive(Debug, Error)]
pub enum ArgusError {
    // --- Caller errors (rejected before any phase executes) ---
    #[error("Input error: {0}")]
    Input(String),

    // --- Oracle errors (abort the whole analysis) ---
    #[error("Oracle returned malformed output: {0}")]
    OracleMalformed(String),

    #[error("Oracle unavailable: {0}")]
    OracleUnavailable(String),

    // --- Operational errors ---
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ArgusError {
    /// Whether this error was caused by the reasoning oracle (as opposed to
    /// the caller or the engine itself).
    pub fn is_oracle_failure(&self) -> bool {
        matches!(self, Self::OracleMalformed(_) | Self::OracleUnavailable(_))
    }

    /// Whether this error rejects the caller's request outright.
    pub fn is_rejected_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}

/// Result type alias for ARGUS operations.
pub type Result<T> = std::result::Result<T, ArgusError>;
