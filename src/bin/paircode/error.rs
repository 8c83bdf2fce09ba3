use thiserror::Error;

#[derive(Error, Debug)]
/// CLI errors.
pub enum CliError {
    #[error("{0}")]
    /// Plain user-facing message.
    Message(String),

    #[error("{invalid} of {total} pairing code(s) invalid")]
    /// `check` found invalid codes.
    InvalidCodes {
        /// Number of invalid codes.
        invalid: usize,
        /// Number of codes checked.
        total: usize,
    },

    #[error(transparent)]
    /// Library error.
    Paircode(#[from] paircode::Error),

    #[error(transparent)]
    /// JSON output failed.
    Json(#[from] serde_json::Error),
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    /// Render for stderr.
    pub fn user_message(&self) -> String {
        match self {
            Self::Message(msg) => msg.clone(),
            Self::InvalidCodes { .. } => self.to_string(),
            Self::Paircode(err) => match err {
                paircode::Error::InvalidLength { min, got } => {
                    format!("length must be at least {min}, got {got}")
                }
                paircode::Error::LengthTooLong { max, got } => {
                    format!("length must be at most {max}, got {got}")
                }
                other => other.to_string(),
            },
            Self::Json(err) => err.to_string(),
        }
    }
}
