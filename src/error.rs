use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Unsupported export format '{0}' (supported: {1})")]
    UnsupportedFormat(String, String),

    #[error("Failed to parse line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("No price data for fund {code}: {reason}")]
    DataUnavailable { code: String, reason: String },

    #[error("No exchange rate from {from} to {to}: {reason}")]
    ConversionUnavailable {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TrackerError {
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    pub fn data_unavailable(code: &str, reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            code: code.to_string(),
            reason: reason.into(),
        }
    }

    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnsupportedFormat(..) => 2,
            Self::Parse { .. } => 3,
            Self::DataUnavailable { .. } => 4,
            Self::ConversionUnavailable { .. } => 5,
            Self::Config(_) | Self::Io(_) => 1,
        }
    }
}
