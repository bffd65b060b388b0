/// Errors surfaced by the matching engine.
///
/// Only malformed input is fatal. Missing attributes, incomparable widgets and
/// oracle "no signal" answers are expressed as empty values or `None`.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// UI hierarchy dump is not well-formed XML after emoji stripping
    #[error("malformed UI hierarchy at byte {position}: {message}")]
    Parse { position: u64, message: String },

    /// Locator criterion could not be compiled into a regex
    #[error("invalid pattern for attribute '{attribute}': {source}")]
    InvalidPattern {
        attribute: String,
        #[source]
        source: regex::Error,
    },

    #[error("I/O error ({context}): {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),
}

impl MatchError {
    pub(crate) fn parse(position: u64, message: impl Into<String>) -> Self {
        MatchError::Parse {
            position,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
