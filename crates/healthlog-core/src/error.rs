//! Fatal conditions raised while normalising records or extracting fields.

/// Errors produced by the normaliser and the field extractors.
///
/// A record that simply does not carry a marker is not an error; see
/// [`Extraction::NoMatch`](crate::extract::Extraction::NoMatch).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("line {line}: malformed timestamp {text:?}")]
    MalformedTimestamp {
        line: u64,
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("line {line}: malformed {marker} payload at {component:?}: {reason}")]
    MalformedPayload {
        line: u64,
        marker: &'static str,
        /// The payload component that failed to parse, or the whole content
        /// when the expected component is missing.
        component: String,
        reason: String,
    },
}

impl Error {
    /// Source line of the record that triggered the error.
    pub fn line(&self) -> u64 {
        match self {
            Error::MalformedTimestamp { line, .. } | Error::MalformedPayload { line, .. } => *line,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
