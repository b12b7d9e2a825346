use std::fmt;

/// Identifier of a browser tab hosting a content agent.
pub type TabId = u64;

/// Failure outcome of a single annotation fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The identifier failed validation; no request was made.
    InvalidVideoId,
    /// The endpoint answered with a non-success status.
    HttpStatus(u16),
    /// The video was archived but carries no annotation track (empty body).
    Unavailable,
    /// Transport-level failure.
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidVideoId => write!(f, "invalid video id"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Unavailable => write!(f, "annotations unavailable"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
