use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque 11-character token identifying a video. Validated only by length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoId(String);

impl VideoId {
    /// Required identifier length, in characters.
    pub const LENGTH: usize = 11;

    /// Parses an identifier, rejecting any string whose length is not 11.
    pub fn parse(raw: &str) -> Result<Self, InvalidVideoId> {
        let length = raw.chars().count();
        if length != Self::LENGTH {
            return Err(InvalidVideoId { length });
        }
        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for VideoId {
    type Error = InvalidVideoId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<VideoId> for String {
    fn from(id: VideoId) -> Self {
        id.0
    }
}

/// Rejection reason for a malformed video identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidVideoId {
    pub length: usize,
}

impl fmt::Display for InvalidVideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "video id must be exactly {} characters long (got {})",
            VideoId::LENGTH,
            self.length
        )
    }
}

impl std::error::Error for InvalidVideoId {}
