//! YouTube video identifier extraction.
//!
//! Recognizes the usual link shapes (`youtu.be/ID`, `/v/ID`, `/u/x/ID`,
//! `/embed/ID`, `watch?v=ID`, `&v=ID`) with a single pattern. The text after
//! the prefix, up to the next `#`, `&` or `?`, is the candidate; only an
//! 11-character candidate counts as an identifier.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of every YouTube video identifier.
pub const VIDEO_ID_LEN: usize = 11;

// `[^\n\r\x{2028}\x{2029}]` never crosses a line terminator, `\r` and the
// Unicode separators included.
static VIDEO_URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[^\n\r\x{2028}\x{2029}]*",
        r"(youtu.be/|v/|u/[0-9A-Za-z_]/|embed/|watch\?v=|&v=)",
        r"([^#&?]*)",
        r"[^\n\r\x{2028}\x{2029}]*",
    ))
    .expect("video URL pattern is valid")
});

/// An 11-character YouTube video identifier.
///
/// Case is preserved; no check is made that the video exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("video id must be exactly 11 characters, got {len}")]
pub struct InvalidVideoId {
    pub len: usize,
}

impl TryFrom<&str> for VideoId {
    type Error = InvalidVideoId;

    /// Length is counted in UTF-16 code units, as browsers count it.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let len = value.encode_utf16().count();
        if len == VIDEO_ID_LEN {
            Ok(Self(value.to_string()))
        } else {
            Err(InvalidVideoId { len })
        }
    }
}

impl FromStr for VideoId {
    type Err = InvalidVideoId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// Extract the video identifier from a link.
///
/// Returns `None` when no recognized prefix is present or when the captured
/// segment is not exactly [`VIDEO_ID_LEN`] characters long.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    let captures = VIDEO_URL_PATTERN.captures(url)?;
    let candidate = captures.get(2)?.as_str();
    VideoId::try_from(candidate).ok()
}
