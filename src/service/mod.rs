//! Client side of the external summary service.
//!
//! The service takes a video identifier and answers with a text summary.
//! [`SummaryService`] is the seam the controller and runtime talk to;
//! [`SummaryClient`] is the HTTP implementation.

mod client;
mod error;

use async_trait::async_trait;

use crate::extractor::VideoId;

pub use client::{SummaryClient, SUMMARY_PATH};
pub use error::SummaryError;

/// Source of video summaries.
#[async_trait]
pub trait SummaryService: Send + Sync {
    /// Fetch the summary for one video. Called at most once per submission.
    async fn fetch_summary(&self, video_id: &VideoId) -> Result<String, SummaryError>;
}
