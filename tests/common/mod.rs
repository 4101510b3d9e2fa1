//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use yt_summary::extractor::VideoId;
use yt_summary::service::{SummaryError, SummaryService};

/// In-process service that answers from a fixed script and counts calls.
pub struct FakeService {
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
    answer: Result<String, u16>,
}

impl FakeService {
    pub fn succeeding(summary: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
            answer: Ok(summary.to_string()),
        }
    }

    /// Fails every call with the given HTTP status.
    pub fn failing(status: u16) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
            answer: Err(status),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummaryService for FakeService {
    async fn fetch_summary(&self, video_id: &VideoId) -> Result<String, SummaryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(video_id.to_string());
        match &self.answer {
            Ok(summary) => Ok(summary.clone()),
            Err(status) => Err(SummaryError::Status {
                status: *status,
                body: "scripted failure".to_string(),
            }),
        }
    }
}
