//! Request controller: owns the summary state and decides when a request is made.

use uuid::Uuid;

use crate::extractor::{extract_video_id, VideoId};
use crate::service::{SummaryError, SummaryService};
use crate::ui::mvi::Reducer;

use super::intent::SummaryIntent;
use super::reducer::SummaryReducer;
use super::state::{RequestState, SummaryState};

/// Result of [`SummaryController::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A request is already in flight; nothing changed.
    Ignored,
    /// No video id in the input; state is `Failed` and no request is needed.
    Rejected,
    /// State is `Loading`; the caller must run exactly one request for the ticket.
    Dispatched(RequestTicket),
}

/// One request to issue against the summary service.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestTicket {
    pub request_id: Uuid,
    pub video_id: VideoId,
}

impl RequestTicket {
    /// Run the request and package the answer for [`SummaryController::complete`].
    pub async fn execute(self, service: &dyn SummaryService) -> Completion {
        let result = service.fetch_summary(&self.video_id).await;
        Completion {
            request_id: self.request_id,
            video_id: self.video_id,
            result,
        }
    }
}

/// Outcome of a finished request.
#[derive(Debug)]
pub struct Completion {
    pub request_id: Uuid,
    pub video_id: VideoId,
    pub result: Result<String, SummaryError>,
}

#[derive(Debug, Default)]
pub struct SummaryController {
    state: SummaryState,
}

impl SummaryController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            state: SummaryState::with_input(input),
        }
    }

    pub fn state(&self) -> &SummaryState {
        &self.state
    }

    pub fn request(&self) -> &RequestState {
        &self.state.request
    }

    pub fn input(&self) -> &str {
        &self.state.input
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    pub fn push_char(&mut self, ch: char) {
        self.dispatch(SummaryIntent::InputChar(ch));
    }

    pub fn pop_char(&mut self) {
        self.dispatch(SummaryIntent::Backspace);
    }

    pub fn clear_input(&mut self) {
        self.dispatch(SummaryIntent::ClearInput);
    }

    pub fn paste(&mut self, text: &str) {
        self.dispatch(SummaryIntent::Paste(text.to_string()));
    }

    pub fn set_input(&mut self, text: String) {
        self.dispatch(SummaryIntent::SetInput(text));
    }

    pub fn scroll(&mut self, delta: i32) {
        self.dispatch(SummaryIntent::Scroll(delta));
    }

    pub fn tick(&mut self) {
        self.dispatch(SummaryIntent::AnimationTick);
    }

    /// Submit the current input.
    ///
    /// Clears any previous summary or error. Invalid input fails immediately
    /// without a request; valid input moves to `Loading` and hands back the
    /// ticket to execute.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.can_submit() {
            tracing::debug!("submit ignored, request already in flight");
            return SubmitOutcome::Ignored;
        }
        let video_id = extract_video_id(&self.state.input);
        self.start(video_id)
    }

    /// Submit an already known video id, bypassing link extraction.
    pub fn submit_video(&mut self, video_id: VideoId) -> SubmitOutcome {
        if !self.can_submit() {
            tracing::debug!("submit ignored, request already in flight");
            return SubmitOutcome::Ignored;
        }
        self.start(Some(video_id))
    }

    fn start(&mut self, video_id: Option<VideoId>) -> SubmitOutcome {
        let request_id = Uuid::new_v4();
        self.dispatch(SummaryIntent::Submit {
            request_id,
            video_id: video_id.clone(),
        });

        match video_id {
            Some(video_id) => {
                tracing::info!(%request_id, %video_id, "requesting summary");
                SubmitOutcome::Dispatched(RequestTicket {
                    request_id,
                    video_id,
                })
            }
            None => {
                tracing::debug!(input = %self.state.input, "no video id in input");
                SubmitOutcome::Rejected
            }
        }
    }

    /// Apply a finished request.
    ///
    /// Returns `false` when the completion does not belong to the in-flight
    /// request and was dropped.
    pub fn complete(&mut self, completion: Completion) -> bool {
        let Completion {
            request_id,
            video_id,
            result,
        } = completion;

        if self.state.request.request_id() != Some(request_id) {
            tracing::debug!(%request_id, "dropping stale completion");
            return false;
        }

        match result {
            Ok(summary) => {
                tracing::info!(%request_id, %video_id, len = summary.len(), "summary received");
                self.dispatch(SummaryIntent::Succeeded {
                    request_id,
                    summary,
                });
            }
            Err(err) => {
                tracing::warn!(
                    %request_id,
                    %video_id,
                    error_type = err.error_type(),
                    error = %err,
                    "Error fetching summary"
                );
                self.dispatch(SummaryIntent::Failed { request_id });
            }
        }
        true
    }

    fn dispatch(&mut self, intent: SummaryIntent) {
        self.state = SummaryReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}
