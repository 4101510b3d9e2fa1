//! State for the summary screen.

use uuid::Uuid;

use crate::extractor::VideoId;
use crate::ui::mvi::UiState;

/// Shown when no video identifier could be extracted from the input.
pub const INVALID_URL_MESSAGE: &str = "Invalid YouTube URL";

/// Shown for every service-side failure; the detail only goes to the log.
pub const SERVICE_FAILURE_MESSAGE: &str = "Failed to fetch summary. Please try again.";

/// Why a submission failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Input did not contain a recognizable video link. No request was made.
    InvalidInput,
    /// The request failed: transport error, non-2xx status or bad body.
    ServiceFailure,
}

impl FailureKind {
    /// User-facing message for this failure.
    pub fn message(self) -> &'static str {
        match self {
            FailureKind::InvalidInput => INVALID_URL_MESSAGE,
            FailureKind::ServiceFailure => SERVICE_FAILURE_MESSAGE,
        }
    }
}

/// Lifecycle of one submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// A request is in flight.
    Loading {
        /// Identifies the in-flight request; completions for any other id are stale.
        request_id: Uuid,
        /// Video being summarized.
        video_id: VideoId,
        /// Animation tick for spinner.
        animation_tick: u8,
    },

    /// The service returned a summary, kept verbatim.
    Succeeded { summary: String },

    /// The submission failed.
    Failed { kind: FailureKind },
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Id of the in-flight request, if any.
    pub fn request_id(&self) -> Option<Uuid> {
        match self {
            Self::Loading { request_id, .. } => Some(*request_id),
            _ => None,
        }
    }

    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Succeeded { summary } => Some(summary),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Failed { kind } => Some(kind.message()),
            _ => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Failed { kind } => Some(*kind),
            _ => None,
        }
    }
}

/// Everything the summary screen renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryState {
    /// Raw text in the input box.
    pub input: String,
    /// Current submission state.
    pub request: RequestState,
    /// First visible line of the summary.
    pub scroll: u16,
}

impl UiState for SummaryState {}

impl SummaryState {
    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Submit is disabled while a request is in flight.
    pub fn can_submit(&self) -> bool {
        !self.request.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loading() -> RequestState {
        RequestState::Loading {
            request_id: Uuid::new_v4(),
            video_id: "dQw4w9WgXcQ".parse().unwrap(),
            animation_tick: 0,
        }
    }

    #[test]
    fn idle_is_default() {
        assert_eq!(RequestState::default(), RequestState::Idle);
        assert!(SummaryState::default().can_submit());
    }

    #[test]
    fn loading_disables_submit() {
        let state = SummaryState {
            request: loading(),
            ..SummaryState::default()
        };
        assert!(!state.can_submit());
        assert!(state.request.request_id().is_some());
    }

    #[test]
    fn failure_messages() {
        assert_eq!(FailureKind::InvalidInput.message(), "Invalid YouTube URL");
        assert_eq!(
            FailureKind::ServiceFailure.message(),
            "Failed to fetch summary. Please try again."
        );
        let failed = RequestState::Failed {
            kind: FailureKind::ServiceFailure,
        };
        assert_eq!(failed.error_message(), Some(SERVICE_FAILURE_MESSAGE));
        assert_eq!(failed.summary(), None);
    }

    #[test]
    fn summary_only_when_succeeded() {
        let done = RequestState::Succeeded {
            summary: "text".into(),
        };
        assert_eq!(done.summary(), Some("text"));
        assert_eq!(done.error_message(), None);
        assert_eq!(loading().summary(), None);
    }
}
