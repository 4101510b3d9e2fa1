//! One-shot summarization without the terminal UI (`--print`, `--video-id`).

use crate::extractor::VideoId;
use crate::service::SummaryService;
use crate::ui::summary::{FailureKind, RequestState, SubmitOutcome, SummaryController};

/// Run a single submission of `input` through the controller.
///
/// Goes through the same state machine as the UI, so invalid input never
/// reaches the service and every service failure collapses into
/// [`FailureKind::ServiceFailure`].
pub async fn summarize_once(
    service: &dyn SummaryService,
    input: &str,
) -> Result<String, FailureKind> {
    let mut controller = SummaryController::with_input(input);
    let outcome = controller.submit();
    finish(service, controller, outcome).await
}

/// Like [`summarize_once`] for an identifier that is already known.
pub async fn summarize_video(
    service: &dyn SummaryService,
    video_id: VideoId,
) -> Result<String, FailureKind> {
    let mut controller = SummaryController::new();
    let outcome = controller.submit_video(video_id);
    finish(service, controller, outcome).await
}

async fn finish(
    service: &dyn SummaryService,
    mut controller: SummaryController,
    outcome: SubmitOutcome,
) -> Result<String, FailureKind> {
    if let SubmitOutcome::Dispatched(ticket) = outcome {
        let completion = ticket.execute(service).await;
        controller.complete(completion);
    }

    match controller.request() {
        RequestState::Succeeded { summary } => Ok(summary.clone()),
        RequestState::Failed { kind } => Err(*kind),
        RequestState::Idle | RequestState::Loading { .. } => Err(FailureKind::ServiceFailure),
    }
}
