//! Intents for the summary screen.

use uuid::Uuid;

use crate::extractor::VideoId;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SummaryIntent {
    /// Typed a character into the input box.
    InputChar(char),

    /// Deleted the last character.
    Backspace,

    /// Emptied the input box.
    ClearInput,

    /// Appended pasted text.
    Paste(String),

    /// Replaced the whole input.
    SetInput(String),

    /// User submitted the input. `video_id` is what the extractor found in it.
    Submit {
        request_id: Uuid,
        video_id: Option<VideoId>,
    },

    /// The service answered for `request_id`.
    Succeeded { request_id: Uuid, summary: String },

    /// The request for `request_id` failed.
    Failed { request_id: Uuid },

    /// Animation tick (for spinner updates).
    AnimationTick,

    /// Scroll the summary by `delta` lines; negative scrolls up.
    Scroll(i32),
}

impl Intent for SummaryIntent {}
