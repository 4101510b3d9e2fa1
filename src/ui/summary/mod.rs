//! Summary screen feature module.
//!
//! The whole interactive surface of the app: a link input, a submit button,
//! and the summary or error that comes back.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Input text and request state
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions
//! - `controller.rs` - Owns the state, decides when a request is made
//! - `view.rs` - Rendering

mod controller;
mod intent;
mod reducer;
mod state;
mod view;

pub use controller::{Completion, RequestTicket, SubmitOutcome, SummaryController};
pub use intent::SummaryIntent;
pub use reducer::SummaryReducer;
pub use state::{
    FailureKind, RequestState, SummaryState, INVALID_URL_MESSAGE, SERVICE_FAILURE_MESSAGE,
};
pub use view::{
    render_button, render_input, render_status, render_summary, BUTTON_LABEL,
    BUTTON_LOADING_LABEL, PLACEHOLDER,
};
