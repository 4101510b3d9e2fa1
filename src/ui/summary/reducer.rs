//! Reducer for the summary screen.

use crate::ui::mvi::Reducer;

use super::intent::SummaryIntent;
use super::state::{FailureKind, RequestState, SummaryState};

pub struct SummaryReducer;

impl Reducer for SummaryReducer {
    type State = SummaryState;
    type Intent = SummaryIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SummaryIntent::InputChar(ch) => {
                state.input.push(ch);
                state
            }

            SummaryIntent::Backspace => {
                state.input.pop();
                state
            }

            SummaryIntent::ClearInput => {
                state.input.clear();
                state
            }

            SummaryIntent::Paste(text) => {
                state.input.push_str(&text);
                state
            }

            SummaryIntent::SetInput(text) => {
                state.input = text;
                state
            }

            SummaryIntent::Submit {
                request_id,
                video_id,
            } => {
                // One request at a time
                if state.request.is_loading() {
                    return state;
                }

                state.scroll = 0;
                state.request = match video_id {
                    Some(video_id) => RequestState::Loading {
                        request_id,
                        video_id,
                        animation_tick: 0,
                    },
                    None => RequestState::Failed {
                        kind: FailureKind::InvalidInput,
                    },
                };
                state
            }

            SummaryIntent::Succeeded {
                request_id,
                summary,
            } => {
                if state.request.request_id() != Some(request_id) {
                    return state;
                }
                state.request = RequestState::Succeeded { summary };
                state
            }

            SummaryIntent::Failed { request_id } => {
                if state.request.request_id() != Some(request_id) {
                    return state;
                }
                state.request = RequestState::Failed {
                    kind: FailureKind::ServiceFailure,
                };
                state
            }

            SummaryIntent::AnimationTick => {
                if let RequestState::Loading { animation_tick, .. } = &mut state.request {
                    *animation_tick = animation_tick.wrapping_add(1);
                }
                state
            }

            SummaryIntent::Scroll(delta) => {
                if state.request.summary().is_some() {
                    let next = i64::from(state.scroll) + i64::from(delta);
                    state.scroll = next.clamp(0, i64::from(u16::MAX)) as u16;
                }
                state
            }
        }
    }
}
