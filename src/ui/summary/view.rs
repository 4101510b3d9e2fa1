//! Rendering for the summary screen: input box, button, error line, summary.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::layout::centered_columns;
use crate::ui::theme::{
    BUTTON_DISABLED, BUTTON_ENABLED, BUTTON_TEXT, GLOBAL_BORDER, HEADER_TEXT, INPUT_BORDER,
    PLACEHOLDER_TEXT, STATUS_ERROR, STATUS_OK,
};

use super::state::{RequestState, SummaryState};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const PLACEHOLDER: &str = "Enter YouTube Video Link";
pub const BUTTON_LABEL: &str = "Get Summary";
pub const BUTTON_LOADING_LABEL: &str = "Loading...";

/// Widest the input box gets on large terminals.
const MAX_INPUT_WIDTH: u16 = 100;

/// Render the input box. Returns the cursor position inside it.
pub fn render_input(frame: &mut Frame, area: Rect, state: &SummaryState) -> (u16, u16) {
    let area = centered_columns(area, MAX_INPUT_WIDTH);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(INPUT_BORDER));
    let inner = block.inner(area);

    let (line, cursor_col) = if state.input.is_empty() {
        (
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(PLACEHOLDER_TEXT),
            )),
            0,
        )
    } else {
        let visible = visible_tail(&state.input, inner.width.saturating_sub(1) as usize);
        let width = visible.chars().count() as u16;
        (
            Line::from(Span::styled(visible, Style::default().fg(HEADER_TEXT))),
            width,
        )
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
    (inner.x + cursor_col.min(inner.width.saturating_sub(1)), inner.y)
}

/// Render the submit button; it looks disabled while loading.
pub fn render_button(frame: &mut Frame, area: Rect, state: &SummaryState) {
    let (label, bg) = if state.can_submit() {
        (BUTTON_LABEL, BUTTON_ENABLED)
    } else {
        (BUTTON_LOADING_LABEL, BUTTON_DISABLED)
    };

    let mut style = Style::default().fg(BUTTON_TEXT).bg(bg);
    if state.can_submit() {
        style = style.add_modifier(Modifier::BOLD);
    }

    let line = Line::from(Span::styled(format!("[ {} ]", label), style));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Render the spinner while loading, or the error message after a failure.
pub fn render_status(frame: &mut Frame, area: Rect, state: &SummaryState) {
    let line = match &state.request {
        RequestState::Loading {
            video_id,
            animation_tick,
            ..
        } => {
            let spinner = SPINNER_FRAMES[(*animation_tick as usize) % SPINNER_FRAMES.len()];
            Line::from(vec![
                Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
                Span::styled(
                    format!("Fetching summary for {}...", video_id),
                    Style::default().fg(HEADER_TEXT),
                ),
            ])
        }
        RequestState::Failed { kind } => Line::from(Span::styled(
            kind.message(),
            Style::default().fg(STATUS_ERROR),
        )),
        RequestState::Idle | RequestState::Succeeded { .. } => return,
    };

    // Leave a blank row above, like the margin under the button
    let row = Rect {
        y: area.y + area.height.min(1),
        height: area.height.saturating_sub(1),
        ..area
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
}

/// Render the summary text, wrapped without trimming whitespace.
pub fn render_summary(frame: &mut Frame, area: Rect, state: &SummaryState) {
    let Some(summary) = state.request.summary() else {
        return;
    };

    let block = Block::default()
        .title(Span::styled(
            " Summary: ",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let paragraph = Paragraph::new(summary)
        .style(Style::default().fg(HEADER_TEXT))
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0))
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Last `max_chars` characters of `text`, so the end of a long link stays visible.
fn visible_tail(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    text.chars().skip(count.saturating_sub(max_chars)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_tail_keeps_end() {
        assert_eq!(visible_tail("abcdef", 3), "def");
        assert_eq!(visible_tail("abc", 10), "abc");
        assert_eq!(visible_tail("abc", 0), "");
    }
}
