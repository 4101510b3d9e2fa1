use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::summary::{
    render_button, render_input, render_status, render_summary, SummaryState,
};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    draw_screen(frame, app.controller().state(), app.service_label());
}

/// Draw the whole screen for `state`.
pub fn draw_screen(frame: &mut Frame<'_>, state: &SummaryState, service_label: &str) {
    let regions = layout_regions(frame.area());

    frame.render_widget(Header::new(service_label).widget(), regions.header);
    let cursor = render_input(frame, regions.input, state);
    render_button(frame, regions.button, state);
    render_status(frame, regions.status, state);
    render_summary(frame, regions.summary, state);
    frame.render_widget(Footer::new().widget(regions.footer), regions.footer);

    if regions.input.height > 2 {
        frame.set_cursor_position(cursor);
    }
}
