use crate::config::Config;
use crate::service::SummaryService;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Run the interactive UI until the user quits.
///
/// Requests run on `runtime`; everything else happens on the calling thread.
pub fn run(
    config: &Config,
    service: Arc<dyn SummaryService>,
    initial_input: Option<String>,
    runtime: Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(service, config.service.base_url.clone(), runtime, events.sender());
    if let Some(input) = initial_input {
        app.controller_mut().set_input(input);
    }
    tracing::info!(service = %config.service.base_url, "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => app.handle_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}
