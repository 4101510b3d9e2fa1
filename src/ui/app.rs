use crate::clipboard::ClipboardHandler;
use crate::service::SummaryService;
use crate::ui::events::AppEvent;
use crate::ui::summary::{Completion, RequestTicket, SubmitOutcome, SummaryController};
use std::sync::mpsc;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Lines moved by PageUp/PageDown.
pub const PAGE_SCROLL: i32 = 10;

pub struct App {
    should_quit: bool,
    controller: SummaryController,
    service: Arc<dyn SummaryService>,
    service_label: String,
    runtime: Handle,
    events: mpsc::Sender<AppEvent>,
    clipboard: Option<ClipboardHandler>,
}

impl App {
    pub fn new(
        service: Arc<dyn SummaryService>,
        service_label: impl Into<String>,
        runtime: Handle,
        events: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            should_quit: false,
            controller: SummaryController::new(),
            service,
            service_label: service_label.into(),
            runtime,
            events,
            clipboard: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn controller(&self) -> &SummaryController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SummaryController {
        &mut self.controller
    }

    /// Where requests go, for the header.
    pub fn service_label(&self) -> &str {
        &self.service_label
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => crate::ui::input::handle_key(self, key),
            AppEvent::Paste(text) => self.on_paste(&text),
            AppEvent::Tick => self.on_tick(),
            AppEvent::Resize => {}
            AppEvent::SummaryReady(completion) => self.on_completion(completion),
        }
    }

    pub fn on_tick(&mut self) {
        self.controller.tick();
    }

    pub fn on_paste(&mut self, text: &str) {
        self.controller.paste(text);
    }

    pub fn on_completion(&mut self, completion: Completion) {
        self.controller.complete(completion);
    }

    /// Submit the current input, spawning the request if one is needed.
    pub fn submit(&mut self) {
        if let SubmitOutcome::Dispatched(ticket) = self.controller.submit() {
            self.spawn_request(ticket);
        }
    }

    /// Paste clipboard text into the input.
    pub fn paste_from_clipboard(&mut self) {
        if self.clipboard.is_none() {
            match ClipboardHandler::new() {
                Ok(handler) => self.clipboard = Some(handler),
                Err(err) => {
                    tracing::warn!(error = %err, "clipboard unavailable");
                    return;
                }
            }
        }

        let Some(clipboard) = self.clipboard.as_mut() else {
            return;
        };
        match clipboard.get_text() {
            Ok(text) => self.controller.paste(&text),
            Err(err) => tracing::warn!(error = %err, "failed to read clipboard text"),
        }
    }

    fn spawn_request(&self, ticket: RequestTicket) {
        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let completion = ticket.execute(service.as_ref()).await;
            // Receiver is gone once the UI has exited; the result is simply dropped
            let _ = events.send(AppEvent::SummaryReady(completion));
        });
    }
}
