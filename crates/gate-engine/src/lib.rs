//! Rendering-engine collaborator contract.
//!
//! The shell never talks to a rendering engine directly; it drives this trait
//! and reacts to the events the engine reports back on the GUI thread.

use std::collections::VecDeque;

/// Notifications an engine delivers to the shell's event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The engine wants to navigate (e.g. an in-page link click). The shell
    /// answers by allowing, redirecting or dropping the request.
    NavigationRequested { url: String },
    /// The true loaded location changed, including engine-internal history
    /// moves the shell did not initiate.
    LocationChanged { url: String },
    /// A load completed, successfully or not.
    LoadFinished { success: bool },
    /// The document title changed during a load.
    TitleChanged { title: String },
    /// Answer to a one-shot [`RenderEngine::request_title`] probe.
    TitleResult { title: String },
}

/// Contract every embedded rendering surface satisfies.
pub trait RenderEngine {
    /// Starts loading `url` as the surface's new true location.
    fn set_location(&mut self, url: &str);

    /// The surface's current true location.
    fn location(&self) -> &str;

    /// Replaces the displayed content with an in-memory document without
    /// moving the true location.
    fn show_document(&mut self, html: &str);

    /// Issues the asynchronous title probe; the engine answers with a
    /// [`EngineEvent::TitleResult`] on the event loop.
    fn request_title(&mut self);

    /// Drains the pending event queue in delivery order.
    fn poll_events(&mut self) -> Vec<EngineEvent>;
}

/// In-process engine stand-in.
///
/// The deployment's real engine is an external widget; this one keeps the
/// shell runnable and the event pipeline testable. Loads "complete"
/// immediately and succeed; tests queue their own failures and titles.
#[derive(Debug, Clone, Default)]
pub struct LocalEngine {
    location: String,
    document: Option<String>,
    document_title: String,
    fail_next: bool,
    events: VecDeque<EngineEvent>,
}

impl LocalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The in-memory document currently displayed, if any.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Queues an engine-initiated navigation request, as a link click inside
    /// the rendered page would.
    pub fn request_navigation(&mut self, url: &str) {
        self.events.push_back(EngineEvent::NavigationRequested {
            url: url.to_owned(),
        });
    }

    /// Scripts the next location load to report failure.
    pub fn fail_next_load(&mut self) {
        self.fail_next = true;
    }
}

impl RenderEngine for LocalEngine {
    fn set_location(&mut self, url: &str) {
        let success = !core::mem::take(&mut self.fail_next);
        self.location = url.to_owned();
        self.document = None;
        self.document_title.clear();
        self.events.push_back(EngineEvent::LocationChanged {
            url: url.to_owned(),
        });
        self.events.push_back(EngineEvent::LoadFinished { success });
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn show_document(&mut self, html: &str) {
        self.document_title = extract_html_title(html).unwrap_or_default();
        self.document = Some(html.to_owned());
        self.events.push_back(EngineEvent::TitleChanged {
            title: self.document_title.clone(),
        });
        self.events
            .push_back(EngineEvent::LoadFinished { success: true });
    }

    fn request_title(&mut self) {
        self.events.push_back(EngineEvent::TitleResult {
            title: self.document_title.clone(),
        });
    }

    fn poll_events(&mut self) -> Vec<EngineEvent> {
        self.events.drain(..).collect()
    }
}

fn extract_html_title(document: &str) -> Option<String> {
    let lower = document.to_ascii_lowercase();
    let open = lower.find("<title>")?;
    let close = lower.find("</title>")?;
    if close <= open + 7 {
        return None;
    }

    let title = document[(open + 7)..close].trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_owned())
    }
}
