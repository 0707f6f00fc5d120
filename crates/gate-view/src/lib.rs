//! Per-tab view state: virtual address, title, navigation history and the
//! post-load not-found check.

use gate_nav::Gateway;
use gate_pages::ErrorPage;

/// Tab labels are cut to this many characters for display.
const MAX_TAB_LABEL_CHARS: usize = 40;
const DEFAULT_TAB_LABEL: &str = "Untitled";

/// One rendering surface with its own navigation state.
///
/// The virtual address is the user-facing string shown in the address bar in
/// place of the true resource location. It is written only by navigation
/// interception and by [`View::sync_virtual_address`].
#[derive(Debug, Clone, Default)]
pub struct View {
    virtual_address: String,
    title: String,
    history: Vec<String>,
    history_index: Option<usize>,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn virtual_address(&self) -> &str {
        &self.virtual_address
    }

    pub fn set_virtual_address(&mut self, virtual_address: impl Into<String>) {
        self.virtual_address = virtual_address.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Re-derives the virtual address after a completed navigation. True
    /// locations under the static host map through the stripping rule;
    /// anything else leaves the virtual address unset.
    pub fn sync_virtual_address(&mut self, gateway: &Gateway, true_url: &str) {
        match gateway.virtual_address_for(true_url) {
            Some(virtual_address) => self.virtual_address = virtual_address,
            None => self.virtual_address.clear(),
        }
    }

    /// Display label for the owning tab: the title cut to a fixed length, or
    /// a default when the title is blank.
    pub fn tab_label(&self) -> String {
        let trimmed = self.title.trim();
        if trimmed.is_empty() {
            return DEFAULT_TAB_LABEL.to_owned();
        }

        self.title.chars().take(MAX_TAB_LABEL_CHARS).collect()
    }

    /// Records a committed load, truncating any forward entries. Consecutive
    /// duplicates collapse into one entry.
    pub fn push_history(&mut self, url: impl Into<String>) {
        let url = url.into();

        if let Some(index) = self.history_index {
            let keep_to = index.saturating_add(1);
            self.history.truncate(keep_to);
        }

        if self.history.last().is_some_and(|existing| existing == &url) {
            self.history_index = Some(self.history.len().saturating_sub(1));
            return;
        }

        self.history.push(url);
        self.history_index = Some(self.history.len().saturating_sub(1));
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.history_index, Some(index) if index > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.history_index, Some(index) if index + 1 < self.history.len())
    }

    /// Steps back in history, returning the entry to re-load.
    pub fn go_back(&mut self) -> Option<&str> {
        let index = self.history_index?;
        if index == 0 {
            return None;
        }

        let next_index = index - 1;
        self.history_index = Some(next_index);
        self.history.get(next_index).map(String::as_str)
    }

    /// Steps forward in history, returning the entry to re-load.
    pub fn go_forward(&mut self) -> Option<&str> {
        let index = self.history_index?;
        let next_index = index + 1;
        if next_index >= self.history.len() {
            return None;
        }

        self.history_index = Some(next_index);
        self.history.get(next_index).map(String::as_str)
    }

    /// The true target of the current history entry, for reloads.
    pub fn current_entry(&self) -> Option<&str> {
        let index = self.history_index?;
        self.history.get(index).map(String::as_str)
    }
}

/// Next step after a load-finished notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadCheck {
    /// The load itself failed; replace the content with an error document.
    ShowError(ErrorPage),
    /// The load succeeded; issue the one-shot title probe.
    ProbeTitle,
}

/// Classifies a load-finished notification.
pub fn assess_load(success: bool) -> LoadCheck {
    if success {
        LoadCheck::ProbeTitle
    } else {
        LoadCheck::ShowError(ErrorPage::LoadFailed)
    }
}

/// The hosting layer renders pages titled with "404" for missing resources;
/// a non-empty title containing that token is treated as not-found. One-shot,
/// no retry; a legitimate page whose title contains "404" also trips it.
pub fn assess_title(title: &str) -> Option<ErrorPage> {
    if !title.is_empty() && title.contains("404") {
        Some(ErrorPage::NotFound)
    } else {
        None
    }
}
