//! UI state controller - loading indicator, error area and result panel
//!
//! State is published on a `watch` channel so the page can redraw whenever it
//! changes. The loading indicator is released through [`LoadingGuard`] on every
//! exit path of a route calculation.

use std::fmt;

use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

/// Distance/duration texts shown in the result panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultPanel {
    pub distance_text: String,
    pub duration_text: String,
}

/// Visible state of the page's status elements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UiState {
    /// Busy indicator visible
    pub loading: bool,
    /// Text of the error-message area; `None` when empty
    pub error_message: Option<String>,
    /// Result panel contents; `None` while the panel is hidden
    pub result: Option<ResultPanel>,
    #[serde(skip)]
    in_flight: usize,
}

/// Owner of the page's status elements
pub struct UiStateController {
    state: watch::Sender<UiState>,
}

impl fmt::Debug for UiStateController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiStateController")
            .field("state", &*self.state.borrow())
            .finish()
    }
}

impl Default for UiStateController {
    fn default() -> Self {
        Self::new()
    }
}

impl UiStateController {
    /// Create a controller with everything hidden
    #[must_use]
    pub fn new() -> Self {
        let (state, _) = watch::channel(UiState::default());
        Self { state }
    }

    /// Show the busy indicator, clear the error text and hide the result panel
    ///
    /// The indicator stays visible until the returned guard is dropped. With
    /// overlapping calculations it is hidden once the last guard is released.
    pub fn begin_loading(&self) -> LoadingGuard<'_> {
        self.state.send_modify(|s| {
            s.in_flight += 1;
            s.loading = true;
            s.error_message = None;
            s.result = None;
        });
        debug!("Loading indicator shown");
        LoadingGuard { controller: self }
    }

    /// Release one loading hold, hiding the indicator when none remain
    pub fn end_loading(&self) {
        self.state.send_modify(|s| {
            s.in_flight = s.in_flight.saturating_sub(1);
            s.loading = s.in_flight > 0;
        });
        debug!("Loading indicator released");
    }

    /// Write `message` into the error area and hide the result panel
    pub fn show_error(&self, message: impl Into<String>) {
        let message = message.into();
        self.state.send_modify(|s| {
            s.error_message = Some(message);
            s.result = None;
        });
    }

    /// Fill and show the result panel
    pub fn show_result(&self, panel: ResultPanel) {
        self.state.send_modify(|s| s.result = Some(panel));
    }

    /// Current state
    #[must_use]
    pub fn snapshot(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }
}

/// Scoped hold on the loading indicator
#[must_use = "the loading indicator is hidden as soon as the guard is dropped"]
pub struct LoadingGuard<'a> {
    controller: &'a UiStateController,
}

impl fmt::Debug for LoadingGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadingGuard").finish_non_exhaustive()
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.controller.end_loading();
    }
}
