//! Page surface that collects display state into an HTML document.

use maud::{Markup, PreEscaped, html};
use std::sync::{Mutex, MutexGuard};
use tracing::{info, warn};

use crate::components::alert::{Alert, AlertKind, alert};
use crate::components::layout::page_wrapper;
use crate::components::result::{actions, placeholder};
use crate::controller::Surface;
use crate::progress::ProgressSink;

#[derive(Debug, Default)]
struct PageState {
    loading: bool,
    progress: Option<String>,
    result: Option<String>,
    actions_visible: bool,
    alerts: Vec<Alert>,
}

/// Surface that records controller output and renders it as a page.
///
/// Progress and loading changes are logged as they happen; the result,
/// toolbar visibility and alerts are kept for [`PageSurface::page`].
#[derive(Debug, Default)]
pub struct PageSurface {
    state: Mutex<PageState>,
}

impl PageSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns true while a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    /// Last progress message shown.
    pub fn progress(&self) -> Option<String> {
        self.state().progress.clone()
    }

    /// Alerts shown so far, oldest first.
    pub fn alerts(&self) -> Vec<Alert> {
        self.state().alerts.clone()
    }

    /// Renders the current state as a complete HTML document.
    ///
    /// Alerts appear newest first above the toolbar and result area, as
    /// they are inserted at the top of the container.
    pub fn page(&self, title: &str) -> Markup {
        let state = self.state();
        let body = html! {
            @for shown in state.alerts.iter().rev() {
                (alert(shown))
            }
            @if state.actions_visible {
                (actions())
            }
            div id="generatedResult" {
                @match &state.result {
                    Some(result) => { (PreEscaped(result.as_str())) },
                    None => { (placeholder()) },
                }
            }
        };
        page_wrapper(title, body)
    }
}

impl ProgressSink for PageSurface {
    fn show_progress(&self, message: &str) {
        info!(progress = message, "generating");
        self.state().progress = Some(message.to_string());
    }
}

impl Surface for PageSurface {
    fn set_loading(&self, loading: bool) {
        let mut state = self.state();
        state.loading = loading;
        if !loading {
            state.progress = None;
        }
        drop(state);

        if loading {
            info!("Generating...");
        }
    }

    fn set_result(&self, html: &str) {
        self.state().result = Some(html.to_string());
    }

    fn set_actions_visible(&self, visible: bool) {
        self.state().actions_visible = visible;
    }

    fn show_alert(&self, shown: &Alert) {
        match shown.kind {
            AlertKind::Success => info!("{}", shown.message),
            AlertKind::Danger => warn!("{}", shown.message),
        }
        self.state().alerts.push(shown.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_shows_placeholder_initially() {
        // Arrange
        let surface = PageSurface::new();

        // Act
        let html = surface.page("Outline").into_string();

        // Assert
        assert!(html.contains("Your generated course outline will appear here"));
        assert!(!html.contains("copyResultBtn"), "Toolbar should be hidden");
    }

    #[test]
    fn test_page_shows_result_and_toolbar() {
        // Arrange
        let surface = PageSurface::new();
        surface.set_result("<div class=\"content-wrapper\"><h1>Plan</h1></div>");
        surface.set_actions_visible(true);

        // Act
        let html = surface.page("Outline").into_string();

        // Assert
        assert!(html.contains("<h1>Plan</h1>"), "{}", html);
        assert!(html.contains("copyResultBtn"));
        assert!(!html.contains("will appear here"));
    }

    #[test]
    fn test_alerts_newest_first() {
        // Arrange
        let surface = PageSurface::new();
        surface.show_alert(&Alert::danger("first"));
        surface.show_alert(&Alert::success("second"));

        // Act
        let html = surface.page("Outline").into_string();

        // Assert
        let first = html.find("first").expect("first alert rendered");
        let second = html.find("second").expect("second alert rendered");
        assert!(second < first, "Newest alert should come first");
        assert_eq!(surface.alerts().len(), 2);
    }

    #[test]
    fn test_loading_clears_progress() {
        // Arrange
        let surface = PageSurface::new();
        surface.set_loading(true);
        surface.show_progress("Analyzing requirements...");

        // Act
        let during = surface.progress();
        surface.set_loading(false);

        // Assert
        assert_eq!(during.as_deref(), Some("Analyzing requirements..."));
        assert!(surface.progress().is_none());
        assert!(!surface.is_loading());
    }
}
