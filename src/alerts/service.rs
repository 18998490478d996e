// ABOUTME: Intent-named notification facade over the injected renderer

use std::time::Instant;

use crate::alerts::provider::{AlertProvider, RenderedAlert};
use crate::alerts::request::{AlertRequest, AlertStatus};
use crate::alerts::theme::Theme;

/// Facade consumed by hosts to display notifications. Translates a semantic
/// intent into a renderer call with the matching theme icon and status tag.
/// The renderer is an injected dependency so tests and hosts can run isolated
/// notification surfaces.
pub struct AlertService {
    provider: AlertProvider,
    theme: Theme,
}

impl AlertService {
    pub fn new(provider: AlertProvider, theme: Theme) -> Self {
        Self { provider, theme }
    }

    /// Displays an error/warning notification.
    pub fn alert(&mut self, request: AlertRequest) {
        self.show(request, AlertStatus::Error);
    }

    /// Displays a success notification.
    pub fn success(&mut self, request: AlertRequest) {
        self.show(request, AlertStatus::Success);
    }

    /// Displays a general notification.
    pub fn notify(&mut self, request: AlertRequest) {
        self.show(request, AlertStatus::Notify);
    }

    fn show(&mut self, request: AlertRequest, status: AlertStatus) {
        self.provider.show_alert(
            request,
            self.theme.icon(status),
            &self.theme.images.close,
            status,
        );
    }

    /// Closes the notification with the given identifier; no-op when unknown.
    pub fn close(&mut self, id: &str) {
        self.provider.close_alert(id);
    }

    /// Fires due auto-dismiss closes; hosts call this from their tick loop.
    pub fn tick(&mut self) {
        self.provider.tick();
    }

    /// Deterministic variant of [`tick`](Self::tick) for tests and hosts that
    /// own their clock.
    pub fn run_due(&mut self, now: Instant) {
        self.provider.run_due(now);
    }

    /// The live notifications, newest first.
    pub fn visible(&self) -> &[RenderedAlert] {
        self.provider.visible()
    }

    pub fn provider(&self) -> &AlertProvider {
        &self.provider
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

impl Default for AlertService {
    fn default() -> Self {
        Self::new(AlertProvider::new(), Theme::default())
    }
}
