// ABOUTME: Demo application state owning the notification service

use crate::alerts::{AlertRequest, AlertService};

pub struct AppState {
    pub alerts: AlertService,
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            alerts: AlertService::default(),
            should_quit: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a demo state around a preconfigured service (custom theme or
    /// injected renderer).
    pub fn with_alerts(alerts: AlertService) -> Self {
        Self {
            alerts,
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Periodic housekeeping; fires due auto-dismiss closes.
    pub fn tick(&mut self) {
        self.alerts.tick();
    }

    // Demonstration call sites.

    pub fn show_alert_demo(&mut self) {
        self.alerts.alert(
            AlertRequest::new("Quote of the day.")
                .with_message("Your biggest enemy is better than your own untested code."),
        );
    }

    pub fn show_success_demo(&mut self) {
        self.alerts.success(AlertRequest::new("Quote of the day.").with_message(
            "A champion is described not by their wins but by how they can recover when they fall.",
        ));
    }

    pub fn show_notification_demo(&mut self) {
        self.alerts.notify(
            AlertRequest::new("Quote of the day.")
                .with_message("Your biggest enemy is better than your own untested code."),
        );
    }

    pub fn show_timed_notification_demo(&mut self) {
        self.alerts.notify(
            AlertRequest::new("Quote of the day.")
                .with_message("Your biggest enemy is better than your own untested code.")
                .with_stay(1500),
        );
    }

    pub fn show_styled_notification_demo(&mut self) {
        self.alerts.notify(
            AlertRequest::new("Quote of the day.")
                .with_message("Your biggest enemy is better than your own untested code.")
                .with_custom_class("foo"),
        );
    }

    /// Closes the notification at the top of the stack, if any.
    pub fn close_newest(&mut self) {
        if let Some(newest) = self.alerts.visible().first() {
            let id = newest.id.clone();
            self.alerts.close(&id);
        }
    }
}
