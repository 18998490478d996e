// ABOUTME: Notification renderer owning the container, node construction, and lifecycle

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::alerts::id::{AlertIdSource, RandomIdSource};
use crate::alerts::request::{AlertRequest, AlertStatus};

/// Reserved identifier of the single notification container.
pub const CONTAINER_ID: &str = "uc-alerts-container";
/// Marker class tagged onto the container when it is created.
pub const CONTAINER_CLASS: &str = "js-alerts-container";

const CLOSE_BUTTON_SUFFIX: &str = "-close-button";

/// A live, displayed notification node. Owned exclusively by the container;
/// scheduled closes and close affordances refer to it by identifier only, so
/// they stay harmless after the node is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAlert {
    pub id: String,
    pub close_button_id: String,
    pub status: AlertStatus,
    /// `alert-container`, the status modifier, and the optional custom class.
    pub classes: Vec<String>,
    pub icon: String,
    pub title: String,
    /// Always present; empty string when the request carried no message, so
    /// the layout stays consistent.
    pub message: String,
    pub close_icon: String,
}

/// The single holder of all live notifications, ordered newest first.
/// Created lazily on the first render and never destroyed.
#[derive(Debug, Clone)]
pub struct AlertsContainer {
    pub id: &'static str,
    pub class: &'static str,
    alerts: Vec<RenderedAlert>,
}

impl AlertsContainer {
    fn new() -> Self {
        Self {
            id: CONTAINER_ID,
            class: CONTAINER_CLASS,
            alerts: Vec::new(),
        }
    }

    pub fn alerts(&self) -> &[RenderedAlert] {
        &self.alerts
    }
}

/// A fire-and-forget auto-dismiss. Never cancelled by a manual close; the
/// idempotent close operation absorbs the late firing.
struct ScheduledClose {
    alert_id: String,
    due: Instant,
}

/// Renderer for the notification widget: container lifecycle, identifier
/// generation, node construction, insertion, and dismissal.
pub struct AlertProvider {
    ids: Box<dyn AlertIdSource>,
    container: Option<AlertsContainer>,
    scheduled: Vec<ScheduledClose>,
}

impl AlertProvider {
    pub fn new() -> Self {
        Self::with_id_source(Box::new(RandomIdSource))
    }

    pub fn with_id_source(ids: Box<dyn AlertIdSource>) -> Self {
        Self {
            ids,
            container: None,
            scheduled: Vec::new(),
        }
    }

    /// Renders one notification: acquires the container, draws a fresh
    /// identifier, builds the node, and prepends it so the newest
    /// notification always sits on top of the stack. If the request carries a
    /// positive `stay`, a close is scheduled for that identifier.
    pub fn show_alert(
        &mut self,
        request: AlertRequest,
        icon: &str,
        close_icon: &str,
        status: AlertStatus,
    ) {
        self.ensure_container();

        let alert_id = self.ids.next_id();
        let close_button_id = format!("{alert_id}{CLOSE_BUTTON_SUFFIX}");

        let mut classes = vec!["alert-container".to_string(), status.container_class()];
        if let Some(custom) = request.custom_class {
            classes.push(custom);
        }

        let alert = RenderedAlert {
            id: alert_id.clone(),
            close_button_id,
            status,
            classes,
            icon: icon.to_string(),
            title: request.title,
            message: request.message.unwrap_or_default(),
            close_icon: close_icon.to_string(),
        };

        // Newest first.
        self.ensure_container().alerts.insert(0, alert);
        debug!(id = %alert_id, status = status.as_str(), "rendered alert");

        if let Some(stay) = request.stay {
            if stay > 0 {
                self.scheduled.push(ScheduledClose {
                    alert_id: alert_id.clone(),
                    due: Instant::now() + Duration::from_millis(stay),
                });
                trace!(id = %alert_id, stay_ms = stay, "scheduled auto-dismiss");
            }
        }
    }

    /// Closes the notification with the given identifier. Idempotent: an
    /// unknown or already-removed identifier is a no-op. Both the close
    /// affordance and a pending auto-dismiss may invoke this for the same
    /// identifier.
    pub fn close_alert(&mut self, id: &str) {
        let Some(container) = self.container.as_mut() else {
            return;
        };
        match container.alerts.iter().position(|alert| alert.id == id) {
            Some(pos) => {
                container.alerts.remove(pos);
                debug!(%id, "closed alert");
            }
            None => trace!(%id, "close for unknown or already-removed alert"),
        }
    }

    /// Fires every scheduled close whose deadline has passed. Hosts call this
    /// from their periodic tick.
    pub fn tick(&mut self) {
        self.run_due(Instant::now());
    }

    /// Deadline sweep against an explicit clock reading. Each scheduled close
    /// fires exactly once; closes for notifications already removed manually
    /// are no-ops.
    pub fn run_due(&mut self, now: Instant) {
        let mut due = Vec::new();
        self.scheduled.retain(|scheduled| {
            if scheduled.due <= now {
                due.push(scheduled.alert_id.clone());
                false
            } else {
                true
            }
        });
        for id in due {
            self.close_alert(&id);
        }
    }

    /// The live notifications, newest first. Empty before the first render.
    pub fn visible(&self) -> &[RenderedAlert] {
        self.container
            .as_ref()
            .map(|container| container.alerts.as_slice())
            .unwrap_or(&[])
    }

    pub fn container(&self) -> Option<&AlertsContainer> {
        self.container.as_ref()
    }

    // Idempotent: creates the container on first use, reuses it afterwards.
    fn ensure_container(&mut self) -> &mut AlertsContainer {
        self.container.get_or_insert_with(|| {
            debug!(id = CONTAINER_ID, "created alerts container");
            AlertsContainer::new()
        })
    }
}

impl Default for AlertProvider {
    fn default() -> Self {
        Self::new()
    }
}
