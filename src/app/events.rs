// ABOUTME: Event handling system for keyboard input and demo actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ShowAlert,
    ShowSuccess,
    ShowNotification,
    ShowTimedNotification,
    ShowStyledNotification,
    CloseNewest,
    /// Close the notification with this identifier (mouse click on its close
    /// icon; the main loop resolves the hit region to the identifier).
    CloseAlert(String),
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, _state: &mut AppState) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppEvent::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('a') => Some(AppEvent::ShowAlert),
            KeyCode::Char('s') => Some(AppEvent::ShowSuccess),
            KeyCode::Char('n') => Some(AppEvent::ShowNotification),
            KeyCode::Char('t') => Some(AppEvent::ShowTimedNotification),
            KeyCode::Char('c') => Some(AppEvent::ShowStyledNotification),
            KeyCode::Char('x') => Some(AppEvent::CloseNewest),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ShowAlert => state.show_alert_demo(),
            AppEvent::ShowSuccess => state.show_success_demo(),
            AppEvent::ShowNotification => state.show_notification_demo(),
            AppEvent::ShowTimedNotification => state.show_timed_notification_demo(),
            AppEvent::ShowStyledNotification => state.show_styled_notification_demo(),
            AppEvent::CloseNewest => state.close_newest(),
            AppEvent::CloseAlert(id) => state.alerts.close(&id),
        }
    }
}
