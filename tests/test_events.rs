// ABOUTME: Unit tests for event handling to ensure keyboard inputs map to correct demo actions

use alert_box::app::{AppEvent, AppState, EventHandler};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn create_key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn create_key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

#[test]
fn test_quit_key_events() {
    let mut state = AppState::default();

    let quit_event1 = EventHandler::handle_key_event(create_key_event(KeyCode::Char('q')), &mut state);
    assert_eq!(quit_event1, Some(AppEvent::Quit));

    let quit_event2 = EventHandler::handle_key_event(create_key_event(KeyCode::Esc), &mut state);
    assert_eq!(quit_event2, Some(AppEvent::Quit));

    let quit_event3 = EventHandler::handle_key_event(
        create_key_event_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL),
        &mut state,
    );
    assert_eq!(quit_event3, Some(AppEvent::Quit));
}

#[test]
fn test_demo_trigger_key_events() {
    let mut state = AppState::default();

    let alert = EventHandler::handle_key_event(create_key_event(KeyCode::Char('a')), &mut state);
    assert_eq!(alert, Some(AppEvent::ShowAlert));

    let success = EventHandler::handle_key_event(create_key_event(KeyCode::Char('s')), &mut state);
    assert_eq!(success, Some(AppEvent::ShowSuccess));

    let notify = EventHandler::handle_key_event(create_key_event(KeyCode::Char('n')), &mut state);
    assert_eq!(notify, Some(AppEvent::ShowNotification));

    let timed = EventHandler::handle_key_event(create_key_event(KeyCode::Char('t')), &mut state);
    assert_eq!(timed, Some(AppEvent::ShowTimedNotification));

    let styled = EventHandler::handle_key_event(create_key_event(KeyCode::Char('c')), &mut state);
    assert_eq!(styled, Some(AppEvent::ShowStyledNotification));

    let close = EventHandler::handle_key_event(create_key_event(KeyCode::Char('x')), &mut state);
    assert_eq!(close, Some(AppEvent::CloseNewest));
}

#[test]
fn test_unknown_key_returns_none() {
    let mut state = AppState::default();

    let unknown_event = EventHandler::handle_key_event(create_key_event(KeyCode::Char('z')), &mut state);
    assert!(unknown_event.is_none());

    let unknown_f_key = EventHandler::handle_key_event(create_key_event(KeyCode::F(1)), &mut state);
    assert!(unknown_f_key.is_none());
}

#[test]
fn test_process_quit_event() {
    let mut state = AppState::default();

    assert!(!state.should_quit);

    if let Some(event) = EventHandler::handle_key_event(create_key_event(KeyCode::Char('q')), &mut state) {
        EventHandler::process_event(event, &mut state);
    }

    assert!(state.should_quit);
}

#[test]
fn test_process_demo_events_render_the_right_categories() {
    let mut state = AppState::default();

    EventHandler::process_event(AppEvent::ShowAlert, &mut state);
    EventHandler::process_event(AppEvent::ShowSuccess, &mut state);
    EventHandler::process_event(AppEvent::ShowNotification, &mut state);

    // Newest first: notify, success, error.
    let classes: Vec<&str> = state
        .alerts
        .visible()
        .iter()
        .map(|a| a.classes[1].as_str())
        .collect();
    assert_eq!(
        classes,
        vec![
            "alert-container__notify",
            "alert-container__success",
            "alert-container__error"
        ]
    );
}

#[test]
fn test_process_styled_demo_carries_custom_class() {
    let mut state = AppState::default();

    EventHandler::process_event(AppEvent::ShowStyledNotification, &mut state);

    let alert = &state.alerts.visible()[0];
    assert!(alert.classes.contains(&"foo".to_string()));
}

#[test]
fn test_close_newest_removes_top_of_stack() {
    let mut state = AppState::default();

    EventHandler::process_event(AppEvent::ShowAlert, &mut state);
    EventHandler::process_event(AppEvent::ShowSuccess, &mut state);
    assert_eq!(state.alerts.visible().len(), 2);

    EventHandler::process_event(AppEvent::CloseNewest, &mut state);

    let alerts = state.alerts.visible();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].classes.contains(&"alert-container__error".to_string()));
}

#[test]
fn test_close_newest_on_empty_stack_is_noop() {
    let mut state = AppState::default();

    EventHandler::process_event(AppEvent::CloseNewest, &mut state);
    assert_eq!(state.alerts.visible().len(), 0);
}

#[test]
fn test_close_alert_event_removes_that_alert() {
    let mut state = AppState::default();

    EventHandler::process_event(AppEvent::ShowNotification, &mut state);
    let id = state.alerts.visible()[0].id.clone();

    EventHandler::process_event(AppEvent::CloseAlert(id), &mut state);
    assert_eq!(state.alerts.visible().len(), 0);
}

#[test]
fn test_close_alert_event_with_unknown_id_is_noop() {
    let mut state = AppState::default();

    EventHandler::process_event(AppEvent::ShowNotification, &mut state);
    EventHandler::process_event(AppEvent::CloseAlert("alert-deadbeef".to_string()), &mut state);

    assert_eq!(state.alerts.visible().len(), 1);
}
