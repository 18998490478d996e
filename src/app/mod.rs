// ABOUTME: Demo application state and event handling for the notification widget

pub mod events;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use state::AppState;
