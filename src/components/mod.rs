// ABOUTME: UI components for the demo host: alert stack overlay and main layout

pub mod alert_stack;
pub mod layout;

pub use alert_stack::AlertStackComponent;
pub use layout::LayoutComponent;
