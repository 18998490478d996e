// ABOUTME: Notification widget core: facade, renderer, theme, and identifier source

pub mod id;
pub mod provider;
pub mod request;
pub mod service;
pub mod theme;

pub use id::{AlertIdSource, RandomIdSource, SequentialIdSource};
pub use provider::{AlertProvider, AlertsContainer, RenderedAlert, CONTAINER_CLASS, CONTAINER_ID};
pub use request::{AlertRequest, AlertStatus};
pub use service::AlertService;
pub use theme::{IconSet, Theme, ThemeError};
