// ABOUTME: Library crate for Alert-Box exposing the notification widget and demo host API

pub mod alerts;
pub mod app;
pub mod components;
