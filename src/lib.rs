//! Library entry for Suraksha exposing the application modules for the binary
//! and integration tests.

pub mod app;
pub mod args;
pub mod assistant;
pub mod contacts;
pub mod events;
pub mod i18n;
pub mod location;
pub mod platform;
pub mod session;
pub mod state;
pub mod theme;
pub mod ui;
