//! Shared UI crate for the retail insights report. Chart data, activation,
//! rendering and the report view live here; the `web` and `desktop` crates
//! only launch it.

pub mod charts;
pub mod components;
pub mod core;
pub mod i18n;
pub mod views;

pub use views::Report;
