//! Platform-agnostic building blocks shared by the report views.

pub mod config;
pub mod format;
pub mod palette;
pub mod storage;
pub mod theme;
pub mod timing;
