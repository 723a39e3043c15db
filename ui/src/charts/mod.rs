//! Lazily activated report charts.
//!
//! Containers on the page are watched by the [`visibility`] observer; each
//! entry is dispatched through the [`registry`], which runs the chart's
//! [`catalog`] initializer at most once and mounts the resulting
//! [`config::ChartConfig`] on a [`host::ChartHost`].

pub mod catalog;
pub mod config;
pub mod host;
pub mod id;
pub mod registry;
pub mod render;
pub mod visibility;

pub use host::{Activation, ChartBoard, ChartHost};
pub use id::{ChartId, UnknownChart};
pub use registry::{ActivationRegistry, Dispatch};
