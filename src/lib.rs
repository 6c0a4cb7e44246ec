//! dashboard-rs: declarative dashboard rendering.
//!
//! This crate turns small literal datasets, chart descriptors, and a theme
//! into backend-agnostic visual scenes, and interleaves those scenes with
//! narrative text into an ordered page. Rendering is pure and synchronous;
//! every failure is a configuration mismatch surfaced before any primitive
//! is produced.

pub mod api;
pub mod core;
pub mod error;
pub mod page;
pub mod render;
pub mod telemetry;

pub use api::DashboardEngine;
pub use error::{ConfigurationError, DashResult};
