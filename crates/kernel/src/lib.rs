//! Shared settings for the PIDPI workspace.

pub mod settings;

pub use settings::{Environment, LogFormat, Settings, TelemetrySettings};
