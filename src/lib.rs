//! PIDPI Library
//!
//! Project initialization and development interface. The only operation is
//! [`initialize_project`], which reports a fresh [`StatusRecord`] on stdout.

mod project;

pub use project::{initialize_project, ProjectStatus, StatusRecord, Timestamp, PROJECT_VERSION};
