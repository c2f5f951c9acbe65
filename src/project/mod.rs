mod initializer;
mod record;

pub use initializer::initialize_project;
pub use record::{ProjectStatus, StatusRecord, Timestamp, PROJECT_VERSION};
