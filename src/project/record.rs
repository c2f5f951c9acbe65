use std::fmt;

use serde::{Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Version reported in every status record.
pub const PROJECT_VERSION: &str = "1.0.0";

const ISO_8601_MILLIS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// Lifecycle status carried by a [`StatusRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UTC instant with millisecond precision.
///
/// Displays and serializes as ISO-8601, e.g. `2024-01-15T10:30:00.000Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    /// Reads the wall clock.
    pub fn now() -> Self {
        Self::from(OffsetDateTime::now_utc())
    }

    pub fn as_offset_date_time(&self) -> OffsetDateTime {
        self.0
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(instant: OffsetDateTime) -> Self {
        let utc = instant.to_offset(UtcOffset::UTC);
        // Ordering must agree with the printed form, which stops at milliseconds.
        let truncated = utc.replace_millisecond(utc.millisecond()).unwrap_or(utc);
        Self(truncated)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self.0.format(ISO_8601_MILLIS).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Snapshot returned by [`initialize_project`](crate::initialize_project).
///
/// Fields are fixed at construction; only the timestamp differs between two
/// records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRecord {
    status: ProjectStatus,
    timestamp: Timestamp,
    version: &'static str,
}

impl StatusRecord {
    /// Builds a record stamped with the current instant.
    pub(crate) fn capture() -> Self {
        Self::stamped(Timestamp::now())
    }

    pub(crate) fn stamped(timestamp: Timestamp) -> Self {
        Self {
            status: ProjectStatus::Active,
            timestamp,
            version: PROJECT_VERSION,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn version(&self) -> &'static str {
        self.version
    }
}
