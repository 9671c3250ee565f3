use chrono::{DateTime, Utc};

/// Primary key type used across all database entities.
pub type DbId = i64;

/// UTC timestamp type used across all database entities.
pub type Timestamp = DateTime<Utc>;
