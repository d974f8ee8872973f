use chrono::{DateTime, Utc};

/// Wall-clock instant stored on game records. Serializes as RFC 3339.
pub type Timestamp = DateTime<Utc>;

/// Returns the current UTC time.
pub fn timestamp_now() -> Timestamp {
    Utc::now()
}
