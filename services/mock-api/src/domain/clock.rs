use chrono::{DateTime, Utc};

/// Source of "now" for server-assigned timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
