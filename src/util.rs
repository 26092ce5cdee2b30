use chrono::{DateTime, Utc};

/// The conventional 7-character short form of a commit id.
pub fn short_id(id: &str) -> &str {
    if id.len() > 7 {
        &id[..7]
    } else {
        id
    }
}

pub fn display_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}
