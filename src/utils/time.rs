//! Timestamp helpers shared by store writes and generated documents.

use chrono::{Local, NaiveDateTime};

/// Current local wall-clock time, without offset.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// ISO-8601 rendering with microsecond precision (`2026-10-19T09:15:00.000000`).
pub fn iso(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
