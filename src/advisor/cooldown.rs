use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::ship::ShipCooldown;

/// Readiness buckets for a ship's action cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CooldownBucket {
    Ready,
    Short,
    Moderate,
    Long,
}

#[derive(Debug, Clone, Serialize)]
pub struct CooldownReport {
    pub bucket: CooldownBucket,
    pub remaining_seconds: i32,
    /// Human time display, e.g. "2m 5s" or "45s".
    pub display: String,
    pub message: &'static str,
}

/// Classify a cooldown snapshot. remaining_seconds is authoritative:
/// anything <= 0 is ready no matter what total_seconds or expiration say.
pub fn classify_cooldown(cooldown: &ShipCooldown) -> CooldownReport {
    let remaining = cooldown.remaining_seconds;

    let (bucket, message) = if remaining <= 0 {
        (CooldownBucket::Ready, "Ship is ready for actions")
    } else if remaining <= 60 {
        (CooldownBucket::Short, "Short cooldown active - almost ready")
    } else if remaining <= 300 {
        (CooldownBucket::Moderate, "Moderate cooldown active")
    } else {
        (CooldownBucket::Long, "Long cooldown active - consider using other ships")
    };

    CooldownReport {
        bucket,
        remaining_seconds: remaining,
        display: format_remaining(remaining),
        message,
    }
}

/// Render seconds as "Mm Ss" when at least a minute remains, else "Ss".
pub fn format_remaining(seconds: i32) -> String {
    let seconds = seconds.max(0);
    let minutes = seconds / 60;
    let secs = seconds % 60;
    if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Seconds until an absolute expiration timestamp, measured against an
/// explicitly supplied "now". An expiration already in the past is 0 (ready).
/// A timestamp that does not parse is an error, never silently "ready".
pub fn time_until_ready(
    expiration: &str,
    now: DateTime<Utc>,
) -> Result<i64, chrono::ParseError> {
    let expires = DateTime::parse_from_rfc3339(expiration)?.with_timezone(&Utc);
    Ok((expires - now).num_seconds().max(0))
}
