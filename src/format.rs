use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// Age as kubectl prints it (apimachinery `HumanDuration`): "45s", "5m30s",
/// "12m", "5h20m", "20h", "3d4h", "30d", "2y70d", "9y".
/// Timestamps in the future (clock skew) render as "0s".
pub fn format_age(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - created).num_seconds().max(0);
    if secs < 60 * 2 {
        return format!("{secs}s");
    }

    let minutes = secs / 60;
    if minutes < 10 {
        return with_remainder(minutes, "m", secs % 60, "s");
    }
    if minutes < 60 * 3 {
        return format!("{minutes}m");
    }

    let hours = minutes / 60;
    if hours < 8 {
        return with_remainder(hours, "h", minutes % 60, "m");
    }
    if hours < 48 {
        return format!("{hours}h");
    }
    if hours < 24 * 8 {
        return with_remainder(hours / 24, "d", hours % 24, "h");
    }
    if hours < 24 * 365 * 2 {
        return format!("{}d", hours / 24);
    }
    if hours < 24 * 365 * 8 {
        let days = hours / 24;
        return with_remainder(days / 365, "y", days % 365, "d");
    }
    format!("{}y", hours / 24 / 365)
}

fn with_remainder(major: i64, major_unit: &str, minor: i64, minor_unit: &str) -> String {
    if minor == 0 {
        format!("{major}{major_unit}")
    } else {
        format!("{major}{major_unit}{minor}{minor_unit}")
    }
}

pub fn short_access_mode(mode: &str) -> &str {
    match mode {
        "ReadWriteOnce" => "RWO",
        "ReadOnlyMany" => "ROX",
        "ReadWriteMany" => "RWX",
        "ReadWriteOncePod" => "RWOP",
        other => other,
    }
}

pub fn short_access_modes(modes: &[String]) -> String {
    modes
        .iter()
        .map(|m| short_access_mode(m))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn storage_capacity(capacity: &BTreeMap<String, String>) -> String {
    capacity.get("storage").cloned().unwrap_or_default()
}
