use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    // the data API emits `+00:00` offsets, but bare `timestamp` columns come without one
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f%#z"]
        .iter()
        .find_map(|fmt| {
            DateTime::parse_from_str(value, fmt)
                .map(|dt| dt.to_utc())
                .or_else(|_| NaiveDateTime::parse_from_str(value, fmt).map(|naive| naive.and_utc()))
                .ok()
        })
}

/// Renders a timestamp as the `M/D/YYYY` date and `H:MM:SS AM` time shown in
/// order lists. Anything unparseable renders as two empty strings.
pub fn display_date_time(value: Option<&str>, offset: &FixedOffset) -> (String, String) {
    match value.and_then(parse_datetime) {
        Some(dt) => {
            let local = dt.with_timezone(offset);
            (
                local.format("%-m/%-d/%Y").to_string(),
                local.format("%-I:%M:%S %p").to_string(),
            )
        }
        None => (String::new(), String::new()),
    }
}
