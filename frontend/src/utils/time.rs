use chrono::{Local, NaiveDate, NaiveTime};

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Browser time inputs emit "HH:MM" or "HH:MM:SS" depending on the step
/// attribute; the backend expects "HH:MM:SS".
pub fn normalize_time_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let parsed = NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .ok()?;
    Some(parsed.format("%H:%M:%S").to_string())
}

/// Trims seconds back off for display, "18:00:00" -> "18:00".
pub fn display_time(raw: &str) -> String {
    match NaiveTime::parse_from_str(raw.trim(), "%H:%M:%S") {
        Ok(parsed) => parsed.format("%H:%M").to_string(),
        Err(_) => raw.trim().to_string(),
    }
}
