use chrono::{Local, NaiveDateTime};

/// Calendar-date stamp used by the daily gate, `YYYY-MM-DD`.
pub fn date_stamp(now: &NaiveDateTime) -> String {
    now.format("%Y-%m-%d").to_string()
}

/// Local date-time stamp carried on history records.
pub fn time_stamp(now: &NaiveDateTime) -> String {
    now.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}
