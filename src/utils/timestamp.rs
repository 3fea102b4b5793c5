use chrono::{Local, NaiveDateTime, Timelike};

const ISO_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
const ISO_MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Local wall-clock time in ISO form, no offset.
pub fn now_iso() -> String {
    format_naive_iso(&Local::now().naive_local())
}

/// `YYYY-MM-DDTHH:MM:SS.ffffff`, dropping the fraction when it is zero microseconds.
pub fn format_naive_iso(at: &NaiveDateTime) -> String {
    if at.nanosecond() / 1_000 == 0 {
        at.format(ISO_SECONDS).to_string()
    } else {
        at.format(ISO_MICROS).to_string()
    }
}
