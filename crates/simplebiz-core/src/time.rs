use chrono::{DateTime, NaiveDate, Utc};

/// Current UTC calendar date. Publish and modified dates are day-granular.
#[must_use]
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Current UTC instant, for timestamp-granular modified fields.
#[must_use]
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}
