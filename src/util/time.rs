use chrono::{DateTime, NaiveDate, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// The calendar date (UTC) of the given moment. Date-only properties are
/// compared against this.
pub fn date_of(time: &DateTime<Utc>) -> NaiveDate {
    time.naive_utc().date()
}

pub fn today() -> NaiveDate {
    date_of(&now())
}
