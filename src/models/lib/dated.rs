//! Records that take effect from a start date (ownerships, operation
//! assignments). Nothing is ever edited in place: a handover is a new record,
//! and the one in effect is the latest that has already started.

use chrono::{DateTime, NaiveDate, Utc};
use crate::models::lib::entity::Deletable;

/// A record that takes effect on a given date.
pub trait StartDated: Deletable {
    /// The first day this record is in effect
    fn starts_on(&self) -> &NaiveDate;

    /// The last day this record is in effect, if it ever stops
    fn ends_on(&self) -> Option<&NaiveDate> {
        None
    }

    /// When the record was entered, used to break ties on the same start
    fn entered(&self) -> &DateTime<Utc>;

    /// Whether this record is in effect on `day`
    fn in_effect(&self, day: &NaiveDate) -> bool {
        !self.is_deleted()
            && self.starts_on() <= day
            && self.ends_on().map(|end| day <= end).unwrap_or(true)
    }
}

/// Of the given records, find the one in effect on `day`: the latest to have
/// started. If two start on the same day, the one entered last wins.
pub fn in_effect_on<'a, T, I>(records: I, day: &NaiveDate) -> Option<&'a T>
    where T: StartDated + 'a,
          I: IntoIterator<Item = &'a T>,
{
    records.into_iter()
        .filter(|r| r.in_effect(day))
        .max_by(|a, b| {
            a.starts_on().cmp(b.starts_on())
                .then_with(|| a.entered().cmp(b.entered()))
        })
}
