//! A project is a capital (CAPEX) project. Assets acquired for a project have
//! their financial details linked to it, and the project's active period
//! bounds when those acquisitions may have happened.

use chrono::NaiveDate;
use crate::{
    error::{Error, Result},
    models::lib::meta::{EntityMeta, PropertyMeta},
};
#[cfg(feature = "with_serde")]
use serde::{Serialize, Deserialize};

pub static META: EntityMeta = EntityMeta {
    title: "Project",
    desc: "A capital project that assets can be acquired for",
    key_title: "Project",
    properties: &[
        PropertyMeta::new("name", "Name", "The project's name").required(),
        PropertyMeta::new("desc", "Description", "What the project is about").required(),
        PropertyMeta::new("start_date", "Start Date", "When the project starts").required().date_only(),
        PropertyMeta::new("finish_date", "Finish Date", "When the project finishes, if ever").date_only(),
    ],
};

/// The inclusive date interval during which acquisitions may be attributed to
/// a project. A period without a finish is open-ended.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with_serde", serde(try_from = "PeriodFields"))]
pub struct ActivePeriod {
    start: NaiveDate,
    finish: Option<NaiveDate>,
}

/// What an [ActivePeriod] looks like on the wire, before it's been checked.
#[cfg(feature = "with_serde")]
#[derive(Deserialize)]
struct PeriodFields {
    start: NaiveDate,
    #[serde(default)]
    finish: Option<NaiveDate>,
}

#[cfg(feature = "with_serde")]
impl std::convert::TryFrom<PeriodFields> for ActivePeriod {
    type Error = Error;

    fn try_from(fields: PeriodFields) -> Result<Self> {
        ActivePeriod::new(fields.start, fields.finish)
    }
}

impl ActivePeriod {
    /// Create a period, making sure it doesn't end before it starts.
    pub fn new(start: NaiveDate, finish: Option<NaiveDate>) -> Result<Self> {
        if let Some(finish) = finish {
            if finish < start {
                Err(Error::InvalidProjectPeriod { start, finish })?;
            }
        }
        Ok(Self { start, finish })
    }

    pub fn start(&self) -> &NaiveDate {
        &self.start
    }

    pub fn finish(&self) -> &Option<NaiveDate> {
        &self.finish
    }

    /// Whether the given date falls within this period (inclusive on both
    /// ends).
    pub fn contains(&self, date: &NaiveDate) -> bool {
        if date < &self.start {
            return false;
        }
        match self.finish {
            Some(ref finish) => date <= finish,
            None => true,
        }
    }
}

entity_model! {
    /// The `Project` model.
    pub struct Project {
        id: <<ProjectID>>,
        /// The project's name
        name: String,
        /// What this project is about
        desc: String,
        /// The first day of the project
        start_date: NaiveDate,
        /// The last day of the project. `None` means it runs indefinitely.
        #[builder(default)]
        finish_date: Option<NaiveDate>,
    }
    ProjectBuilder
}

impl Project {
    /// Make sure the name and description are filled in.
    pub fn check_required(&self) -> Result<()> {
        META.check_required(|name| {
            match name {
                "name" => !self.name().trim().is_empty(),
                "desc" => !self.desc().trim().is_empty(),
                _ => true,
            }
        })
    }

    /// Grab this project's active period.
    pub fn period(&self) -> ActivePeriod {
        ActivePeriod {
            start: self.start_date.clone(),
            finish: self.finish_date.clone(),
        }
    }

    /// Set the start/finish dates together, validating the resulting period.
    pub(crate) fn set_period(&mut self, start: NaiveDate, finish: Option<NaiveDate>) -> Result<()> {
        let period = ActivePeriod::new(start, finish)?;
        self.set_start_date(period.start);
        self.set_finish_date(period.finish);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{self, test::*};

    #[test]
    fn open_period() {
        let period = ActivePeriod::new(date("2019-12-08"), None).unwrap();
        assert!(!period.contains(&date("2019-12-07")));
        assert!(period.contains(&date("2019-12-08")));
        assert!(period.contains(&date("2019-12-10")));
        assert!(period.contains(&date("2119-12-10")));
    }

    #[test]
    fn closed_period() {
        let period = ActivePeriod::new(date("2019-12-08"), Some(date("2020-12-08"))).unwrap();
        assert!(!period.contains(&date("2019-10-10")));
        assert!(period.contains(&date("2019-12-08")));
        assert!(period.contains(&date("2020-06-01")));
        assert!(period.contains(&date("2020-12-08")));
        assert!(!period.contains(&date("2020-12-10")));

        // a single-day project is fine
        let period = ActivePeriod::new(date("2019-12-08"), Some(date("2019-12-08"))).unwrap();
        assert!(period.contains(&date("2019-12-08")));
        assert!(!period.contains(&date("2019-12-09")));
    }

    #[test]
    fn backwards_period() {
        let res = ActivePeriod::new(date("2019-12-08"), Some(date("2019-12-07")));
        assert_eq!(res, Err(Error::InvalidProjectPeriod { start: date("2019-12-08"), finish: date("2019-12-07") }));
    }

    #[cfg(feature = "with_serde")]
    #[test]
    fn deserialized_periods_are_checked() {
        let period: ActivePeriod = serde_json::from_str(r#"{"start":"2019-12-08","finish":"2020-12-08"}"#).unwrap();
        assert_eq!(period, ActivePeriod::new(date("2019-12-08"), Some(date("2020-12-08"))).unwrap());
        let period: ActivePeriod = serde_json::from_str(r#"{"start":"2019-12-08"}"#).unwrap();
        assert_eq!(period.finish(), &None);

        let res = serde_json::from_str::<ActivePeriod>(r#"{"start":"2019-12-08","finish":"2019-12-07"}"#);
        let err = res.unwrap_err().to_string();
        assert!(err.contains("before"), "{}", err);
    }

    #[test]
    fn set_period() {
        let now = util::time::now();
        let mut project = make_project(&ProjectID::create(), "dig a hole", date("2019-12-08"), None, &now);
        assert_eq!(project.period(), ActivePeriod::new(date("2019-12-08"), None).unwrap());

        project.set_period(date("2020-01-01"), Some(date("2020-02-01"))).unwrap();
        assert_eq!(project.start_date(), &date("2020-01-01"));
        assert_eq!(project.finish_date(), &Some(date("2020-02-01")));

        let res = project.set_period(date("2020-01-01"), Some(date("2019-02-01")));
        assert!(res.is_err());
        assert_eq!(project.start_date(), &date("2020-01-01"));
        assert_eq!(project.finish_date(), &Some(date("2020-02-01")));
    }
}
