//! Projects are CAPEX projects that asset acquisitions are attributed to.
//!
//! Note that changing a project's period does *not* go back and re-validate
//! the acquire dates of financial details already linked to it. Those get
//! checked again the next time they change.

use chrono::{DateTime, NaiveDate, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        lib::entity::Deletable,
        project::{ActivePeriod, Project, ProjectID},
        user::User,
    },
};

/// Create a new project
pub fn create<T: Into<String>>(caller: &User, id: ProjectID, name: T, desc: T, start_date: NaiveDate, finish_date: Option<NaiveDate>, active: bool, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::ProjectCreate)?;
    let period = ActivePeriod::new(start_date, finish_date)?;
    let model = Project::builder()
        .id(id)
        .name(name)
        .desc(desc)
        .start_date(period.start().clone())
        .finish_date(period.finish().clone())
        .active(active)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    model.check_required()?;
    Ok(Modifications::new_single(Op::Create, model))
}

/// Update a project. Passing `Some(None)` as the `finish_date` makes the
/// project open-ended.
pub fn update(caller: &User, mut subject: Project, name: Option<String>, desc: Option<String>, start_date: Option<NaiveDate>, finish_date: Option<Option<NaiveDate>>, active: Option<bool>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::ProjectUpdate)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("project".into()))?;
    }
    if let Some(name) = name {
        subject.set_name(name);
    }
    if let Some(desc) = desc {
        subject.set_desc(desc);
    }
    if start_date.is_some() || finish_date.is_some() {
        let start = start_date.unwrap_or_else(|| subject.start_date().clone());
        let finish = finish_date.unwrap_or_else(|| subject.finish_date().clone());
        subject.set_period(start, finish)?;
    }
    if let Some(active) = active {
        subject.set_active(active);
    }
    subject.check_required()?;
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Delete a project
pub fn delete(caller: &User, mut subject: Project, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::ProjectDelete)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("project".into()))?;
    }
    subject.set_deleted(Some(now.clone()));
    Ok(Modifications::new_single(Op::Delete, subject))
}
