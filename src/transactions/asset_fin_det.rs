//! Editing an asset's financial details. This is where the project/acquire
//! date rule gets enforced: every change runs through the property hooks on
//! [AssetFinDet], which need a [Lookup] to resolve the linked project.
//!
//! Financial details are normally created by [asset::create]. Creating them
//! separately is only needed for assets imported without them, and is refused
//! if the asset already has a set.
//!
//! [AssetFinDet]: ../../models/asset_fin_det/struct.AssetFinDet.html
//! [Lookup]: ../../models/lib/lookup/trait.Lookup.html
//! [asset::create]: ../asset/fn.create.html

use chrono::{DateTime, NaiveDate, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        asset::Asset,
        asset_fin_det::{AssetFinDet, AssetFinDetID},
        lib::{
            entity::Deletable,
            lookup::Lookup,
        },
        project::ProjectID,
        user::User,
    },
    money::Money,
};
use tracing::debug;

/// Create financial details for an asset that doesn't have any yet
pub fn create(caller: &User, lookup: &dyn Lookup, id: AssetFinDetID, asset: &Asset, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AssetFinDetCreate)?;
    if asset.is_deleted() {
        Err(Error::ObjectIsDeleted("asset".into()))?;
    }
    if lookup.fin_det_exists(asset.id()) {
        Err(Error::DuplicateKey("asset financial details".into(), asset.id().to_string()))?;
    }
    let model = AssetFinDet::builder()
        .id(id)
        .asset_id(asset.id().clone())
        .active(true)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    Ok(Modifications::new_single(Op::Create, model))
}

/// Update an asset's financial details.
///
/// Each of `init_cost`, `acquire_date` and `project_id` is left alone when
/// `None` and set (possibly to empty) when `Some`. When both the acquire date
/// and a *different* project are given they're applied as a unit: the old
/// project is unlinked first so the new date isn't checked against it, then
/// the date is set, then the new project is linked and the pair is validated.
/// Re-sending the project that's already linked only changes the date.
///
/// If nothing actually changes, no modifications are returned.
pub fn update(caller: &User, lookup: &dyn Lookup, mut subject: AssetFinDet, init_cost: Option<Option<Money>>, acquire_date: Option<Option<NaiveDate>>, project_id: Option<Option<ProjectID>>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AssetFinDetUpdate)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("asset financial details".into()))?;
    }
    let original = subject.clone();
    if let Some(init_cost) = init_cost {
        subject.change_init_cost(init_cost, lookup)?;
    }
    let project_id = project_id.filter(|id| id != subject.project_id());
    match (acquire_date, project_id) {
        (Some(acquire_date), Some(project_id)) => {
            subject.change_project(None, lookup)?;
            subject.change_acquire_date(acquire_date, lookup)?;
            subject.change_project(project_id, lookup)?;
        }
        (Some(acquire_date), None) => {
            subject.change_acquire_date(acquire_date, lookup)?;
        }
        (None, Some(project_id)) => {
            subject.change_project(project_id, lookup)?;
        }
        (None, None) => {}
    }
    if subject == original {
        debug!("asset_fin_det::update() -- nothing changed on {}", subject.id());
        return Ok(Modifications::new());
    }
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}
