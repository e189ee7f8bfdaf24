//! Financial details of an asset: what it cost, when it was acquired, and
//! which capital project paid for it.
//!
//! Every [Asset] owns exactly one `AssetFinDet`. The interesting part is the
//! rule tying the acquire date to the linked project:
//!
//! - the acquire date must fall within the project's active period whenever a
//!   project is linked ([acquire_date_within_project_period]);
//! - linking a project defaults an empty acquire date to the project's start,
//!   and re-validates an existing one ([define_acquire_date_from_project]).
//!
//! Both rules are plain functions hooked onto the properties they guard, see
//! [AssetFinDet::acquire_date_property] and [AssetFinDet::project_property].
//!
//! [Asset]: ../asset/struct.Asset.html
//! [acquire_date_within_project_period]: fn.acquire_date_within_project_period.html
//! [define_acquire_date_from_project]: fn.define_acquire_date_from_project.html
//! [AssetFinDet::acquire_date_property]: struct.AssetFinDet.html#method.acquire_date_property
//! [AssetFinDet::project_property]: struct.AssetFinDet.html#method.project_property

use chrono::NaiveDate;
use crate::{
    error::{Error, Result},
    models::{
        asset::AssetID,
        lib::{
            entity::Deletable,
            lookup::Lookup,
            meta::{EntityMeta, PropertyMeta},
            property::{Assigned, Property},
        },
        project::{ActivePeriod, Project, ProjectID},
    },
    money::Money,
};

/// The message carried by a rejected acquire date.
pub const ERR_OUTSIDE_PROJECT_PERIOD: &str = "date outside of project period";

const ASSET: PropertyMeta = PropertyMeta::new("asset_id", "Asset", "The asset owning these details").required().readonly();
const INIT_COST: PropertyMeta = PropertyMeta::new("init_cost", "Init Cost", "Initial asset cost");
const ACQUIRE_DATE: PropertyMeta = PropertyMeta::new("acquire_date", "Acquire Date", "The date when the asset was made or purchased").date_only();
const PROJECT: PropertyMeta = PropertyMeta::new("project_id", "Project", "CAPEX project for the acquisition of this asset");

pub static META: EntityMeta = EntityMeta {
    title: "Asset Financial Details",
    desc: "Financial details of an asset",
    key_title: "Asset",
    properties: &[ASSET, INIT_COST, ACQUIRE_DATE, PROJECT],
};

entity_model! {
    /// The `AssetFinDet` model.
    pub struct AssetFinDet {
        id: <<AssetFinDetID>>,
        /// The asset these details belong to. Unique: one set per asset.
        asset_id: AssetID,
        /// What the asset cost initially
        #[builder(default)]
        init_cost: Option<Money>,
        /// When the asset was made or purchased
        #[builder(default)]
        acquire_date: Option<NaiveDate>,
        /// The capital project this asset was acquired for
        #[builder(default)]
        project_id: Option<ProjectID>,
    }
    AssetFinDetBuilder
}

/// Resolve the project currently linked to `fin_det`, if any.
fn linked_project<'a>(fin_det: &AssetFinDet, lookup: &'a dyn Lookup) -> Result<Option<&'a Project>> {
    match fin_det.project_id() {
        Some(project_id) => {
            let project = lookup.project(project_id)
                .ok_or_else(|| Error::ObjectNotFound("project".into()))?;
            Ok(Some(project))
        }
        None => Ok(None),
    }
}

/// Check a date against an active period.
pub fn check_within_period(date: &NaiveDate, period: &ActivePeriod) -> Result<()> {
    if !period.contains(date) {
        Err(Error::AcquireDateOutsideProjectPeriod)?;
    }
    Ok(())
}

/// Before-change hook on `acquire_date`: a date must lie within the active
/// period of the linked project. Empty dates, and any date when no project is
/// linked, are fine.
pub fn acquire_date_within_project_period(fin_det: &AssetFinDet, acquire_date: &Option<NaiveDate>, lookup: &dyn Lookup) -> Result<()> {
    let date = match acquire_date {
        Some(date) => date,
        None => return Ok(()),
    };
    match linked_project(fin_det, lookup)? {
        Some(project) => check_within_period(date, &project.period()),
        None => Ok(()),
    }
}

/// Before-change hook on `project_id`: only existing, non-deleted projects can
/// be linked.
pub fn project_exists(_fin_det: &AssetFinDet, project_id: &Option<ProjectID>, lookup: &dyn Lookup) -> Result<()> {
    if let Some(project_id) = project_id {
        let project = lookup.project(project_id)
            .ok_or_else(|| Error::ObjectNotFound("project".into()))?;
        if project.is_deleted() {
            Err(Error::ObjectIsDeleted("project".into()))?;
        }
    }
    Ok(())
}

/// After-change hook on `project_id`.
///
/// An empty acquire date is defaulted to the new project's start date. An
/// existing acquire date is left alone but re-validated against the new
/// project, failing the project change if it now falls outside the period.
/// Unlinking the project leaves the acquire date as it is.
pub fn define_acquire_date_from_project(fin_det: &mut AssetFinDet, project_id: &Option<ProjectID>, lookup: &dyn Lookup) -> Result<()> {
    let project_id = match project_id {
        Some(project_id) => project_id,
        None => return Ok(()),
    };
    match fin_det.acquire_date().clone() {
        Some(date) => {
            acquire_date_within_project_period(fin_det, &Some(date), lookup)?;
        }
        None => {
            let start_date = lookup.project(project_id)
                .map(|p| p.start_date().clone())
                .ok_or_else(|| Error::ObjectNotFound("project".into()))?;
            AssetFinDet::acquire_date_property().assign(fin_det, Some(start_date), lookup)?;
        }
    }
    Ok(())
}

/// Before-change hook on `init_cost`.
pub fn init_cost_not_negative(_fin_det: &AssetFinDet, init_cost: &Option<Money>, _lookup: &dyn Lookup) -> Result<()> {
    if let Some(cost) = init_cost {
        cost.as_cost()?;
    }
    Ok(())
}

impl AssetFinDet {
    /// The `init_cost` property and its hooks.
    pub fn init_cost_property() -> Property<AssetFinDet, Option<Money>> {
        Property::new(&INIT_COST, AssetFinDet::init_cost, AssetFinDet::set_init_cost)
            .before_change(init_cost_not_negative)
    }

    /// The `acquire_date` property and its hooks.
    pub fn acquire_date_property() -> Property<AssetFinDet, Option<NaiveDate>> {
        Property::new(&ACQUIRE_DATE, AssetFinDet::acquire_date, AssetFinDet::set_acquire_date)
            .before_change(acquire_date_within_project_period)
    }

    /// The `project_id` property and its hooks.
    pub fn project_property() -> Property<AssetFinDet, Option<ProjectID>> {
        Property::new(&PROJECT, AssetFinDet::project_id, AssetFinDet::set_project_id)
            .before_change(project_exists)
            .after_change(define_acquire_date_from_project)
    }

    /// Change the initial cost.
    pub fn change_init_cost(&mut self, init_cost: Option<Money>, lookup: &dyn Lookup) -> Result<Assigned> {
        Self::init_cost_property().assign(self, init_cost, lookup)
    }

    /// Change the acquire date. Rejected (leaving the current date in place)
    /// if the date falls outside the linked project's active period.
    pub fn change_acquire_date(&mut self, acquire_date: Option<NaiveDate>, lookup: &dyn Lookup) -> Result<Assigned> {
        Self::acquire_date_property().assign(self, acquire_date, lookup)
    }

    /// Link (or unlink, with `None`) a project. Rejected (leaving the current
    /// project and date in place) if the existing acquire date falls outside
    /// the new project's active period.
    pub fn change_project(&mut self, project_id: Option<ProjectID>, lookup: &dyn Lookup) -> Result<Assigned> {
        Self::project_property().assign(self, project_id, lookup)
    }
}
