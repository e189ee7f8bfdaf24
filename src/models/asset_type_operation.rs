//! Who operates a type of asset, and for how long. Unlike ownership, an
//! operation assignment can have an end date, after which nobody is on the
//! hook for it until a new assignment starts.

use chrono::{DateTime, NaiveDate, Utc};
use crate::{
    error::{Error, Result},
    models::{
        asset_ownership::Owner,
        asset_type::AssetTypeID,
        lib::{
            dated::{self, StartDated},
            meta::{EntityMeta, PropertyMeta},
        },
    },
};

pub static META: EntityMeta = EntityMeta {
    title: "Asset Type Operation",
    desc: "Who operates a type of asset over a period",
    key_title: "Asset Type Operation",
    properties: &[
        PropertyMeta::new("asset_type_id", "Asset Type", "The operated asset type").required(),
        PropertyMeta::new("operator", "Operator", "The operating role, business unit or organisation").required(),
        PropertyMeta::new("start_date", "Start Date", "When the operation starts").required().date_only(),
        PropertyMeta::new("end_date", "End Date", "When the operation ends, if ever").date_only(),
    ],
};

entity_model! {
    /// The `AssetTypeOperation` model.
    pub struct AssetTypeOperation {
        id: <<AssetTypeOperationID>>,
        asset_type_id: AssetTypeID,
        /// Who does the operating
        operator: Owner,
        start_date: NaiveDate,
        /// Last day of operation, inclusive
        #[builder(default)]
        end_date: Option<NaiveDate>,
    }
    AssetTypeOperationBuilder
}

impl AssetTypeOperation {
    /// Make sure the operation doesn't end before it starts.
    pub fn check_period(&self) -> Result<()> {
        if let Some(end) = self.end_date() {
            if end < self.start_date() {
                Err(Error::InvalidOperationPeriod { start: self.start_date().clone(), end: end.clone() })?;
            }
        }
        Ok(())
    }
}

impl StartDated for AssetTypeOperation {
    fn starts_on(&self) -> &NaiveDate {
        self.start_date()
    }

    fn ends_on(&self) -> Option<&NaiveDate> {
        self.end_date().as_ref()
    }

    fn entered(&self) -> &DateTime<Utc> {
        self.created()
    }
}

/// The operation of `asset_type_id` in effect on `day`. Operations that have
/// already ended don't count.
pub fn current_type_operation<'a, I>(operations: I, asset_type_id: &AssetTypeID, day: &NaiveDate) -> Option<&'a AssetTypeOperation>
    where I: IntoIterator<Item = &'a AssetTypeOperation>,
{
    dated::in_effect_on(operations.into_iter().filter(|o| o.asset_type_id() == asset_type_id), day)
}
