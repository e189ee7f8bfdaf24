//! Asset types have owners too: the role, business unit or organisation
//! responsible for a whole type of asset (say, every baggage tug) as opposed
//! to any single asset. Like asset ownership, it changes hands by recording a
//! new ownership with a later start date.

use chrono::{DateTime, NaiveDate, Utc};
use crate::models::{
    asset_ownership::Owner,
    asset_type::AssetTypeID,
    lib::{
        dated::{self, StartDated},
        meta::{EntityMeta, PropertyMeta},
    },
};

pub static META: EntityMeta = EntityMeta {
    title: "Asset Type Ownership",
    desc: "Who is responsible for a type of asset from a given date on",
    key_title: "Asset Type Ownership",
    properties: &[
        PropertyMeta::new("asset_type_id", "Asset Type", "The owned asset type").required(),
        PropertyMeta::new("owner", "Owner", "The owning role, business unit or organisation").required(),
        PropertyMeta::new("start_date", "Ownership Start Date", "When the ownership starts").required().date_only(),
    ],
};

entity_model! {
    /// The `AssetTypeOwnership` model.
    pub struct AssetTypeOwnership {
        id: <<AssetTypeOwnershipID>>,
        asset_type_id: AssetTypeID,
        owner: Owner,
        start_date: NaiveDate,
    }
    AssetTypeOwnershipBuilder
}

impl StartDated for AssetTypeOwnership {
    fn starts_on(&self) -> &NaiveDate {
        self.start_date()
    }

    fn entered(&self) -> &DateTime<Utc> {
        self.created()
    }
}

/// The ownership of `asset_type_id` in effect on `day`.
pub fn current_type_ownership<'a, I>(ownerships: I, asset_type_id: &AssetTypeID, day: &NaiveDate) -> Option<&'a AssetTypeOwnership>
    where I: IntoIterator<Item = &'a AssetTypeOwnership>,
{
    dated::in_effect_on(ownerships.into_iter().filter(|o| o.asset_type_id() == asset_type_id), day)
}
