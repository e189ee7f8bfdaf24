//! Asset ownership records who is responsible for an asset from a given date
//! on. An asset can change hands many times; its *current* ownership is the
//! most recent one that has already started.

use chrono::{DateTime, NaiveDate, Utc};
use crate::models::{
    asset::AssetID,
    lib::{
        dated::{self, StartDated},
        meta::{EntityMeta, PropertyMeta},
    },
};
#[cfg(feature = "with_serde")]
use serde::{Serialize, Deserialize};

pub static META: EntityMeta = EntityMeta {
    title: "Asset Ownership",
    desc: "Who is responsible for an asset from a given date on",
    key_title: "Asset Ownership",
    properties: &[
        PropertyMeta::new("asset_id", "Asset", "The owned asset").required(),
        PropertyMeta::new("owner", "Owner", "The owning role, business unit or organisation").required(),
        PropertyMeta::new("start_date", "Ownership Start Date", "When the ownership starts").required().date_only(),
    ],
};

/// An asset is owned by exactly one of a role, a business unit or an
/// organisation. These are maintained outside of the asset register so we only
/// carry their names here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub enum Owner {
    #[cfg_attr(feature = "with_serde", serde(rename = "role"))]
    Role(String),
    #[cfg_attr(feature = "with_serde", serde(rename = "bu"))]
    BusinessUnit(String),
    #[cfg_attr(feature = "with_serde", serde(rename = "org"))]
    Organisation(String),
}

impl Owner {
    /// The title of the kind of owner this is.
    pub fn title(&self) -> &'static str {
        match self {
            Owner::Role(_) => "Ownership Role",
            Owner::BusinessUnit(_) => "Ownership Business Unit",
            Owner::Organisation(_) => "Ownership Organisation",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Owner::Role(name) | Owner::BusinessUnit(name) | Owner::Organisation(name) => name.as_str(),
        }
    }
}

entity_model! {
    /// The `AssetOwnership` model.
    pub struct AssetOwnership {
        id: <<AssetOwnershipID>>,
        /// The owned asset
        asset_id: AssetID,
        /// Who owns it
        owner: Owner,
        /// From when
        start_date: NaiveDate,
    }
    AssetOwnershipBuilder
}

impl StartDated for AssetOwnership {
    fn starts_on(&self) -> &NaiveDate {
        self.start_date()
    }

    fn entered(&self) -> &DateTime<Utc> {
        self.created()
    }
}

/// Find the current ownership of an asset: of the ownerships of `asset_id`
/// that started on or before `today`, the one that started last. Deleted
/// ownerships don't count. If two ownerships start on the same day, the one
/// created last wins.
pub fn current_ownership<'a, I>(ownerships: I, asset_id: &AssetID, today: &NaiveDate) -> Option<&'a AssetOwnership>
    where I: IntoIterator<Item = &'a AssetOwnership>,
{
    dated::in_effect_on(ownerships.into_iter().filter(|o| o.asset_id() == asset_id), today)
}
