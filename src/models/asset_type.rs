//! Asset types further classify assets within an [AssetClass]. Every asset
//! has exactly one type.
//!
//! [AssetClass]: ../asset_class/struct.AssetClass.html

use crate::{
    error::Result,
    models::{
        asset_class::AssetClassID,
        lib::meta::{EntityMeta, PropertyMeta},
    },
};

pub static META: EntityMeta = EntityMeta {
    title: "Asset Type",
    desc: "A type of asset within an asset class",
    key_title: "Asset Type",
    properties: &[
        PropertyMeta::new("name", "Name", "The asset type name").required(),
        PropertyMeta::new("desc", "Description", "What this type covers").required(),
        PropertyMeta::new("asset_class_id", "Asset Class", "The class this type belongs to").required(),
    ],
};

entity_model! {
    /// The `AssetType` model.
    pub struct AssetType {
        id: <<AssetTypeID>>,
        /// A short, unique name for the type
        name: String,
        /// What this type covers
        desc: String,
        /// The class this type belongs to
        asset_class_id: AssetClassID,
    }
    AssetTypeBuilder
}

impl AssetType {
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
}
