//! An asset is a tracked capital item: a truck, a building, a baggage belt.
//!
//! Each asset owns exactly one set of [financial details][AssetFinDet], which
//! is created right along with the asset and deleted right along with it.
//!
//! [AssetFinDet]: ../asset_fin_det/struct.AssetFinDet.html

use crate::{
    error::Result,
    models::{
        asset_fin_det::AssetFinDetID,
        asset_type::AssetTypeID,
        lib::meta::{EntityMeta, PropertyMeta},
    },
};

pub static META: EntityMeta = EntityMeta {
    title: "Asset",
    desc: "A tracked capital item",
    key_title: "Asset Number",
    properties: &[
        PropertyMeta::new("number", "Number", "A unique asset number, auto-generated").required().readonly(),
        PropertyMeta::new("desc", "Description", "What this asset is").required(),
        PropertyMeta::new("asset_type_id", "Type", "A type of asset").required(),
        PropertyMeta::new("fin_det_id", "Fin Det", "Financial details for this asset").readonly(),
    ],
};

entity_model! {
    /// The `Asset` model.
    pub struct Asset {
        id: <<AssetID>>,
        /// The asset number. Generated on creation, never changes.
        number: String,
        /// What this asset is
        desc: String,
        /// What type of asset this is
        asset_type_id: AssetTypeID,
        /// The financial details owned by this asset
        fin_det_id: AssetFinDetID,
    }
    AssetBuilder
}

impl Asset {
    /// Make sure all required properties are filled in.
    pub fn check_required(&self) -> Result<()> {
        META.check_required(|name| {
            match name {
                "number" => !self.number().trim().is_empty(),
                "desc" => !self.desc().trim().is_empty(),
                _ => true,
            }
        })
    }
}
