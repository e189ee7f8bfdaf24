//! Asset classes are the top level of the asset classification table. Every
//! asset type belongs to a class (ie "Vehicles", "Buildings").

use crate::{
    error::Result,
    models::lib::meta::{EntityMeta, PropertyMeta},
};

pub static META: EntityMeta = EntityMeta {
    title: "Asset Class",
    desc: "A broad classification of assets",
    key_title: "Asset Class",
    properties: &[
        PropertyMeta::new("name", "Name", "The asset class name").required(),
        PropertyMeta::new("desc", "Description", "What belongs in this class").required(),
    ],
};

entity_model! {
    /// The `AssetClass` model.
    pub struct AssetClass {
        id: <<AssetClassID>>,
        /// A short, unique name for the class
        name: String,
        /// What belongs in this class
        desc: String,
    }
    AssetClassBuilder
}

impl AssetClass {
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
