//! The read side of whatever storage the caller is using. Mutation hooks and a
//! few transactions need to resolve references (which project is this
//! financial detail linked to?) and check existence/uniqueness; they do so
//! through this trait rather than by touching storage themselves.

use crate::models::{
    asset::{Asset, AssetID},
    asset_fin_det::AssetFinDet,
    lib::entity::Deletable,
    project::{Project, ProjectID},
};

/// Lookup-by-identifier and existence-check primitives.
pub trait Lookup {
    /// Find a project by ID (deleted projects included)
    fn project(&self, id: &ProjectID) -> Option<&Project>;

    /// Find an asset by ID (deleted assets included)
    fn asset(&self, id: &AssetID) -> Option<&Asset>;

    /// Find the financial details owned by the given asset
    fn fin_det_for(&self, asset_id: &AssetID) -> Option<&AssetFinDet>;

    /// Does a live (non-deleted) project with this ID exist?
    fn project_exists(&self, id: &ProjectID) -> bool {
        self.project(id).map(|p| !p.is_deleted()).unwrap_or(false)
    }

    /// Does a live (non-deleted) asset with this ID exist?
    fn asset_exists(&self, id: &AssetID) -> bool {
        self.asset(id).map(|a| !a.is_deleted()).unwrap_or(false)
    }

    /// Does the given asset already own financial details?
    fn fin_det_exists(&self, asset_id: &AssetID) -> bool {
        self.fin_det_for(asset_id).is_some()
    }
}
