//! A reference storage implementation that keeps everything in memory.
//!
//! Real deployments persist [Modifications] in a database of their choosing;
//! this store exists to show (and test) what storage is expected to do with
//! them:
//!
//! - apply a whole list of modifications or none of it;
//! - refuse to create a model whose ID (or unique key) is already taken;
//! - refuse updates computed against an outdated version of a model, and bump
//!   the version of every model it updates.
//!
//! Deletes are soft: the deleted model is kept (with its deletion timestamp)
//! so that lookups can still tell "deleted" apart from "never existed".
//!
//! [Modifications]: ../models/struct.Modifications.html

use crate::{
    error::{Error, Result},
    models::{
        AnyModel,
        Modification,
        Modifications,
        Op,
        asset::{Asset, AssetID},
        asset_class::{AssetClass, AssetClassID},
        asset_fin_det::{AssetFinDet, AssetFinDetID},
        asset_ownership::{self, AssetOwnership, AssetOwnershipID},
        asset_type::{AssetType, AssetTypeID},
        asset_type_operation::{self, AssetTypeOperation, AssetTypeOperationID},
        asset_type_ownership::{self, AssetTypeOwnership, AssetTypeOwnershipID},
        lib::{
            entity::Model,
            lookup::Lookup,
        },
        project::{Project, ProjectID},
        user::{User, UserID},
    },
    util,
};
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Keeps all our models in hash maps.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    users: HashMap<UserID, User>,
    projects: HashMap<ProjectID, Project>,
    asset_classes: HashMap<AssetClassID, AssetClass>,
    asset_types: HashMap<AssetTypeID, AssetType>,
    assets: HashMap<AssetID, Asset>,
    fin_dets: HashMap<AssetFinDetID, AssetFinDet>,
    ownerships: HashMap<AssetOwnershipID, AssetOwnership>,
    type_ownerships: HashMap<AssetTypeOwnershipID, AssetTypeOwnership>,
    type_operations: HashMap<AssetTypeOperationID, AssetTypeOperation>,
}

fn title<M: Model>() -> String {
    M::meta().title.to_lowercase()
}

/// Apply one operation to one table.
fn apply_to<M: Model>(table: &mut HashMap<M::ID, M>, op: Op, mut model: M) -> Result<()> {
    let id = model.model_id().clone();
    match op {
        Op::Create => {
            if table.contains_key(&id) {
                Err(Error::DuplicateKey(title::<M>(), id.to_string()))?;
            }
            model.set_model_version(0);
        }
        Op::Update | Op::Delete => {
            let stored = table.get(&id)
                .ok_or_else(|| Error::ObjectNotFound(title::<M>()))?;
            if stored.model_version() != model.model_version() {
                Err(Error::StaleVersion(title::<M>(), id.to_string()))?;
            }
            model.set_model_version(stored.model_version() + 1);
        }
    }
    table.insert(id, model);
    Ok(())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a set of modifications. Either all of them make it in or, on the
    /// first failure, none of them do.
    pub fn apply(&mut self, mods: Modifications) -> Result<()> {
        let count = mods.len();
        let mut staged = self.clone();
        for modification in mods {
            if let Err(err) = staged.apply_one(modification) {
                warn!("store: rejecting {} modification(s): {}", count, err);
                return Err(err);
            }
        }
        *self = staged;
        debug!("store: applied {} modification(s)", count);
        Ok(())
    }

    fn apply_one(&mut self, modification: Modification) -> Result<()> {
        let (op, model) = modification.into_pair();
        match model {
            AnyModel::User(model) => apply_to(&mut self.users, op, model),
            AnyModel::Project(model) => apply_to(&mut self.projects, op, model),
            AnyModel::AssetClass(model) => apply_to(&mut self.asset_classes, op, model),
            AnyModel::AssetType(model) => apply_to(&mut self.asset_types, op, model),
            AnyModel::Asset(model) => {
                if op == Op::Create {
                    let taken = self.assets.values()
                        .any(|a| a.number() == model.number());
                    if taken {
                        Err(Error::DuplicateKey(title::<Asset>(), model.number().clone()))?;
                    }
                }
                apply_to(&mut self.assets, op, model)
            }
            AnyModel::AssetFinDet(model) => {
                if op == Op::Create && self.fin_det_exists(model.asset_id()) {
                    Err(Error::DuplicateKey(title::<AssetFinDet>(), model.asset_id().to_string()))?;
                }
                apply_to(&mut self.fin_dets, op, model)
            }
            AnyModel::AssetOwnership(model) => apply_to(&mut self.ownerships, op, model),
            AnyModel::AssetTypeOwnership(model) => apply_to(&mut self.type_ownerships, op, model),
            AnyModel::AssetTypeOperation(model) => apply_to(&mut self.type_operations, op, model),
        }
    }

    pub fn user(&self, id: &UserID) -> Option<&User> {
        self.users.get(id)
    }

    pub fn asset_class(&self, id: &AssetClassID) -> Option<&AssetClass> {
        self.asset_classes.get(id)
    }

    pub fn asset_type(&self, id: &AssetTypeID) -> Option<&AssetType> {
        self.asset_types.get(id)
    }

    pub fn fin_det(&self, id: &AssetFinDetID) -> Option<&AssetFinDet> {
        self.fin_dets.get(id)
    }

    pub fn ownership(&self, id: &AssetOwnershipID) -> Option<&AssetOwnership> {
        self.ownerships.get(id)
    }

    pub fn type_ownership(&self, id: &AssetTypeOwnershipID) -> Option<&AssetTypeOwnership> {
        self.type_ownerships.get(id)
    }

    pub fn type_operation(&self, id: &AssetTypeOperationID) -> Option<&AssetTypeOperation> {
        self.type_operations.get(id)
    }

    /// The ownership of the given asset in effect on `on`, or today if no
    /// date is given.
    pub fn current_ownership(&self, asset_id: &AssetID, on: Option<&NaiveDate>) -> Option<&AssetOwnership> {
        let day = on.cloned().unwrap_or_else(util::time::today);
        asset_ownership::current_ownership(self.ownerships.values(), asset_id, &day)
    }

    /// The ownership of the given asset type in effect on `on` (default today).
    pub fn current_type_ownership(&self, asset_type_id: &AssetTypeID, on: Option<&NaiveDate>) -> Option<&AssetTypeOwnership> {
        let day = on.cloned().unwrap_or_else(util::time::today);
        asset_type_ownership::current_type_ownership(self.type_ownerships.values(), asset_type_id, &day)
    }

    /// Who operates the given asset type on `on` (default today).
    pub fn current_type_operation(&self, asset_type_id: &AssetTypeID, on: Option<&NaiveDate>) -> Option<&AssetTypeOperation> {
        let day = on.cloned().unwrap_or_else(util::time::today);
        asset_type_operation::current_type_operation(self.type_operations.values(), asset_type_id, &day)
    }
}

impl Lookup for MemoryStore {
    fn project(&self, id: &ProjectID) -> Option<&Project> {
        self.projects.get(id)
    }

    fn asset(&self, id: &AssetID) -> Option<&Asset> {
        self.assets.get(id)
    }

    fn fin_det_for(&self, asset_id: &AssetID) -> Option<&AssetFinDet> {
        self.fin_dets.values().find(|f| f.asset_id() == asset_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{asset_ownership::Owner, lib::entity::Deletable},
        util::test::*,
    };

    #[test]
    fn creates_and_finds() {
        let now = util::time::now();
        let project = make_project(&ProjectID::create(), "runway 4", date("2019-12-08"), None, &now);
        let mut store = MemoryStore::new();
        store.apply(Modifications::new_single(Op::Create, project.clone())).unwrap();
        assert_eq!(store.project(project.id()), Some(&project));
        assert!(store.project_exists(project.id()));
        assert!(!store.project_exists(&ProjectID::create()));

        let res = store.apply(Modifications::new_single(Op::Create, project.clone()));
        assert_eq!(res, Err(Error::DuplicateKey("project".into(), project.id().to_string())));
    }

    #[test]
    fn updates_bump_versions() {
        let now = util::time::now();
        let project = make_project(&ProjectID::create(), "runway 4", date("2019-12-08"), None, &now);
        let mut store = MemoryStore::new();
        store.apply(Modifications::new_single(Op::Create, project.clone())).unwrap();

        let mut project2 = store.project(project.id()).unwrap().clone();
        project2.set_name("runway 4L".into());
        store.apply(Modifications::new_single(Op::Update, project2.clone())).unwrap();
        let stored = store.project(project.id()).unwrap();
        assert_eq!(stored.version(), &1);
        assert_eq!(stored.name(), "runway 4L");

        // project2 still thinks it's at version 0
        let res = store.apply(Modifications::new_single(Op::Update, project2));
        assert_eq!(res, Err(Error::StaleVersion("project".into(), project.id().to_string())));

        let res = store.apply(Modifications::new_single(Op::Update, make_project(&ProjectID::create(), "nope", date("2019-12-08"), None, &now)));
        assert_eq!(res, Err(Error::ObjectNotFound("project".into())));
    }

    #[test]
    fn deletes_are_soft() {
        let now = util::time::now();
        let project = make_project(&ProjectID::create(), "runway 4", date("2019-12-08"), None, &now);
        let mut store = store_with(vec![project.clone().into()]);
        let mut deleted = project.clone();
        deleted.mark_deleted(Some(now.clone()));
        store.apply(Modifications::new_single(Op::Delete, deleted)).unwrap();
        assert!(store.project(project.id()).unwrap().is_deleted());
        assert!(!store.project_exists(project.id()));
    }

    #[test]
    fn applies_all_or_nothing() {
        let now = util::time::now();
        let project1 = make_project(&ProjectID::create(), "runway 4", date("2019-12-08"), None, &now);
        let project2 = make_project(&ProjectID::create(), "runway 5", date("2019-12-08"), None, &now);
        let mut store = store_with(vec![project2.clone().into()]);

        let mut mods = Modifications::new();
        mods.push(Op::Create, project1.clone());
        mods.push(Op::Create, project2.clone());
        assert!(store.apply(mods).is_err());
        assert_eq!(store.project(project1.id()), None);
    }

    #[test]
    fn current_records_default_to_today() {
        let now = util::time::now();
        let asset_id = AssetID::create();
        let type_id = AssetTypeID::create();
        let today = util::time::today();
        let past = today - chrono::Duration::days(30);
        let future = today + chrono::Duration::days(30);
        let ownership = make_ownership(&AssetOwnershipID::create(), &asset_id, Owner::Role("Ramp".into()), past, &now);
        let later = make_ownership(&AssetOwnershipID::create(), &asset_id, Owner::Role("Apron".into()), future, &now);
        let type_owner = make_type_ownership(&AssetTypeOwnershipID::create(), &type_id, Owner::Role("Fleet".into()), past, &now);
        let ended = make_type_operation(&AssetTypeOperationID::create(), &type_id, Owner::Organisation("Swissport".into()), past, Some(past), &now);
        let store = store_with(vec![ownership.clone().into(), later.clone().into(), type_owner.clone().into(), ended.clone().into()]);

        assert_eq!(store.current_ownership(&asset_id, None), Some(&ownership));
        assert_eq!(store.current_ownership(&asset_id, Some(&future)), Some(&later));
        assert_eq!(store.current_type_ownership(&type_id, None), Some(&type_owner));
        assert_eq!(store.current_type_operation(&type_id, None), None);
        assert_eq!(store.current_type_operation(&type_id, Some(&past)), Some(&ended));
        assert_eq!(store.type_operation(ended.id()), Some(&ended));
        assert_eq!(store.type_ownership(type_owner.id()), Some(&type_owner));
    }

    #[test]
    fn one_fin_det_per_asset() {
        let now = util::time::now();
        let asset_id = AssetID::create();
        let fin_det1 = make_fin_det(&AssetFinDetID::create(), &asset_id, &now);
        let fin_det2 = make_fin_det(&AssetFinDetID::create(), &asset_id, &now);
        let mut store = store_with(vec![fin_det1.clone().into()]);
        assert_eq!(store.fin_det_for(&asset_id), Some(&fin_det1));
        assert!(store.fin_det_exists(&asset_id));
        assert!(!store.fin_det_exists(&AssetID::create()));

        let res = store.apply(Modifications::new_single(Op::Create, fin_det2.clone()));
        assert_eq!(res, Err(Error::DuplicateKey("asset financial details".into(), asset_id.to_string())));
        assert_eq!(store.fin_det(fin_det2.id()), None);
    }
}
