//! Ownership changes are recorded, never edited: to hand an asset to someone
//! else, create a new ownership starting on the handover date. Mistakes get
//! deleted.

use chrono::{DateTime, NaiveDate, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        asset::Asset,
        asset_ownership::{AssetOwnership, AssetOwnershipID, Owner},
        lib::entity::Deletable,
        user::User,
    },
};

/// Record that `owner` is responsible for `asset` from `start_date` on
pub fn create(caller: &User, id: AssetOwnershipID, asset: &Asset, owner: Owner, start_date: NaiveDate, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AssetOwnershipCreate)?;
    if asset.is_deleted() {
        Err(Error::ObjectIsDeleted("asset".into()))?;
    }
    if owner.name().trim().is_empty() {
        Err(Error::MissingFields(vec!["owner".into()]))?;
    }
    let model = AssetOwnership::builder()
        .id(id)
        .asset_id(asset.id().clone())
        .owner(owner)
        .start_date(start_date)
        .active(true)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    Ok(Modifications::new_single(Op::Create, model))
}

/// Delete an ownership record
pub fn delete(caller: &User, mut subject: AssetOwnership, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AssetOwnershipDelete)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("asset ownership".into()))?;
    }
    subject.set_deleted(Some(now.clone()));
    Ok(Modifications::new_single(Op::Delete, subject))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        access::Role,
        models::{
            asset::AssetID,
            asset_fin_det::AssetFinDetID,
            asset_type::AssetTypeID,
        },
        util::{self, test::*},
    };

    #[test]
    fn can_create() {
        let now = util::time::now();
        let id = AssetOwnershipID::create();
        let mut state = TestState::<Asset, Asset>::standard(vec![Role::AssetManager], &now);
        state.model = Some(make_asset(&AssetID::create(), &AssetFinDetID::create(), &AssetTypeID::create(), "A000001", &now));

        let testfn = |state: &TestState<Asset, Asset>| {
            create(state.user(), id.clone(), state.model(), Owner::BusinessUnit("Terminal 4".into()), date("2019-12-08"), &now)
        };

        let mods = testfn(&state).unwrap().into_vec();
        assert_eq!(mods.len(), 1);
        let ownership = mods[0].clone().expect_op::<AssetOwnership>(Op::Create).unwrap();
        assert_eq!(ownership.id(), &id);
        assert_eq!(ownership.asset_id(), state.model().id());
        assert_eq!(ownership.owner(), &Owner::BusinessUnit("Terminal 4".into()));
        assert_eq!(ownership.start_date(), &date("2019-12-08"));
        assert_eq!(ownership.created(), &now);
        assert_eq!(ownership.deleted(), &None);

        permissions_checks(&state, &testfn);
        double_deleted_tester(&state, "asset", &testfn);

        let res = create(state.user(), id.clone(), state.model(), Owner::Role(" ".into()), date("2019-12-08"), &now);
        assert_eq!(res, Err(Error::MissingFields(vec!["owner".into()])));
    }

    #[test]
    fn handover_changes_current_owner() {
        let now = util::time::now();
        let mut state = TestState::<Asset, Asset>::standard(vec![Role::AssetManager], &now);
        let asset = make_asset(&AssetID::create(), &AssetFinDetID::create(), &AssetTypeID::create(), "A000001", &now);

        let mods = create(state.user(), AssetOwnershipID::create(), &asset, Owner::Role("Ramp Ops".into()), date("2019-01-01"), &now).unwrap();
        state.apply(mods);
        let mods = create(state.user(), AssetOwnershipID::create(), &asset, Owner::Organisation("Ground Handling Co".into()), date("2020-01-01"), &now).unwrap();
        state.apply(mods);

        let current = state.store.current_ownership(asset.id(), Some(&date("2019-06-01"))).unwrap();
        assert_eq!(current.owner(), &Owner::Role("Ramp Ops".into()));
        let current = state.store.current_ownership(asset.id(), Some(&date("2020-06-01"))).unwrap().clone();
        assert_eq!(current.owner(), &Owner::Organisation("Ground Handling Co".into()));

        // deleting the handover puts the old owner back in charge
        let mods = delete(state.user(), current, &now).unwrap();
        state.apply(mods);
        let current = state.store.current_ownership(asset.id(), Some(&date("2020-06-01"))).unwrap();
        assert_eq!(current.owner(), &Owner::Role("Ramp Ops".into()));
    }

    #[test]
    fn can_delete() {
        let now = util::time::now();
        let mut state = TestState::<AssetOwnership, AssetOwnership>::standard(vec![Role::AssetManager], &now);
        state.model = Some(make_ownership(&AssetOwnershipID::create(), &AssetID::create(), Owner::Role("Ramp Ops".into()), date("2019-01-01"), &now));

        let now2 = util::time::now();
        let testfn = |state: &TestState<AssetOwnership, AssetOwnership>| {
            delete(state.user(), state.model().clone(), &now2)
        };

        let mods = testfn(&state).unwrap().into_vec();
        assert_eq!(mods.len(), 1);
        let ownership = mods[0].clone().expect_op::<AssetOwnership>(Op::Delete).unwrap();
        assert_eq!(ownership.id(), state.model().id());
        assert_eq!(ownership.deleted(), &Some(now2.clone()));

        permissions_checks(&state, &testfn);
        double_deleted_tester(&state, "asset ownership", &testfn);
    }
}
