//! Assigning who operates an asset type, optionally until an end date.

use chrono::{DateTime, NaiveDate, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        asset_ownership::Owner,
        asset_type::AssetType,
        asset_type_operation::{AssetTypeOperation, AssetTypeOperationID},
        lib::entity::Deletable,
        user::User,
    },
};

/// Record that `operator` runs `asset_type` from `start_date` until
/// `end_date` (inclusive), or indefinitely.
pub fn create(caller: &User, id: AssetTypeOperationID, asset_type: &AssetType, operator: Owner, start_date: NaiveDate, end_date: Option<NaiveDate>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AssetTypeOperationCreate)?;
    if asset_type.is_deleted() {
        Err(Error::ObjectIsDeleted("asset type".into()))?;
    }
    if operator.name().trim().is_empty() {
        Err(Error::MissingFields(vec!["operator".into()]))?;
    }
    let model = AssetTypeOperation::builder()
        .id(id)
        .asset_type_id(asset_type.id().clone())
        .operator(operator)
        .start_date(start_date)
        .end_date(end_date)
        .active(true)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    model.check_period()?;
    Ok(Modifications::new_single(Op::Create, model))
}

/// Delete an operation record
pub fn delete(caller: &User, mut subject: AssetTypeOperation, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AssetTypeOperationDelete)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("asset type operation".into()))?;
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
            asset_class::AssetClassID,
            asset_type::AssetTypeID,
        },
        util::{self, test::*},
    };

    #[test]
    fn can_create() {
        let now = util::time::now();
        let id = AssetTypeOperationID::create();
        let mut state = TestState::<AssetType, AssetType>::standard(vec![Role::AssetManager], &now);
        state.model = Some(make_asset_type(&AssetTypeID::create(), &AssetClassID::create(), "Tug", &now));

        let testfn = |state: &TestState<AssetType, AssetType>| {
            create(state.user(), id.clone(), state.model(), Owner::Organisation("Swissport".into()), date("2019-12-08"), Some(date("2020-12-31")), &now)
        };

        let mods = testfn(&state).unwrap().into_vec();
        assert_eq!(mods.len(), 1);
        let operation = mods[0].clone().expect_op::<AssetTypeOperation>(Op::Create).unwrap();
        assert_eq!(operation.id(), &id);
        assert_eq!(operation.asset_type_id(), state.model().id());
        assert_eq!(operation.operator(), &Owner::Organisation("Swissport".into()));
        assert_eq!(operation.start_date(), &date("2019-12-08"));
        assert_eq!(operation.end_date(), &Some(date("2020-12-31")));
        assert_eq!(operation.deleted(), &None);

        permissions_checks(&state, &testfn);
        double_deleted_tester(&state, "asset type", &testfn);

        let res = create(state.user(), id.clone(), state.model(), Owner::Organisation(" ".into()), date("2019-12-08"), None, &now);
        assert_eq!(res, Err(Error::MissingFields(vec!["operator".into()])));

        let res = create(state.user(), id.clone(), state.model(), Owner::Organisation("Swissport".into()), date("2019-12-08"), Some(date("2019-12-07")), &now);
        assert_eq!(res, Err(Error::InvalidOperationPeriod { start: date("2019-12-08"), end: date("2019-12-07") }));

        // a single day is fine
        let res = create(state.user(), id.clone(), state.model(), Owner::Organisation("Swissport".into()), date("2019-12-08"), Some(date("2019-12-08")), &now);
        assert!(res.is_ok());
    }

    #[test]
    fn operations_run_out() {
        let now = util::time::now();
        let mut state = TestState::<AssetType, AssetType>::standard(vec![Role::AssetManager], &now);
        let ty = make_asset_type(&AssetTypeID::create(), &AssetClassID::create(), "Tug", &now);

        let mods = create(state.user(), AssetTypeOperationID::create(), &ty, Owner::Organisation("Swissport".into()), date("2019-01-01"), Some(date("2019-12-31")), &now).unwrap();
        state.apply(mods);

        let current = state.store.current_type_operation(ty.id(), Some(&date("2019-12-31"))).unwrap();
        assert_eq!(current.operator(), &Owner::Organisation("Swissport".into()));
        assert_eq!(state.store.current_type_operation(ty.id(), Some(&date("2020-01-01"))), None);

        let mods = create(state.user(), AssetTypeOperationID::create(), &ty, Owner::BusinessUnit("Ramp Operations".into()), date("2020-02-01"), None, &now).unwrap();
        state.apply(mods);
        assert_eq!(state.store.current_type_operation(ty.id(), Some(&date("2020-01-15"))), None);
        let current = state.store.current_type_operation(ty.id(), Some(&date("2030-01-01"))).unwrap();
        assert_eq!(current.operator(), &Owner::BusinessUnit("Ramp Operations".into()));
    }

    #[test]
    fn can_delete() {
        let now = util::time::now();
        let mut state = TestState::<AssetTypeOperation, AssetTypeOperation>::standard(vec![Role::AssetManager], &now);
        state.model = Some(make_type_operation(&AssetTypeOperationID::create(), &AssetTypeID::create(), Owner::Role("Ramp".into()), date("2019-01-01"), None, &now));

        let now2 = util::time::now();
        let testfn = |state: &TestState<AssetTypeOperation, AssetTypeOperation>| {
            delete(state.user(), state.model().clone(), &now2)
        };

        let mods = testfn(&state).unwrap().into_vec();
        assert_eq!(mods.len(), 1);
        let operation = mods[0].clone().expect_op::<AssetTypeOperation>(Op::Delete).unwrap();
        assert_eq!(operation.id(), state.model().id());
        assert_eq!(operation.deleted(), &Some(now2.clone()));

        permissions_checks(&state, &testfn);
        double_deleted_tester(&state, "asset type operation", &testfn);
    }
}
