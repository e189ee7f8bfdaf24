//! Asset classes are the top of the classification table. They're maintained
//! by asset managers and rarely change.

use chrono::{DateTime, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        asset_class::{AssetClass, AssetClassID},
        lib::entity::Deletable,
        user::User,
    },
};

/// Create a new asset class
pub fn create<T: Into<String>>(caller: &User, id: AssetClassID, name: T, desc: T, active: bool, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AssetClassCreate)?;
    let model = AssetClass::builder()
        .id(id)
        .name(name)
        .desc(desc)
        .active(active)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    model.check_required()?;
    Ok(Modifications::new_single(Op::Create, model))
}

/// Update an asset class
pub fn update(caller: &User, mut subject: AssetClass, name: Option<String>, desc: Option<String>, active: Option<bool>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AssetClassUpdate)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("asset class".into()))?;
    }
    if let Some(name) = name {
        subject.set_name(name);
    }
    if let Some(desc) = desc {
        subject.set_desc(desc);
    }
    if let Some(active) = active {
        subject.set_active(active);
    }
    subject.check_required()?;
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Delete an asset class
pub fn delete(caller: &User, mut subject: AssetClass, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AssetClassDelete)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("asset class".into()))?;
    }
    subject.set_deleted(Some(now.clone()));
    Ok(Modifications::new_single(Op::Delete, subject))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        access::Role,
        util::{self, test::*},
    };

    #[test]
    fn can_create() {
        let now = util::time::now();
        let id = AssetClassID::create();
        let state = TestState::<AssetClass, AssetClass>::standard(vec![Role::AssetManager], &now);

        let testfn = |state: &TestState<AssetClass, AssetClass>| {
            create(state.user(), id.clone(), "Vehicles", "Things with wheels", true, &now)
        };

        let mods = testfn(&state).unwrap().into_vec();
        assert_eq!(mods.len(), 1);
        let class = mods[0].clone().expect_op::<AssetClass>(Op::Create).unwrap();
        assert_eq!(class.id(), &id);
        assert_eq!(class.name(), "Vehicles");
        assert_eq!(class.desc(), "Things with wheels");
        assert_eq!(class.active(), &true);
        assert_eq!(class.created(), &now);
        assert_eq!(class.updated(), &now);
        assert_eq!(class.deleted(), &None);

        permissions_checks(&state, &testfn);

        let res = create(state.user(), id.clone(), "", "Things with wheels", true, &now);
        assert_eq!(res, Err(Error::MissingFields(vec!["name".into()])));
    }

    #[test]
    fn can_update() {
        let now = util::time::now();
        let mut state = TestState::<AssetClass, AssetClass>::standard(vec![Role::AssetManager], &now);
        state.model = Some(make_asset_class(&AssetClassID::create(), "Vehicles", &now));

        let now2 = util::time::now();
        let testfn = |state: &TestState<AssetClass, AssetClass>| {
            update(state.user(), state.model().clone(), Some("Rolling Stock".into()), None, Some(false), &now2)
        };

        let mods = testfn(&state).unwrap().into_vec();
        assert_eq!(mods.len(), 1);
        let class = mods[0].clone().expect_op::<AssetClass>(Op::Update).unwrap();
        assert_eq!(class.id(), state.model().id());
        assert_eq!(class.name(), "Rolling Stock");
        assert_eq!(class.desc(), state.model().desc());
        assert_eq!(class.active(), &false);
        assert_eq!(class.created(), &now);
        assert_eq!(class.updated(), &now2);

        permissions_checks(&state, &testfn);
        double_deleted_tester(&state, "asset class", &testfn);
    }

    #[test]
    fn can_delete() {
        let now = util::time::now();
        let mut state = TestState::<AssetClass, AssetClass>::standard(vec![Role::AssetManager], &now);
        state.model = Some(make_asset_class(&AssetClassID::create(), "Vehicles", &now));

        let now2 = util::time::now();
        let testfn = |state: &TestState<AssetClass, AssetClass>| {
            delete(state.user(), state.model().clone(), &now2)
        };

        let mods = testfn(&state).unwrap().into_vec();
        assert_eq!(mods.len(), 1);
        let class = mods[0].clone().expect_op::<AssetClass>(Op::Delete).unwrap();
        assert_eq!(class.id(), state.model().id());
        assert_eq!(class.deleted(), &Some(now2.clone()));

        permissions_checks(&state, &testfn);
        double_deleted_tester(&state, "asset class", &testfn);
    }
}
