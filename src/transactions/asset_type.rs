//! Asset types live under an asset class. New types can only be filed under
//! a class that's still in use.

use chrono::{DateTime, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        asset_class::AssetClass,
        asset_type::{AssetType, AssetTypeID},
        lib::entity::{ActiveState, Deletable},
        user::User,
    },
};

fn check_class(asset_class: &AssetClass) -> Result<()> {
    if asset_class.is_deleted() {
        Err(Error::ObjectIsDeleted("asset class".into()))?;
    }
    if !asset_class.is_active() {
        Err(Error::ObjectIsInactive("asset class".into()))?;
    }
    Ok(())
}

/// Create a new asset type within the given class
pub fn create<T: Into<String>>(caller: &User, id: AssetTypeID, name: T, desc: T, asset_class: &AssetClass, active: bool, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AssetTypeCreate)?;
    check_class(asset_class)?;
    let model = AssetType::builder()
        .id(id)
        .name(name)
        .desc(desc)
        .asset_class_id(asset_class.id().clone())
        .active(active)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    model.check_required()?;
    Ok(Modifications::new_single(Op::Create, model))
}

/// Update an asset type, optionally moving it to another class
pub fn update(caller: &User, mut subject: AssetType, name: Option<String>, desc: Option<String>, asset_class: Option<&AssetClass>, active: Option<bool>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AssetTypeUpdate)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("asset type".into()))?;
    }
    if let Some(name) = name {
        subject.set_name(name);
    }
    if let Some(desc) = desc {
        subject.set_desc(desc);
    }
    if let Some(asset_class) = asset_class {
        if asset_class.id() != subject.asset_class_id() {
            check_class(asset_class)?;
            subject.set_asset_class_id(asset_class.id().clone());
        }
    }
    if let Some(active) = active {
        subject.set_active(active);
    }
    subject.check_required()?;
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Delete an asset type
pub fn delete(caller: &User, mut subject: AssetType, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AssetTypeDelete)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("asset type".into()))?;
    }
    subject.set_deleted(Some(now.clone()));
    Ok(Modifications::new_single(Op::Delete, subject))
}
