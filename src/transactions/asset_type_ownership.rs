//! Ownership of a whole asset type. Like asset ownership, a handover is a new
//! record starting on the handover date.

use chrono::{DateTime, NaiveDate, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        asset_ownership::Owner,
        asset_type::AssetType,
        asset_type_ownership::{AssetTypeOwnership, AssetTypeOwnershipID},
        lib::entity::Deletable,
        user::User,
    },
};

/// Record that `owner` is responsible for `asset_type` from `start_date` on
pub fn create(caller: &User, id: AssetTypeOwnershipID, asset_type: &AssetType, owner: Owner, start_date: NaiveDate, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AssetTypeOwnershipCreate)?;
    if asset_type.is_deleted() {
        Err(Error::ObjectIsDeleted("asset type".into()))?;
    }
    if owner.name().trim().is_empty() {
        Err(Error::MissingFields(vec!["owner".into()]))?;
    }
    let model = AssetTypeOwnership::builder()
        .id(id)
        .asset_type_id(asset_type.id().clone())
        .owner(owner)
        .start_date(start_date)
        .active(true)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    Ok(Modifications::new_single(Op::Create, model))
}

/// Delete a type ownership record
pub fn delete(caller: &User, mut subject: AssetTypeOwnership, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AssetTypeOwnershipDelete)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("asset type ownership".into()))?;
    }
    subject.set_deleted(Some(now.clone()));
    Ok(Modifications::new_single(Op::Delete, subject))
}
