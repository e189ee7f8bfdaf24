//! Assets are the tracked items themselves. An asset and its financial
//! details live and die together: creating an asset creates its (blank)
//! financial details in the same transaction, and deleting it deletes them.
//!
//! Saving changes to an existing asset only ever touches the asset. Its
//! financial details are edited separately (see the [asset_fin_det]
//! transactions) so an asset update never re-creates or re-versions them.
//!
//! [asset_fin_det]: ../asset_fin_det/index.html

use chrono::{DateTime, Utc};
use crate::{
    access::Permission,
    config::Config,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        asset::{Asset, AssetID},
        asset_fin_det::{AssetFinDet, AssetFinDetID},
        asset_type::AssetType,
        lib::entity::{ActiveState, Deletable},
        user::User,
    },
};
use tracing::debug;

fn check_type(asset_type: &AssetType) -> Result<()> {
    if asset_type.is_deleted() {
        Err(Error::ObjectIsDeleted("asset type".into()))?;
    }
    if !asset_type.is_active() {
        Err(Error::ObjectIsInactive("asset type".into()))?;
    }
    Ok(())
}

/// Create a new asset along with its financial details.
///
/// `seq` is the next value of the host's asset number sequence; the asset
/// number is generated from it using the configured numbering. Storage is
/// responsible for rejecting duplicate numbers.
pub fn create<T: Into<String>>(caller: &User, config: &Config, id: AssetID, fin_det_id: AssetFinDetID, seq: u64, desc: T, asset_type: &AssetType, active: bool, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AssetCreate)?;
    check_type(asset_type)?;
    let number = config.numbering().format(seq);
    let asset = Asset::builder()
        .id(id.clone())
        .number(number)
        .desc(desc)
        .asset_type_id(asset_type.id().clone())
        .fin_det_id(fin_det_id.clone())
        .active(active)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    asset.check_required()?;
    let fin_det = AssetFinDet::builder()
        .id(fin_det_id)
        .asset_id(id)
        .active(true)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    debug!("asset::create() -- new asset {} ({})", asset.number(), asset.id());
    let mut mods = Modifications::new();
    mods.push(Op::Create, asset);
    mods.push(Op::Create, fin_det);
    Ok(mods)
}

/// Update an asset. The asset number never changes.
pub fn update(caller: &User, mut subject: Asset, desc: Option<String>, asset_type: Option<&AssetType>, active: Option<bool>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AssetUpdate)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("asset".into()))?;
    }
    if let Some(desc) = desc {
        subject.set_desc(desc);
    }
    if let Some(asset_type) = asset_type {
        if asset_type.id() != subject.asset_type_id() {
            check_type(asset_type)?;
            subject.set_asset_type_id(asset_type.id().clone());
        }
    }
    if let Some(active) = active {
        subject.set_active(active);
    }
    subject.check_required()?;
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Delete an asset and the financial details it owns.
pub fn delete(caller: &User, mut subject: Asset, mut fin_det: AssetFinDet, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AssetDelete)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("asset".into()))?;
    }
    if fin_det.asset_id() != subject.id() {
        Err(Error::ReferenceMismatch("asset financial details".into()))?;
    }
    subject.set_deleted(Some(now.clone()));
    let mut mods = Modifications::new_single(Op::Delete, subject);
    if !fin_det.is_deleted() {
        fin_det.set_deleted(Some(now.clone()));
        mods.push(Op::Delete, fin_det);
    }
    Ok(mods)
}
