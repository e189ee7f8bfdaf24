//! Transactions are the primary interface for interacting with the asset
//! register. They take the needed information (which must be passed in) and
//! return a list of modifications that the caller is responsible for applying
//! to whatever storage medium they are using.
//!
//! The logic all lives in the transactions (and in some cases the models) but
//! storage happens somewhere else and we don't touch it here. Transactions
//! that need to resolve references or check uniqueness do so through the
//! read-only [Lookup] trait.
//!
//! Every transaction starts by checking the caller's permissions, and refuses
//! to act on models that have already been deleted.
//!
//! [Lookup]: ../models/lib/lookup/trait.Lookup.html

pub mod asset;
pub mod asset_class;
pub mod asset_fin_det;
pub mod asset_ownership;
pub mod asset_type;
pub mod asset_type_operation;
pub mod asset_type_ownership;
pub mod project;
