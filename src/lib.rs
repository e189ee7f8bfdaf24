//! The core datastructures and logic of the asset register: capital assets,
//! their financial details, and the projects that fund them.
//!
//! Like any good core, this library does not store anything. [Transactions]
//! take the models they need and return [Modifications] that the caller
//! persists however it likes. The one place we need to *read* storage (to
//! resolve references and check uniqueness) goes through the [Lookup] trait.
//!
//! [Transactions]: transactions/index.html
//! [Modifications]: models/struct.Modifications.html
//! [Lookup]: models/lib/lookup/trait.Lookup.html

/// A macro that standardizes including, exporting, and creating wrapper type(s)
/// for our models.
macro_rules! load_models {
    (
        @pub use
        $( ($path:ident, $model:ident, $($extratypes:ident),*), )*
    ) => {
        pub use models::{
            $( $path::{$model, $($extratypes),*}, )*
        };
    };

    (
        @pub mod
        $( ($path:ident, $($_rest:tt)*), )*
    ) => {
        $(
            pub mod $path;
        )*
    };

    // create an enum that wraps our models, and the conversions in and out
    (
        @pub enum $enumname:ident
        $( ($path:ident, $model:ident, $($_extratypes:ident),*), )*
    ) => {
        /// An enum that allows returning *any* model type. This is mainly used
        /// along with [Op](enum.Op.html) to specify modifications (ie
        /// `[Op::Create, Asset]`).
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $enumname {
            $(
                $model(crate::models::$path::$model),
            )*
        }

        $(
            impl std::convert::From<crate::models::$path::$model> for $enumname {
                fn from(model: crate::models::$path::$model) -> Self {
                    $enumname::$model(model)
                }
            }

            impl std::convert::TryFrom<$enumname> for crate::models::$path::$model {
                type Error = crate::error::Error;

                fn try_from(val: $enumname) -> crate::error::Result<Self> {
                    match val {
                        $enumname::$model(model) => Ok(model),
                        _ => Err(crate::error::Error::WrongModelType),
                    }
                }
            }
        )*
    };

    // entry point
    ($($load_type:tt)*) => {
        load_models! {
            @$($load_type)*
            // loaded in dependency order
            (user, User, UserID),
            (project, Project, ProjectID),
            (asset_class, AssetClass, AssetClassID),
            (asset_type, AssetType, AssetTypeID),
            (asset, Asset, AssetID),
            (asset_fin_det, AssetFinDet, AssetFinDetID),
            (asset_ownership, AssetOwnership, AssetOwnershipID, Owner),
            (asset_type_ownership, AssetTypeOwnership, AssetTypeOwnershipID),
            (asset_type_operation, AssetTypeOperation, AssetTypeOperationID),
        }
    };
}

pub mod error;
#[macro_use]
pub mod util;
pub mod access;
pub mod config;
pub mod money;
#[macro_use]
pub mod models;
pub mod store;
pub mod transactions;

load_models!{ pub use }
