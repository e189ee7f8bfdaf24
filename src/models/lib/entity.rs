//! Everything a model needs to be a model: the `entity_model!` declaration
//! macro and the traits storage and test code use to treat models generically.

use chrono::{DateTime, Utc};
use crate::{
    error::Error,
    models::{
        AnyModel,
        lib::meta::EntityMeta,
    },
};
use std::convert::TryFrom;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A trait implemented by every model declared with `entity_model!`.
pub trait Model: Clone + Debug + PartialEq + Into<AnyModel> + TryFrom<AnyModel, Error = Error> {
    /// The model's typed ID
    type ID: Clone + Debug + Display + Eq + Hash;

    /// Titles and property descriptors for this model type
    fn meta() -> &'static EntityMeta;

    /// Grab this model's ID
    fn model_id(&self) -> &Self::ID;

    /// The version storage last saw. Zero until the first applied update.
    fn model_version(&self) -> u64;

    /// Only storage should be calling this.
    fn set_model_version(&mut self, version: u64);
}

/// Models that can be (soft) deleted.
pub trait Deletable {
    /// Whether the model has a deletion timestamp
    fn is_deleted(&self) -> bool;

    /// Set (or clear) the deletion timestamp
    fn mark_deleted(&mut self, when: Option<DateTime<Utc>>);
}

/// Models that can be switched on and off.
pub trait ActiveState: Deletable {
    /// Active and not deleted
    fn is_active(&self) -> bool;

    /// Flip the active flag
    fn mark_active(&mut self, active: bool);
}

/// Declare a model.
///
/// Generates the ID newtype and the model struct (with getters, crate-private
/// setters and an owned builder), appends the standard envelope fields
/// (`version`, `active`, `created`, `updated`, `deleted`) and implements the
/// `Model`, `Deletable` and `ActiveState` traits. The invoking module must
/// define a `META: EntityMeta` static describing the model.
#[macro_export]
macro_rules! entity_model {
    (
        $(#[$struct_meta:meta])*
        pub struct $name:ident {
            id: <<$id:ident>>,
            $($fields:tt)*
        }
        $builder:ident
    ) => {
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "with_serde", serde(transparent))]
        pub struct $id(String);

        impl $id {
            pub fn new<T: Into<String>>(id: T) -> Self {
                Self(id.into())
            }

            /// Return a string ref for this ID
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            #[cfg(test)]
            pub fn create() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }
        }

        impl std::fmt::Display for $id {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::convert::From<$id> for String {
            fn from(id: $id) -> Self {
                let $id(val) = id;
                val
            }
        }

        impl std::convert::From<String> for $id {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl std::convert::From<&str> for $id {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        $(#[$struct_meta])*
        #[derive(Clone, Debug, PartialEq, getset::Getters, getset::Setters, derive_builder::Builder)]
        #[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
        #[builder(pattern = "owned", setter(into))]
        #[getset(get = "pub", set = "pub(crate)")]
        pub struct $name {
            id: $id,
            $($fields)*
            #[builder(default)]
            version: u64,
            #[builder(default)]
            active: bool,
            created: chrono::DateTime<chrono::Utc>,
            updated: chrono::DateTime<chrono::Utc>,
            #[builder(setter(strip_option), default)]
            #[cfg_attr(feature = "with_serde", serde(default, skip_serializing_if = "Option::is_none"))]
            deleted: Option<chrono::DateTime<chrono::Utc>>,
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::default()
            }
        }

        impl $crate::models::lib::entity::Model for $name {
            type ID = $id;

            fn meta() -> &'static $crate::models::lib::meta::EntityMeta {
                &META
            }

            fn model_id(&self) -> &Self::ID {
                &self.id
            }

            fn model_version(&self) -> u64 {
                self.version
            }

            fn set_model_version(&mut self, version: u64) {
                self.version = version;
            }
        }

        impl $crate::models::lib::entity::Deletable for $name {
            fn is_deleted(&self) -> bool {
                self.deleted.is_some()
            }

            fn mark_deleted(&mut self, when: Option<chrono::DateTime<chrono::Utc>>) {
                self.deleted = when;
            }
        }

        impl $crate::models::lib::entity::ActiveState for $name {
            fn is_active(&self) -> bool {
                self.active && self.deleted.is_none()
            }

            fn mark_active(&mut self, active: bool) {
                self.active = active;
            }
        }
    }
}
