//! The user is whoever is calling a transaction. Who they *are* is decided
//! outside of the core (login, sessions, etc). What they may *do* is decided
//! here, by their roles.

use crate::{
    access::{Permission, Role},
    error::{Error, Result},
    models::lib::{
        entity::ActiveState,
        meta::{EntityMeta, PropertyMeta},
    },
};

pub static META: EntityMeta = EntityMeta {
    title: "User",
    desc: "A person using the asset register",
    key_title: "User",
    properties: &[
        PropertyMeta::new("roles", "Roles", "What this user may do"),
        PropertyMeta::new("email", "Email", "Where to reach this user").required(),
        PropertyMeta::new("name", "Name", "The user's full name").required(),
    ],
};

entity_model! {
    /// The `User` model describes a user of the system.
    pub struct User {
        id: <<UserID>>,
        /// Defines this user's roles, ie what permissions they have access to.
        roles: Vec<Role>,
        /// The user's email.
        email: String,
        /// The user's full name.
        name: String,
    }
    UserBuilder
}

impl User {
    /// Determines if a user can perform an action (base on their roles).
    pub fn can(&self, permission: &Permission) -> bool {
        if !self.is_active() {
            return false;
        }
        for role in self.roles() {
            if role.can(permission) {
                return true;
            }
        }
        false
    }

    /// Check if this user can perform an action.
    pub fn access_check(&self, permission: Permission) -> Result<()> {
        if !self.can(&permission) {
            Err(Error::InsufficientPrivileges)?;
        }
        Ok(())
    }
}
