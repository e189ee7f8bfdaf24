//! The access module defines the various top-level permissions within the
//! system and the roles that contain those permissions.
//!
//! Roles can have multiple Permission objects. Permissions are additive,
//! meaning everyone starts with *no* permissions (returning
//! [Error::InsufficientPrivileges][err_priv]) and permissions are added
//! (allowed) from there.
//!
//! Authenticating who the caller is happens outside of this crate. We only
//! decide what an already-identified [User] is allowed to do.
//!
//! [err_priv]: ../error/enum.Error.html#variant.InsufficientPrivileges
//! [User]: ../models/user/struct.User.html

#[cfg(feature = "with_serde")]
use serde::{Serialize, Deserialize};

/// Define the system-wide permissions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub enum Permission {
    All,
    AllBut(Vec<Permission>),

    AssetCreate,
    AssetDelete,
    AssetUpdate,

    AssetClassCreate,
    AssetClassDelete,
    AssetClassUpdate,

    AssetFinDetCreate,
    AssetFinDetUpdate,

    AssetOwnershipCreate,
    AssetOwnershipDelete,

    AssetTypeCreate,
    AssetTypeDelete,
    AssetTypeUpdate,

    AssetTypeOperationCreate,
    AssetTypeOperationDelete,

    AssetTypeOwnershipCreate,
    AssetTypeOwnershipDelete,

    ProjectCreate,
    ProjectDelete,
    ProjectUpdate,
}

/// Define the system-wide roles users can have.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub enum Role {
    SuperAdmin,
    /// Maintains the asset register and its classification tables
    AssetManager,
    /// Runs capital projects and attributes acquisitions to them
    ProjectManager,
    /// Can look, can't touch
    User,
}

impl Role {
    /// For a given role, return the permissions that role has access to.
    pub fn permissions(&self) -> Vec<Permission> {
        match *self {
            Role::SuperAdmin => {
                vec![Permission::All]
            }
            Role::AssetManager => {
                vec![Permission::AllBut(vec![
                    Permission::ProjectCreate,
                    Permission::ProjectDelete,
                    Permission::ProjectUpdate,
                ])]
            }
            Role::ProjectManager => {
                vec![
                    Permission::ProjectCreate,
                    Permission::ProjectDelete,
                    Permission::ProjectUpdate,
                    Permission::AssetFinDetUpdate,
                ]
            }
            Role::User => {
                vec![]
            }
        }
    }

    /// Determine if a role has a specific permission.
    pub fn can(&self, perm: &Permission) -> bool {
        for p in &self.permissions() {
            match p {
                Permission::All => {
                    return true;
                }
                Permission::AllBut(x) => {
                    if x.contains(perm) {
                        return false;
                    }
                    return true;
                }
                _ => {
                    if p == perm {
                        return true
                    }
                }
            }
        }
        false
    }
}
