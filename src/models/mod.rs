//! Models are the data structures of the asset register. Transactions take
//! models in and hand back [Modifications] describing what to persist.
//!
//! [Modifications]: struct.Modifications.html

#[macro_use]
pub mod lib;

load_models!{ pub mod }

use crate::{
    error::{Error, Result},
    models::lib::entity::Model,
};
use std::convert::TryFrom;

load_models!{ pub enum AnyModel }

/// The operations a transaction can ask storage to perform on a model.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Op {
    Create,
    Update,
    Delete,
}

/// A single operation on a single model.
#[derive(Clone, Debug, PartialEq, getset::Getters)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[getset(get = "pub")]
pub struct Modification {
    op: Op,
    model: AnyModel,
}

impl Modification {
    pub fn new<T: Into<AnyModel>>(op: Op, model: T) -> Self {
        Self { op, model: model.into() }
    }

    /// Split this modification into its operation and model.
    pub fn into_pair(self) -> (Op, AnyModel) {
        (self.op, self.model)
    }

    /// Unwrap the model, checking that it was given the operation we expect.
    /// Handy for pulling a freshly-created model out of a transaction result.
    pub fn expect_op<T: Model>(self, verify_op: Op) -> Result<T> {
        if self.op != verify_op {
            Err(Error::OpMismatch)?;
        }
        T::try_from(self.model)
    }
}

/// The ordered list of modifications a transaction produced. Storage is
/// expected to apply them all or none of them.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifications {
    modifications: Vec<Modification>,
}

impl Modifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a modification list holding one modification.
    pub fn new_single<T: Into<AnyModel>>(op: Op, model: T) -> Self {
        let mut mods = Self::new();
        mods.push(op, model);
        mods
    }

    pub fn push<T: Into<AnyModel>>(&mut self, op: Op, model: T) {
        self.modifications.push(Modification::new(op, model));
    }

    pub fn len(&self) -> usize {
        self.modifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifications.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Modification> {
        self.modifications.iter()
    }

    pub fn into_vec(self) -> Vec<Modification> {
        self.modifications
    }
}

impl IntoIterator for Modifications {
    type Item = Modification;
    type IntoIter = std::vec::IntoIter<Modification>;

    fn into_iter(self) -> Self::IntoIter {
        self.modifications.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{
            asset_class::AssetClass,
            project::{Project, ProjectID},
        },
        util::{self, test::*},
    };

    #[test]
    fn expects_ops() {
        let now = util::time::now();
        let project = make_project(&ProjectID::create(), "dig", date("2019-12-08"), None, &now);
        let mods = Modifications::new_single(Op::Create, project.clone());
        assert_eq!(mods.len(), 1);
        assert!(!mods.is_empty());

        let modification = mods.into_vec().remove(0);
        assert_eq!(modification.op(), &Op::Create);
        assert_eq!(modification.clone().expect_op::<Project>(Op::Create), Ok(project.clone()));
        assert_eq!(modification.clone().expect_op::<Project>(Op::Update), Err(Error::OpMismatch));
        assert_eq!(modification.clone().expect_op::<AssetClass>(Op::Create), Err(Error::WrongModelType));

        let (op, model) = modification.into_pair();
        assert_eq!(op, Op::Create);
        assert_eq!(model, AnyModel::Project(project));
    }

    #[test]
    fn keeps_order() {
        let now = util::time::now();
        let p1 = make_project(&ProjectID::create(), "first", date("2019-12-08"), None, &now);
        let p2 = make_project(&ProjectID::create(), "second", date("2019-12-08"), None, &now);
        let mut mods = Modifications::new();
        assert!(mods.is_empty());
        mods.push(Op::Create, p1.clone());
        mods.push(Op::Delete, p2.clone());
        let ops = mods.iter().map(|m| m.op().clone()).collect::<Vec<_>>();
        assert_eq!(ops, vec![Op::Create, Op::Delete]);
        let models = mods.into_iter().map(|m| m.into_pair().1).collect::<Vec<_>>();
        assert_eq!(models, vec![AnyModel::Project(p1), AnyModel::Project(p2)]);
    }
}
