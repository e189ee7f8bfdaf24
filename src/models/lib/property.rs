//! Property mutation. A `Property` describes one mutable property of a model
//! along with the hooks that guard it:
//!
//! - *before-change* validators look at the candidate value and may reject it,
//!   in which case the model is not touched at all.
//! - *after-change* definers run once the value is assigned and may derive
//!   other properties (or re-validate them). If a definer fails, the model is
//!   rolled back to what it was before the assignment.
//!
//! Assigning the value a property already holds is a no-op: no hooks run and
//! the property is reported as unchanged.

use crate::{
    error::Result,
    models::lib::{
        lookup::Lookup,
        meta::PropertyMeta,
    },
};
use tracing::{debug, warn};

/// Validates a candidate value before it is assigned.
pub type BeforeChange<M, V> = fn(&M, &V, &dyn Lookup) -> Result<()>;

/// Runs after a value is assigned.
pub type AfterChange<M, V> = fn(&mut M, &V, &dyn Lookup) -> Result<()>;

/// The outcome of a successful assignment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Assigned {
    /// The property now holds the new value
    Changed,
    /// The property already held this value, nothing happened
    Unchanged,
}

impl Assigned {
    pub fn is_changed(&self) -> bool {
        *self == Assigned::Changed
    }
}

/// A mutable property of model `M` holding values of type `V`.
pub struct Property<M, V> {
    meta: &'static PropertyMeta,
    get: fn(&M) -> &V,
    set: fn(&mut M, V) -> &mut M,
    before_change: Vec<BeforeChange<M, V>>,
    after_change: Vec<AfterChange<M, V>>,
}

impl<M, V> Property<M, V>
    where M: Clone,
          V: Clone + PartialEq + std::fmt::Debug,
{
    pub fn new(meta: &'static PropertyMeta, get: fn(&M) -> &V, set: fn(&mut M, V) -> &mut M) -> Self {
        Self {
            meta,
            get,
            set,
            before_change: vec![],
            after_change: vec![],
        }
    }

    /// Add a validator. Validators run in the order they were added.
    pub fn before_change(mut self, hook: BeforeChange<M, V>) -> Self {
        self.before_change.push(hook);
        self
    }

    /// Add a definer. Definers run in the order they were added.
    pub fn after_change(mut self, hook: AfterChange<M, V>) -> Self {
        self.after_change.push(hook);
        self
    }

    pub fn meta(&self) -> &'static PropertyMeta {
        self.meta
    }

    /// Grab the property's current value off a model.
    pub fn get<'a>(&self, model: &'a M) -> &'a V {
        (self.get)(model)
    }

    /// Assign `value` to this property on `model`, running all hooks.
    ///
    /// On error the model is exactly as it was before the call.
    pub fn assign(&self, model: &mut M, value: V, lookup: &dyn Lookup) -> Result<Assigned> {
        if (self.get)(model) == &value {
            debug!("{}: value {:?} unchanged, skipping", self.meta.name, value);
            return Ok(Assigned::Unchanged);
        }
        for validate in &self.before_change {
            if let Err(err) = validate(model, &value, lookup) {
                warn!("{}: rejected {:?}: {}", self.meta.name, value, err);
                return Err(err);
            }
        }
        let snapshot = model.clone();
        (self.set)(model, value.clone());
        for define in &self.after_change {
            if let Err(err) = define(model, &value, lookup) {
                warn!("{}: reverting {:?}: {}", self.meta.name, value, err);
                *model = snapshot;
                return Err(err);
            }
        }
        debug!("{}: assigned {:?}", self.meta.name, value);
        Ok(Assigned::Changed)
    }
}
