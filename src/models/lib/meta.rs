//! Schema descriptors for our models: what an entity and each of its
//! properties are called, and which properties are required, read-only or
//! carry a date without a time component.
//!
//! Each model module defines a `META` static that `entity_model!` hooks up to
//! `Model::meta()`.

use crate::error::{Error, Result};

/// Describes a single property of a model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyMeta {
    /// The property's name as it appears in the model (and in errors)
    pub name: &'static str,
    /// Human-readable title
    pub title: &'static str,
    /// Human-readable description
    pub desc: &'static str,
    /// Must be non-empty for the model to be saved
    pub required: bool,
    /// Assigned by the system, never by the caller
    pub readonly: bool,
    /// A calendar date with no time component
    pub date_only: bool,
}

impl PropertyMeta {
    pub const fn new(name: &'static str, title: &'static str, desc: &'static str) -> Self {
        Self {
            name,
            title,
            desc,
            required: false,
            readonly: false,
            date_only: false,
        }
    }

    pub const fn required(self) -> Self {
        Self { required: true, ..self }
    }

    pub const fn readonly(self) -> Self {
        Self { readonly: true, ..self }
    }

    pub const fn date_only(self) -> Self {
        Self { date_only: true, ..self }
    }
}

/// Describes a model type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntityMeta {
    /// What we call one of these, ie "Asset"
    pub title: &'static str,
    pub desc: &'static str,
    /// What we call the key that identifies one of these to a human
    pub key_title: &'static str,
    pub properties: &'static [PropertyMeta],
}

impl EntityMeta {
    /// Find a property descriptor by name.
    pub fn property(&self, name: &str) -> Option<&'static PropertyMeta> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Names of all required properties.
    pub fn required(&self) -> impl Iterator<Item = &'static str> {
        self.properties.iter().filter(|p| p.required).map(|p| p.name)
    }

    /// Check that every required property is filled in. `is_present` is asked
    /// about each required property by name.
    pub fn check_required<F>(&self, is_present: F) -> Result<()>
        where F: Fn(&str) -> bool,
    {
        let missing = self.required()
            .filter(|name| !is_present(name))
            .map(|name| name.to_string())
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            Err(Error::MissingFields(missing))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static META: EntityMeta = EntityMeta {
        title: "Widget",
        desc: "A widget",
        key_title: "Widget Code",
        properties: &[
            PropertyMeta::new("code", "Code", "The widget code").required().readonly(),
            PropertyMeta::new("desc", "Description", "What it is").required(),
            PropertyMeta::new("made", "Made", "When it was made").date_only(),
        ],
    };

    #[test]
    fn finds_properties() {
        let code = META.property("code").unwrap();
        assert!(code.required);
        assert!(code.readonly);
        assert!(!code.date_only);
        assert!(META.property("made").unwrap().date_only);
        assert!(META.property("color").is_none());
        assert_eq!(META.required().collect::<Vec<_>>(), vec!["code", "desc"]);
    }

    #[test]
    fn checks_required() {
        assert_eq!(META.check_required(|_| true), Ok(()));
        let res = META.check_required(|name| name != "desc");
        assert_eq!(res, Err(Error::MissingFields(vec!["desc".into()])));
        let res = META.check_required(|_| false);
        assert_eq!(res, Err(Error::MissingFields(vec!["code".into(), "desc".into()])));
    }
}
