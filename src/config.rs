//! Settings the host passes into the core. There aren't many: the core is
//! mostly rules, and rules aren't configurable.

use derive_builder::Builder;
use getset::Getters;
#[cfg(feature = "with_serde")]
use serde::{Serialize, Deserialize};

/// How auto-generated asset numbers look.
#[derive(Clone, Debug, PartialEq, Getters, Builder)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[builder(pattern = "owned", setter(into))]
#[getset(get = "pub")]
pub struct AssetNumbering {
    /// Prepended to every asset number
    prefix: String,
    /// The sequence is zero-padded to at least this many digits
    width: usize,
}

impl AssetNumbering {
    pub fn builder() -> AssetNumberingBuilder {
        AssetNumberingBuilder::default()
    }

    /// Format a sequence value into an asset number.
    pub fn format(&self, seq: u64) -> String {
        format!("{}{:0width$}", self.prefix, seq, width = self.width)
    }
}

impl Default for AssetNumbering {
    fn default() -> Self {
        Self {
            prefix: "A".into(),
            width: 6,
        }
    }
}

/// Top-level configuration for the core.
#[derive(Clone, Debug, Default, PartialEq, Getters, Builder)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[builder(pattern = "owned", setter(into))]
#[getset(get = "pub")]
pub struct Config {
    #[builder(default)]
    #[cfg_attr(feature = "with_serde", serde(default))]
    numbering: AssetNumbering,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}
