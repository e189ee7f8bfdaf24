//! Money is an amount in the register's accounting currency. We never do
//! floating point with money: amounts are decimals all the way down.

use crate::error::{Error, Result};
use rust_decimal::prelude::*;
#[cfg(feature = "with_serde")]
use serde::{Serialize, Deserialize};
use std::ops::{Add, Sub};

/// An amount of money.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with_serde", serde(transparent))]
pub struct Money(Decimal);

impl Money {
    pub fn new<T: Into<Decimal>>(amount: T) -> Self {
        Self(amount.into())
    }

    pub fn zero() -> Self {
        Self(Decimal::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.is_zero()
    }

    /// Return this amount, or an error if it's below zero. Costs can be zero
    /// (donated assets) but never negative.
    pub fn as_cost(self) -> Result<Self> {
        if self.is_negative() {
            Err(Error::NegativeCost)?;
        }
        Ok(self)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}
