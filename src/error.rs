//! The error module holds the crate-wide error type. Every transaction and
//! mutation returns these as values: a failed operation produces no
//! modifications and leaves the caller's models untouched.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// An acquire date falls outside of the linked project's active period
    #[error("date outside of project period")]
    AcquireDateOutsideProjectPeriod,
    /// A builder failed to construct a model
    #[error("error building model: {0}")]
    BuilderFailed(String),
    /// An object with the same unique key already exists
    #[error("{0} with key {1} already exists")]
    DuplicateKey(String, String),
    /// The caller lacks the permission for this action
    #[error("insufficient privileges")]
    InsufficientPrivileges,
    /// A project would finish before it starts
    #[error("project finish date {finish} is before its start date {start}")]
    InvalidProjectPeriod {
        start: NaiveDate,
        finish: NaiveDate,
    },
    /// An operation assignment would end before it starts
    #[error("operation end date {end} is before its start date {start}")]
    InvalidOperationPeriod {
        start: NaiveDate,
        end: NaiveDate,
    },
    /// Required properties were left empty
    #[error("missing required properties: {0:?}")]
    MissingFields(Vec<String>),
    /// Costs cannot go below zero
    #[error("cost cannot be negative")]
    NegativeCost,
    /// The object being acted on is deleted
    #[error("{0} is deleted")]
    ObjectIsDeleted(String),
    /// The object being referenced is inactive (or deleted)
    #[error("{0} is inactive")]
    ObjectIsInactive(String),
    /// A referenced object could not be found
    #[error("{0} was not found")]
    ObjectNotFound(String),
    /// A modification was expected to carry a different operation
    #[error("operation mismatch")]
    OpMismatch,
    /// A model passed in does not belong to the subject it was passed with
    #[error("{0} does not belong to the given subject")]
    ReferenceMismatch(String),
    /// An update was computed against an outdated version of a model
    #[error("{0} {1} was modified by someone else")]
    StaleVersion(String, String),
    /// A wrapped model was unwrapped into the wrong model type
    #[error("wrong model type")]
    WrongModelType,
}

pub type Result<T> = std::result::Result<T, Error>;
