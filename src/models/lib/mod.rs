#[macro_use]
pub mod entity;
pub mod dated;
pub mod lookup;
pub mod meta;
pub mod property;
