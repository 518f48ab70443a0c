//! Bloglist core
//!
//! Write validation, collection aggregates and user registration rules.
//! Nothing in here touches the network or disk: storage and credential
//! hashing are collaborators passed in by the caller.

pub mod aggregate;
pub mod error;
pub mod hash;
pub mod identity;
pub mod memory;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
