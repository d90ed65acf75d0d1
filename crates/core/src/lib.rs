//! Shared domain types for the Embr sample service.
//!
//! Holds the primitives every other crate depends on: ID and timestamp
//! aliases, the domain error enum, and pure validation helpers.

pub mod error;
pub mod todo;
pub mod types;
