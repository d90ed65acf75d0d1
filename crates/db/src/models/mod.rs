//! Row structs and request DTOs.
//!
//! Row structs derive `FromRow` and serialize with camelCase field names,
//! matching the JSON wire contract.

pub mod post;
pub mod stats;
pub mod todo;
pub mod user;
