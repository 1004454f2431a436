//! Storage layer providing CRUD operations on top of `models`.
//! - Separates data access from HTTP routing.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod cache;
pub mod errors;
pub mod memory;
pub mod todos;
