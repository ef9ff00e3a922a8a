//! Content Registry
//!
//! Literal marketing copy and pricing for each page, as typed records.
//! Read-only once constructed.

pub mod types;
pub mod practice;
pub mod pages;
pub mod registry;

pub use types::*;
pub use registry::ContentRegistry;
