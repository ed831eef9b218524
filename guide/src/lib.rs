//! Home buying guide: ordered steps, their checklists, and derived progress.
//!
//! The crate is pure and does no I/O:
//!
//! - **[`model`]**: typed steps, checklist items, resources, and the response
//!   views built from them.
//! - **[`seed`]**: the built-in guide content loaded at startup.
//! - **[`store`]**: the mutable in-memory [`GuideStore`] with id-based lookup.
//! - **[`progress`]**: completion percentages derived from checklist state.
//! - **[`api`]**: the query/command operations the HTTP layer exposes.

pub mod api;
pub mod error;
pub mod invariants;
pub mod model;
pub mod progress;
pub mod seed;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::{GuideError, SeedError};
pub use store::GuideStore;
