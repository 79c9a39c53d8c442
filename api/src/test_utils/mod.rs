//! Test utilities
//!
//! Manual mock implementations of the port traits plus fixture factories.
//! State holds its ports as `Arc<dyn Trait>`, so the full router can be
//! built against these mocks for endpoint-level tests.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
