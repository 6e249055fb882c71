//! Shared test utilities for the rnta workspace.
//!
//! Dev-dependency only; never published.
//!
//! - [`fixtures`]: file contents for typical test app projects, usable with
//!   [`rnta_fs::MemoryFs`]
//! - [`project`]: [`TestProject`](project::TestProject), the same layouts on
//!   the real filesystem

pub mod fixtures;
pub mod project;

pub use project::TestProject;
