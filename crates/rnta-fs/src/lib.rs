//! Filesystem layer for the test app configuration engine
//!
//! Every operation that touches the disk goes through the [`FileSystem`]
//! capability so that resolution logic can run against [`RealFs`] in
//! production and [`MemoryFs`] in tests.

pub mod config;
pub mod error;
pub mod fs;
pub mod io;
pub mod locate;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use fs::{FileSystem, MemoryFs, RealFs};
pub use locate::{find_file, find_nearest};
pub use path::NormalizedPath;
