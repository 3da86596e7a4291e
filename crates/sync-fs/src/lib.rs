//! Filesystem primitives for rules-sync
//!
//! Provides slash-normalized paths, atomic writes that create missing parent
//! directories, and format-detecting config loading.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::{ConfigFormat, ConfigStore};
pub use error::{Error, Result};
pub use path::NormalizedPath;
