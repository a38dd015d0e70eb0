//! Settings loading from the filesystem.
//!
//! Pure schema parsing lives in `domain::configuration`.

mod load_config;

pub use load_config::{DEFAULT_CONFIG_FILE, load_config};
