//! Configuration: setting defaults, validation, environment loading and the
//! per-run configuration built from the user's selection.

pub mod app_config;
pub mod defaults;
pub mod run_config;
pub mod validation;

pub use app_config::AppConfig;
pub use run_config::{RunConfig, Selection, parse_resolution};
