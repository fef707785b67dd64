//! Image to Scope: turn a picture into a packed 1-bit frame for an
//! oscilloscope point display and send it over a serial link.
//!
//! The library half holds the run configuration and the pipeline; the
//! `image-to-scope` binary is a thin command-line front end over it.

pub mod config;
pub mod error;
pub mod services;

pub use config::{AppConfig, RunConfig, Selection};
pub use error::RunError;
pub use services::pipeline::{ProcessedFrame, process, process_image};
pub use services::runner::{RunReport, execute};
