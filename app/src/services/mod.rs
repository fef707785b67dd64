//! Pipeline services: image processing and the full run with transmission.

pub mod pipeline;
pub mod runner;
