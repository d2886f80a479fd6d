//! Library side of the `docsplit` command line.

pub mod config;
pub mod logging;
pub mod pipeline;
