//! Shared infrastructure: errors, configuration, logging, and the text canvas

mod canvas;
mod config;
mod error;
pub mod logging;

pub use canvas::*;
pub use config::*;
pub use error::*;
pub use logging::{init_default_logging, init_logging, LogFormat};
