#[cfg(feature = "cli")]
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use domain::model::{Color, Record};
pub use domain::ports::Printable;
pub use utils::error::{RecordError, Result};
