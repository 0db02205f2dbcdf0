pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::http::ApiClient;
pub use crate::config::{cli::LocalStorage, toml_config::ClientConfig};
pub use crate::core::{
    actions::Action,
    currency::{canonicalize, sanitize, CurrencyInput},
    handler::{FormHandler, Submission},
    status::StatusRegion,
};
pub use crate::utils::error::{ClientError, Result};
