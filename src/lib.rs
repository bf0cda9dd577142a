// src/lib.rs
pub mod cli;
pub mod core;
pub mod errors;
pub mod models;
pub mod utils;

pub use cli::{Args, Command, dispatch, run};
pub use crate::core::config::Config;
pub use crate::core::install::{RULE_FILE_NAME, install_rule};
pub use crate::core::store::Store;
pub use errors::{InstallError, StoreError};
pub use models::Item;
