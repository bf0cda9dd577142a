// src/core.rs
pub mod config;
pub mod install;
pub mod store;
