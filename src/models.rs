// src/models.rs
pub mod item;

pub use item::Item;
