// src/lib.rs

pub mod config;
pub mod console;
pub mod error;
pub mod ledger;
pub mod models;
pub mod profile;
pub mod quiz;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export specific items for convenience if needed
pub use error::{AppError, AppResult};
pub use state::AppState;
