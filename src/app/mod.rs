pub mod cli;
pub mod commands;
pub mod config;
mod context;

pub use config::AppConfig;
pub use context::AppContext;
