pub mod auth;
pub mod config;
pub mod error;
pub mod llm;
pub mod planner;
pub mod server;
pub mod storage;

pub use error::{Error, Result};
