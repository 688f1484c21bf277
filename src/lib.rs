pub mod adapter;
pub mod bedrock;
pub mod config;
pub mod error;
pub mod server;

pub use error::{Error, Result};
