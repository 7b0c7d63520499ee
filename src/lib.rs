pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod interpret;
pub mod ops;
pub mod progress;

// Re-export commonly used types
pub use client::{Client, Method, Request, Response};
pub use config::Config;
pub use error::LarcError;
pub use interpret::Lookup;
