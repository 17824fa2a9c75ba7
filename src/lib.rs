pub mod api;
pub mod batch;
pub mod cli;
pub mod config;
pub mod output;
pub mod source;

pub use api::{Client, ClientConfig, Lookup};
pub use config::Config;
pub use source::HashSource;
