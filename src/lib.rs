pub mod catalog;
pub mod cli;
pub mod color;
pub mod config;
pub mod errors;
pub mod matcher;
mod metrics;
pub mod palette;
mod server;
pub mod utils;

pub use catalog::{Catalog, SneakerRecord};
pub use config::Opts;
