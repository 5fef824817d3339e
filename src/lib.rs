pub mod commands;
pub mod error;
pub mod file_writer;
pub mod mock_server;
pub mod models;
pub mod random;
pub mod tsv;

pub use error::{Error, Result};
