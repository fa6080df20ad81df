pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interface;

pub mod config;

pub use error::{HogError, Result};
