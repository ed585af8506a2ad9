pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod gui;
pub mod overlay;
pub mod state;

pub use error::{Error, Result};
