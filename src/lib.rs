pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod formats;
pub mod models;
pub mod services;

#[cfg(test)]
mod test;

pub use error::{Result, TrackerError};
