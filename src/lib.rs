// Public API for integration tests and embedding in a presentation layer

pub mod catalog;
pub mod config;
pub mod driver;
pub mod error;
pub mod game;
pub mod protocol;
pub mod state;
pub mod types;
