// Solace - keyword-driven wellness companion
// Library exports

// Core engine
pub mod catalog;
pub mod companion;
pub mod crisis;
pub mod matcher;
pub mod session;

// Screens and navigation
pub mod app;
pub mod platform;
pub mod screens;

// Front-end and ambient
pub mod cli;
pub mod config;
pub mod errors;

pub use errors::{Result, SolaceError};
