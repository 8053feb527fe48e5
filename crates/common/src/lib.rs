//! Common types and utilities for PR Rescue

pub mod config;
pub mod models;

pub use config::Config;
