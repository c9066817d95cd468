//! CLI commands

pub mod check;
pub mod clean;
pub mod config;
pub mod list;
pub mod render;
