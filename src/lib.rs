//! Verify that a candidate superstring contains every required fragment.

pub mod commands;
pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod report;
pub mod verify;
