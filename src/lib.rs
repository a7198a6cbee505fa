//! auto-launcher: discover a project's entry point and launch it
//!
//! This crate walks a project tree, classifies files that look like program
//! entry points, and resolves the shell command that runs or builds the one
//! the user picks.

pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod ui;

pub use crate::config::LauncherConfig;
pub use crate::error::{LauncherError, Result};
