//! UI components for auto-launcher.
//!
//! This module contains:
//! - input: Keyboard input handling
//! - picker: Terminal-backed candidate picker
//! - widgets: Reusable UI widgets

pub mod input;
pub mod picker;
pub mod widgets;

pub use picker::TerminalPicker;
