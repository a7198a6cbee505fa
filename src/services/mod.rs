//! Discovery and resolution services for auto-launcher.
//!
//! This module contains:
//! - classifier: Entry-point detection for single files
//! - discovery: Project walk producing a CandidateSet
//! - resolver: Run/build command templates
//! - selector: Auto-pick or interactive choice between candidates
//! - driver: End-to-end run and build resolution
//! - runfile: Persisted run command
//! - process: Launching resolved commands

pub mod classifier;
pub mod discovery;
pub mod driver;
pub mod process;
pub mod resolver;
pub mod runfile;
pub mod selector;

pub use driver::{resolve, resolve_build};
pub use process::ProcessService;
pub use resolver::CommandResolver;
pub use runfile::RunFile;
pub use selector::{ListPicker, PickedRow};
