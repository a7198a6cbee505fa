//! Domain entities for auto-launcher.
//!
//! This module contains the core data model:
//! - LanguageClass: A supported toolchain and its detection/command table
//! - Candidate / CandidateSet: Discovered entry points
//! - ResolvedCommand / Resolution: The outcome of a resolution pass
//! - SkipConfig: Directory names pruned from discovery

mod candidate;
mod command;
mod language;
mod skip;

pub use candidate::{Candidate, CandidateSet};
pub use command::{Resolution, ResolvedCommand};
pub use language::{BuildTemplate, LanguageClass, LanguageDefinition, ARGS_PLACEHOLDER};
pub use skip::SkipConfig;
