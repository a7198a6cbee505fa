//! Resolution driver: discovery → selection → command resolution.

use crate::domain::{Resolution, ResolvedCommand, SkipConfig};
use crate::error::Result;
use crate::services::discovery;
use crate::services::resolver::CommandResolver;
use crate::services::selector::{self, ListPicker};
use std::path::Path;

/// Run-mode resolution of the project rooted at `root`
pub fn resolve(root: &Path, skip: &SkipConfig, picker: &mut dyn ListPicker) -> Result<Resolution> {
    let candidates = discovery::discover(root, skip)?;
    tracing::debug!(
        "Discovered {} candidate(s) in {} class(es)",
        candidates.candidate_count(),
        candidates.len()
    );

    let Some(candidate) = selector::select(&candidates, picker)? else {
        return Ok(Resolution::Cancelled);
    };

    let resolver = CommandResolver::for_root(root)?;
    let command = resolver.resolve_run(candidate.class, &candidate.path)?;
    tracing::info!("Resolved {} entry point {:?}: {}", candidate.class, candidate.path, command);
    Ok(Resolution::Resolved(ResolvedCommand::Run(command)))
}

/// Build-mode resolution producing an argv that installs `target`
pub fn resolve_build(
    root: &Path,
    skip: &SkipConfig,
    target: &str,
    picker: &mut dyn ListPicker,
) -> Result<Resolution> {
    let candidates = discovery::discover_build_targets(root, skip)?;

    let Some(candidate) = selector::select(&candidates, picker)? else {
        return Ok(Resolution::Cancelled);
    };

    let resolver = CommandResolver::for_root(root)?;
    let command = ResolvedCommand::Build(resolver.resolve_build(
        candidate.class,
        &candidate.path,
        target,
    )?);
    tracing::info!("Resolved build for {:?}: {}", candidate.path, command);
    Ok(Resolution::Resolved(command))
}
