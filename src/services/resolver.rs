//! Maps a classified candidate to the command that runs or builds it.

use crate::domain::{BuildTemplate, LanguageClass, ARGS_PLACEHOLDER};
use crate::error::{LauncherError, Result};
use regex::{Captures, Regex};
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

/// Fills the language table's run and build templates for concrete paths.
///
/// `project_name` names Docker images; it is fixed at construction so the
/// same inputs always produce the same command.
#[derive(Debug, Clone)]
pub struct CommandResolver {
    project_name: String,
}

impl CommandResolver {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
        }
    }

    /// Resolver whose project name is the base name of `root`
    pub fn for_root(root: &Path) -> Result<Self> {
        let root = root.canonicalize()?;
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string());
        Ok(Self::new(name))
    }

    #[cfg(test)]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Shell command that runs `path` as a `class` program.
    ///
    /// Placeholders are filled in a single pass, so text that looks like a
    /// placeholder inside a substituted value is kept literally.
    pub fn resolve_run(&self, class: LanguageClass, path: &Path) -> Result<String> {
        static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
        let re = PLACEHOLDER.get_or_init(|| {
            Regex::new(r"\{(path|dir|project|args)\}").expect("placeholder pattern is valid")
        });

        let template = class
            .definition()
            .run
            .ok_or(LauncherError::CommandNotFound)?;
        let command = re.replace_all(template, |caps: &Captures| match &caps[1] {
            "path" => path.to_string_lossy().into_owned(),
            "dir" => dir_prefix(path),
            "project" => self.project_name.clone(),
            _ => ARGS_PLACEHOLDER.to_string(),
        });
        Ok(command.into_owned())
    }

    /// Argument vector that builds `path` into an installable `target`
    pub fn resolve_build(
        &self,
        class: LanguageClass,
        path: &Path,
        target: &str,
    ) -> Result<Vec<String>> {
        let argv = match class.build_template() {
            Some(BuildTemplate::GoBuild) => vec![
                "go".to_string(),
                "build".to_string(),
                "-o".to_string(),
                target.to_string(),
                go_build_dir(path),
            ],
            Some(BuildTemplate::CargoInstall) => vec![
                "cargo".to_string(),
                "install".to_string(),
                "--path".to_string(),
                cargo_project_root(path).to_string_lossy().into_owned(),
            ],
            Some(BuildTemplate::MakeInstall) => vec!["make".to_string(), "install".to_string()],
            None => return Err(LauncherError::CommandNotFound),
        };
        Ok(argv)
    }
}

/// Parent directory with a trailing separator, empty for top-level files
fn dir_prefix(path: &Path) -> String {
    match parent_dir(path) {
        Some(parent) => format!("{}/", parent.to_string_lossy()),
        None => String::new(),
    }
}

/// Non-trivial parent of a path (`None` for `main.go` or `./main.go`)
fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty() && *p != Path::new("."))
}

/// Package pattern for `go build`: `./<dir>/...` for nested files, `.` at top level
fn go_build_dir(path: &Path) -> String {
    match parent_dir(path) {
        Some(parent) if parent.is_absolute() => format!("{}/...", parent.to_string_lossy()),
        Some(parent) => format!("./{}/...", parent.to_string_lossy()),
        None => ".".to_string(),
    }
}

/// Directory containing the first `src` component, `.` when there is none
fn cargo_project_root(path: &Path) -> PathBuf {
    let mut root = PathBuf::new();
    for component in path.components() {
        if component == Component::Normal(OsStr::new("src")) {
            if root.as_os_str().is_empty() {
                break;
            }
            return root;
        }
        root.push(component);
    }
    PathBuf::from(".")
}
