//! Terminal artifacts of a resolution pass.

/// A fully substituted command ready to hand off
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedCommand {
    /// Shell text persisted to the run file
    Run(String),
    /// Argument vector executed directly
    Build(Vec<String>),
}

impl std::fmt::Display for ResolvedCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Run(command) => write!(f, "{}", command),
            Self::Build(argv) => write!(f, "{}", argv.join(" ")),
        }
    }
}

/// Outcome of a resolution pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(ResolvedCommand),
    /// The user quit the selection list
    Cancelled,
}
