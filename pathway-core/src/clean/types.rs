/// A lexically canonical request path: absolute, single separators, no dot
/// segments, no trailing separator except for the root path itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedPath(pub String);

impl CleanedPath {
    pub(crate) fn root() -> Self {
        CleanedPath("/".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Result of cleaning a raw path. There is no failure variant: every input
/// maps to a canonical path.
#[derive(Debug)]
pub enum CleanOutcome {
    /// The input was already canonical.
    Unchanged(CleanedPath),

    /// The input was rewritten into canonical form.
    Rewritten(CleanedPath),
}

impl CleanOutcome {
    pub fn path(&self) -> &CleanedPath {
        match self {
            CleanOutcome::Unchanged(p) | CleanOutcome::Rewritten(p) => p,
        }
    }

    pub fn into_path(self) -> CleanedPath {
        match self {
            CleanOutcome::Unchanged(p) | CleanOutcome::Rewritten(p) => p,
        }
    }

    pub fn was_rewritten(&self) -> bool {
        matches!(self, CleanOutcome::Rewritten(_))
    }
}
