//! Algorithm name lookup shared by the generator and solver registries.

use std::fmt;

/// Which registry a name was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Generation,
    Search,
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmKind::Generation => write!(f, "maze generation"),
            AlgorithmKind::Search => write!(f, "search"),
        }
    }
}

/// Returned when a name does not match any registered algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    pub kind: AlgorithmKind,
    pub name: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} algorithm '{}'", self.kind, self.name)
    }
}

impl std::error::Error for ParseAlgorithmError {}

/// Case-folds a name and drops spaces, `-` and `_`, so that "Greedy Best-First",
/// "greedy_best_first" and "GREEDYBESTFIRST" all compare equal.
pub(crate) fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
