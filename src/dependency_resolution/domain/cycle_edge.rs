use super::PackageName;
use std::fmt;

/// CycleEdge value object: an unordered pair of packages joined by a cycle
///
/// The pair is normalized so the lexicographically smaller name comes first,
/// which makes `(A, B)` and `(B, A)` the same value in ordered sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CycleEdge {
    first: PackageName,
    second: PackageName,
}

impl CycleEdge {
    pub fn new(a: PackageName, b: PackageName) -> Self {
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.first == self.second
    }
}

impl fmt::Display for CycleEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.first, self.second)
    }
}
