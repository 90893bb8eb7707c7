//! Result types for fragment containment checks

use serde::Serialize;

/// Outcome of testing a single fragment against the output string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragmentCheck {
    /// The fragment as read from the fragment list
    pub fragment: String,
    /// Character offset of the first occurrence, `None` if not contained
    pub position: Option<usize>,
}

impl FragmentCheck {
    pub fn new(fragment: impl Into<String>, position: Option<usize>) -> Self {
        Self {
            fragment: fragment.into(),
            position,
        }
    }

    pub fn is_contained(&self) -> bool {
        self.position.is_some()
    }
}

/// Aggregate result over the whole fragment list.
///
/// Holds one [`FragmentCheck`] per fragment, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Length of the output string in characters
    pub output_len: usize,
    pub checks: Vec<FragmentCheck>,
}

impl Verdict {
    pub fn new(output_len: usize, checks: Vec<FragmentCheck>) -> Self {
        Self { output_len, checks }
    }

    /// True when every fragment is contained (vacuously true for an empty list)
    pub fn all_contained(&self) -> bool {
        self.checks.iter().all(FragmentCheck::is_contained)
    }

    /// Fragments that were not found, in input order
    pub fn failures(&self) -> impl Iterator<Item = &FragmentCheck> {
        self.checks.iter().filter(|c| !c.is_contained())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn contained_count(&self) -> usize {
        self.checks.len() - self.failure_count()
    }

    /// Sum of fragment lengths in characters.
    ///
    /// Compared with `output_len` this shows how much overlap a superstring
    /// achieved over plain concatenation.
    pub fn total_fragment_len(&self) -> usize {
        self.checks.iter().map(|c| c.fragment.chars().count()).sum()
    }
}
