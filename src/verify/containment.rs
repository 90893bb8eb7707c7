//! Substring containment of fragments in the output string

use tracing::trace;

use super::result::{FragmentCheck, Verdict};

/// Test every fragment against `output`.
///
/// Containment is exact, case-sensitive, contiguous substring membership.
/// Every fragment is tested exactly once; a missing fragment never stops the
/// remaining checks.
///
/// # Arguments
/// * `output` - The candidate output string
/// * `fragments` - Required fragments, in report order
///
/// # Returns
/// A [`Verdict`] with one [`FragmentCheck`] per fragment and the character
/// length of `output`
pub fn check_containment(output: &str, fragments: &[String]) -> Verdict {
    let checks = fragments
        .iter()
        .map(|fragment| {
            let position = find_char_offset(output, fragment);
            trace!(fragment = %fragment, ?position, "checked fragment");
            FragmentCheck::new(fragment.as_str(), position)
        })
        .collect();

    Verdict::new(output.chars().count(), checks)
}

/// Character offset of the first occurrence of `needle` in `haystack`.
///
/// The empty needle is found at offset 0.
pub fn find_char_offset(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte_offset| haystack[..byte_offset].chars().count())
}
