pub mod containment;
pub mod result;

pub use containment::{check_containment, find_char_offset};
pub use result::{FragmentCheck, Verdict};
