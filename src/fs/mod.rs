pub mod input;

pub use input::{parse_candidate, parse_fragments, read_candidate, read_fragments};
