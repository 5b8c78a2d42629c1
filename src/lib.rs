pub mod automaton;
pub mod core;
pub mod driver;
pub mod enumerator;
pub mod fixture;
pub mod hashed;
pub mod instrumentation;
pub mod matcher;

pub use automaton::{Automaton, Entry};
pub use crate::core::{Error, LongestShared, Removal, SharedMatch, StripConfig};
pub use driver::{StripOutcome, Stripper, strip_shared};
pub use enumerator::{Substrings, pattern_count, substrings};
pub use hashed::HashedSearch;
pub use matcher::AutomatonSearch;
