use std::borrow::Cow;

use thiserror::Error;

/// Errors raised while configuring a strip run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("maximum pattern length must be at least 1")]
    ZeroMaxLen,
}

/// The best shared substring found in one round.
///
/// `target_start` is where the match begins in the target; `origin` is the
/// source offset recorded with the pattern when it was registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharedMatch {
    pub target_start: usize,
    pub len: usize,
    pub origin: usize,
}

impl SharedMatch {
    pub fn target_range(&self) -> std::ops::Range<usize> {
        self.target_start..self.target_start + self.len
    }
}

/// One removal performed by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    /// The removed bytes.
    pub text: Vec<u8>,
    /// Offset in the target at the time of removal.
    pub target_offset: usize,
    /// Offset in the source that was actually removed (first literal occurrence).
    pub source_offset: usize,
    /// Offset recorded with the winning pattern when the automaton was built.
    pub origin_offset: usize,
    /// Source length after the removal.
    pub source_len: usize,
    /// Target length after the removal.
    pub target_len: usize,
}

impl Removal {
    /// Lossy UTF-8 view of the removed text, for reporting.
    pub fn text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }
}

/// Configuration for a strip run.
#[derive(Debug, Clone)]
pub struct StripConfig {
    /// Longest substring of the source that gets indexed each round.
    pub max_len: usize,
}

impl StripConfig {
    pub fn new(max_len: usize) -> Result<Self, Error> {
        let config = StripConfig { max_len };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.max_len == 0 {
            return Err(Error::ZeroMaxLen);
        }
        Ok(())
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        StripConfig { max_len: 6 }
    }
}

/// Trait describing a longest-shared-substring search strategy.
///
/// Implementations must agree on the tie-break: among matches of maximal
/// length, the one starting earliest in the target wins, and its origin is
/// the leftmost occurrence of that text in the source.
pub trait LongestShared {
    /// Find the longest substring of `source` (at most `max_len` bytes) that
    /// occurs in `target`.
    fn longest_shared(source: &[u8], target: &[u8], max_len: usize) -> Option<SharedMatch>;

    /// Short name used in logs and reports.
    fn name() -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_max_len_is_rejected() {
        assert_eq!(StripConfig::new(0).unwrap_err(), Error::ZeroMaxLen);
        assert!(StripConfig::new(1).is_ok());
        assert!(StripConfig::default().validate().is_ok());
    }

    #[test]
    fn text_lossy_replaces_invalid_bytes() {
        let removal = Removal {
            text: vec![b'a', 0xff],
            target_offset: 0,
            source_offset: 0,
            origin_offset: 0,
            source_len: 0,
            target_len: 0,
        };
        assert_eq!(removal.text_lossy(), "a\u{fffd}");
    }
}
