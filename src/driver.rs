use std::iter::FusedIterator;
use std::marker::PhantomData;

use log::{debug, warn};
use memchr::memmem;

use crate::core::{Error, LongestShared, Removal, StripConfig};
use crate::matcher::AutomatonSearch;

/// Final state of a completed strip run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutcome {
    pub removals: Vec<Removal>,
    pub source: Vec<u8>,
    pub target: Vec<u8>,
    /// Rounds executed, including the final one that found nothing.
    pub rounds: usize,
}

/// Owns a source/target pair and strips their longest shared substring once
/// per round.
///
/// Each call to `next` runs one round: a fresh search over the current
/// strings, then removal of the match from both. `None` means no shared
/// substring remains; the iterator stays exhausted afterwards.
#[derive(Debug)]
pub struct Stripper<S = AutomatonSearch> {
    source: Vec<u8>,
    target: Vec<u8>,
    config: StripConfig,
    rounds: usize,
    finished: bool,
    _strategy: PhantomData<S>,
}

impl Stripper<AutomatonSearch> {
    pub fn new(
        source: impl AsRef<[u8]>,
        target: impl AsRef<[u8]>,
        config: StripConfig,
    ) -> Result<Self, Error> {
        Self::with_strategy(source, target, config)
    }
}

impl<S: LongestShared> Stripper<S> {
    /// Build a stripper that searches with strategy `S`.
    pub fn with_strategy(
        source: impl AsRef<[u8]>,
        target: impl AsRef<[u8]>,
        config: StripConfig,
    ) -> Result<Self, Error> {
        config.validate()?;
        Ok(Stripper {
            source: source.as_ref().to_vec(),
            target: target.as_ref().to_vec(),
            config,
            rounds: 0,
            finished: false,
            _strategy: PhantomData,
        })
    }

    pub fn source(&self) -> &[u8] {
        &self.source
    }

    pub fn target(&self) -> &[u8] {
        &self.target
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Run every remaining round and return the final state.
    pub fn run(mut self) -> StripOutcome {
        let removals: Vec<Removal> = self.by_ref().collect();
        StripOutcome {
            removals,
            source: self.source,
            target: self.target,
            rounds: self.rounds,
        }
    }

    fn round(&mut self) -> Option<Removal> {
        self.rounds += 1;
        crate::instrumentation::add_round();

        let Some(found) = S::longest_shared(&self.source, &self.target, self.config.max_len) else {
            debug!(
                "round {} ({}): no shared substring, source={} target={}",
                self.rounds,
                S::name(),
                self.source.len(),
                self.target.len()
            );
            return None;
        };

        let text = self.target[found.target_range()].to_vec();
        // Relocate by literal search; this is the first occurrence, which is
        // also the origin recorded for the winning pattern.
        let Some(located) = memmem::find(&self.source, &text) else {
            warn!(
                "round {}: matched {:?} is missing from source, stopping",
                self.rounds,
                String::from_utf8_lossy(&text)
            );
            return None;
        };

        self.target.drain(found.target_range());
        self.source.drain(located..located + found.len);

        debug!(
            "round {} ({}): removed {:?} at target {} / source {}",
            self.rounds,
            S::name(),
            String::from_utf8_lossy(&text),
            found.target_start,
            located
        );

        Some(Removal {
            text,
            target_offset: found.target_start,
            source_offset: located,
            origin_offset: found.origin,
            source_len: self.source.len(),
            target_len: self.target.len(),
        })
    }
}

impl<S: LongestShared> Iterator for Stripper<S> {
    type Item = Removal;

    fn next(&mut self) -> Option<Removal> {
        if self.finished {
            return None;
        }
        let removal = self.round();
        if removal.is_none() {
            self.finished = true;
        }
        removal
    }
}

impl<S: LongestShared> FusedIterator for Stripper<S> {}

/// Strip shared substrings of up to `max_len` bytes from `source` and
/// `target` until none remain.
pub fn strip_shared(
    source: impl AsRef<[u8]>,
    target: impl AsRef<[u8]>,
    max_len: usize,
) -> Result<StripOutcome, Error> {
    Ok(Stripper::new(source, target, StripConfig::new(max_len)?)?.run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SharedMatch;

    // Reports a match the source cannot contain.
    struct Phantom;

    impl LongestShared for Phantom {
        fn longest_shared(_: &[u8], target: &[u8], _: usize) -> Option<SharedMatch> {
            (!target.is_empty()).then_some(SharedMatch {
                target_start: 0,
                len: target.len(),
                origin: 0,
            })
        }

        fn name() -> &'static str {
            "phantom"
        }
    }

    #[test]
    fn zero_max_len_is_an_error() {
        assert_eq!(strip_shared("a", "a", 0).unwrap_err(), Error::ZeroMaxLen);
    }

    #[test]
    fn missing_text_in_source_stops_without_mutation() {
        let mut s = Stripper::<Phantom>::with_strategy("abc", "zzz", StripConfig::default()).unwrap();
        assert_eq!(s.next(), None);
        assert!(s.is_finished());
        assert_eq!(s.source(), b"abc");
        assert_eq!(s.target(), b"zzz");
        assert_eq!(s.rounds(), 1);
    }

    #[test]
    fn exhausted_stripper_does_not_run_more_rounds() {
        let mut s = Stripper::new("ab", "ba", StripConfig::new(2).unwrap()).unwrap();
        let removals: Vec<_> = s.by_ref().collect();
        assert_eq!(removals.len(), 2);
        let rounds = s.rounds();
        assert_eq!(s.next(), None);
        assert_eq!(s.rounds(), rounds);
    }

    #[test]
    fn events_report_post_removal_lengths() {
        let out = strip_shared("hello world", "say hello", 8).unwrap();
        let first = &out.removals[0];
        assert_eq!(first.text, b"hello");
        assert_eq!(first.target_offset, 4);
        assert_eq!(first.source_offset, 0);
        assert_eq!(first.source_len, 6);
        assert_eq!(first.target_len, 4);
    }
}
