use crate::automaton::{Automaton, NodeId, ROOT};
use crate::core::{LongestShared, SharedMatch};

impl Automaton {
    // One transition: fall back along failure links until some node has a
    // child for `byte`, or give up at the root.
    #[inline]
    fn step(&self, mut node: NodeId, byte: u8, fail_steps: &mut u64) -> NodeId {
        loop {
            if let Some(next) = self.nodes[node].child(byte) {
                return next;
            }
            if node == ROOT {
                return ROOT;
            }
            node = self.nodes[node].fail;
            *fail_steps += 1;
        }
    }

    /// Scan `target` once and return the longest registered pattern occurring
    /// in it.
    ///
    /// Only a strictly longer match replaces the current best, so the first
    /// pattern to reach the maximum length wins: earliest end position in the
    /// target, then earliest entry in that node's output.
    pub fn find_longest(&self, target: &[u8]) -> Option<SharedMatch> {
        let mut node = ROOT;
        let mut best: Option<SharedMatch> = None;
        let mut best_len = 0usize;
        let mut fail_steps = 0u64;

        for (i, &byte) in target.iter().enumerate() {
            node = self.step(node, byte, &mut fail_steps);
            for entry in self.nodes[node].output.iter() {
                if entry.len > best_len {
                    best_len = entry.len;
                    best = Some(SharedMatch {
                        target_start: i + 1 - entry.len,
                        len: entry.len,
                        origin: entry.origin,
                    });
                }
            }
        }

        crate::instrumentation::add_scan_fail_steps(fail_steps);
        crate::instrumentation::add_bytes_scanned(target.len() as u64);
        best
    }

    /// Report every registered pattern occurrence in `target`, in scan order
    /// (by end position, then by output order within a node).
    pub fn find_all(&self, target: &[u8]) -> Vec<SharedMatch> {
        let mut node = ROOT;
        let mut hits = Vec::new();
        let mut fail_steps = 0u64;

        for (i, &byte) in target.iter().enumerate() {
            node = self.step(node, byte, &mut fail_steps);
            hits.extend(self.nodes[node].output.iter().map(|entry| SharedMatch {
                target_start: i + 1 - entry.len,
                len: entry.len,
                origin: entry.origin,
            }));
        }

        crate::instrumentation::add_scan_fail_steps(fail_steps);
        crate::instrumentation::add_bytes_scanned(target.len() as u64);
        hits
    }
}

/// Longest shared substring via an Aho-Corasick automaton built from all
/// substrings of the source.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutomatonSearch;

impl LongestShared for AutomatonSearch {
    fn longest_shared(source: &[u8], target: &[u8], max_len: usize) -> Option<SharedMatch> {
        Automaton::from_source(source, max_len).find_longest(target)
    }

    fn name() -> &'static str {
        "automaton"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(words: &[&str]) -> Automaton {
        Automaton::build(words.iter().enumerate().map(|(i, w)| (w.as_bytes(), i)))
    }

    #[test]
    fn finds_classic_overlapping_patterns() {
        let ac = words(&["he", "she", "his", "hers"]);
        let hits: Vec<(usize, usize)> = ac
            .find_all(b"ushers")
            .iter()
            .map(|m| (m.target_start, m.len))
            .collect();
        // "she" and "he" end at 3, "hers" ends at 5
        assert_eq!(hits, vec![(1, 3), (2, 2), (2, 4)]);
    }

    #[test]
    fn longest_wins_over_earlier_shorter() {
        let ac = words(&["he", "she", "his", "hers"]);
        let best = ac.find_longest(b"ushers").unwrap();
        assert_eq!(
            best,
            SharedMatch {
                target_start: 2,
                len: 4,
                origin: 3
            }
        );
    }

    #[test]
    fn equal_length_tie_goes_to_first_in_scan() {
        let ac = words(&["ab", "cd"]);
        let best = ac.find_longest(b"xxcdab").unwrap();
        assert_eq!(best.target_start, 2);
        assert_eq!(best.origin, 1);
    }

    #[test]
    fn duplicate_origin_first_registered_wins() {
        let ac = Automaton::build(vec![(&b"ab"[..], 7), (&b"ab"[..], 2)]);
        assert_eq!(ac.find_longest(b"zab").unwrap().origin, 7);
    }

    #[test]
    fn failure_recovery_mid_scan() {
        let ac = Automaton::from_source(b"abcd", 4);
        // "abx" breaks the path; "bcd" must still be found via fail links
        let best = ac.find_longest(b"abxbcd").unwrap();
        assert_eq!(
            best,
            SharedMatch {
                target_start: 3,
                len: 3,
                origin: 1
            }
        );
    }

    #[test]
    fn empty_inputs_produce_no_match() {
        let ac = Automaton::from_source(b"", 5);
        assert_eq!(ac.find_longest(b"ANY"), None);
        let ac = Automaton::from_source(b"abc", 2);
        assert_eq!(ac.find_longest(b""), None);
        assert_eq!(ac.find_longest(b"xyz"), None);
    }

    #[test]
    fn strategy_respects_max_len() {
        let m = AutomatonSearch::longest_shared(b"abcdef", b"zzabcdefzz", 3).unwrap();
        assert_eq!(
            m,
            SharedMatch {
                target_start: 2,
                len: 3,
                origin: 0
            }
        );
    }
}
