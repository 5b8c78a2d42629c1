// HashedSearch: explanatory notes
//
// Independent of the automaton, this strategy answers the same question with
// rolling 64-bit polynomial hashes. For each window length, from the longest
// allowed down to 1:
//
// 1. Hash every source window of that length and bucket the start offsets by
//    hash, in increasing offset order.
// 2. Slide over the target left to right; on a bucket hit, compare bytes
//    against each candidate (collisions are possible with wrapping u64
//    arithmetic) and return the first one that really matches.
//
// Scanning lengths longest-first and target positions left to right, and
// taking the first verified candidate in a bucket, yields the same winner as
// the automaton's strict-greater tie-break: earliest target start among the
// longest matches, with the leftmost source occurrence as origin.
//
// This costs O(L * (n + m)) hash work per call and is used to cross-check the
// automaton in tests and in the instrumentation binary.
use ahash::AHashMap as HashMap;
use smallvec::SmallVec;

use crate::core::{LongestShared, SharedMatch};

type Bucket = SmallVec<[usize; 4]>;

const BASE: u64 = 257;

/// Longest shared substring via per-length rolling-hash window tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashedSearch;

impl HashedSearch {
    // Compute rolling prefix hashes and powers for a byte string.
    // Returns (h, p) where h[r] - h[l]*p[r-l] yields the rolling hash for s[l..r).
    fn prefix_hashes(s: &[u8]) -> (Vec<u64>, Vec<u64>) {
        let mut h = Vec::with_capacity(s.len() + 1);
        let mut p = Vec::with_capacity(s.len() + 1);
        let (mut last_h, mut last_p) = (0u64, 1u64);
        h.push(last_h);
        p.push(last_p);
        for &b in s {
            last_h = last_h.wrapping_mul(BASE).wrapping_add(b as u64);
            last_p = last_p.wrapping_mul(BASE);
            h.push(last_h);
            p.push(last_p);
        }
        (h, p)
    }

    // Hash substring [l, r) using prefix info (r is exclusive).
    #[inline]
    fn range_hash(prefix: &(Vec<u64>, Vec<u64>), l: usize, r: usize) -> u64 {
        let (h, p) = prefix;
        h[r].wrapping_sub(h[l].wrapping_mul(p[r - l]))
    }

    fn window_table(source: &[u8], prefix: &(Vec<u64>, Vec<u64>), len: usize) -> HashMap<u64, Bucket> {
        let windows = source.len() - len + 1;
        let mut table: HashMap<u64, Bucket> = HashMap::with_capacity(windows);
        for start in 0..windows {
            let key = Self::range_hash(prefix, start, start + len);
            table.entry(key).or_default().push(start);
        }
        table
    }
}

impl LongestShared for HashedSearch {
    fn longest_shared(source: &[u8], target: &[u8], max_len: usize) -> Option<SharedMatch> {
        let longest = max_len.min(source.len()).min(target.len());
        if longest == 0 {
            return None;
        }
        let source_prefix = Self::prefix_hashes(source);
        let target_prefix = Self::prefix_hashes(target);

        for len in (1..=longest).rev() {
            let table = Self::window_table(source, &source_prefix, len);
            for target_start in 0..=(target.len() - len) {
                let key = Self::range_hash(&target_prefix, target_start, target_start + len);
                let Some(bucket) = table.get(&key) else {
                    continue;
                };
                let window = &target[target_start..target_start + len];
                if let Some(&origin) = bucket
                    .iter()
                    .find(|&&start| &source[start..start + len] == window)
                {
                    return Some(SharedMatch {
                        target_start,
                        len,
                        origin,
                    });
                }
            }
        }
        None
    }

    fn name() -> &'static str {
        "hashed"
    }
}
