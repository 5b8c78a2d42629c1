use std::collections::VecDeque;
use std::time::Instant;

use log::trace;
use smallvec::SmallVec;

use crate::enumerator::substrings;

pub(crate) type NodeId = usize;
pub(crate) const ROOT: NodeId = 0;

/// A registered pattern as stored in a node's output: its length and the
/// source offset it was enumerated from. The pattern text is the path from
/// the root to the node that first recorded it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub len: usize,
    pub origin: usize,
}

// Children stay sorted by byte so traversal order is deterministic.
type Children = SmallVec<[(u8, NodeId); 4]>;
type Output = SmallVec<[Entry; 4]>;

#[derive(Debug, Default)]
pub(crate) struct Node {
    pub(crate) children: Children,
    pub(crate) fail: NodeId,
    pub(crate) output: Output,
}

impl Node {
    #[inline]
    pub(crate) fn child(&self, byte: u8) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|i| self.children[i].1)
    }
}

/// Aho-Corasick automaton over a set of byte patterns.
///
/// Nodes live in a single arena; children and failure links are indices into
/// it, so dropping the automaton frees every node at once.
#[derive(Debug)]
pub struct Automaton {
    pub(crate) nodes: Vec<Node>,
    patterns: usize,
}

impl Automaton {
    /// Build an automaton from `(pattern, origin)` pairs in registration order.
    ///
    /// A pattern registered more than once keeps every `(len, origin)` entry,
    /// in the order given.
    pub fn build<'a, I>(patterns: I) -> Automaton
    where
        I: IntoIterator<Item = (&'a [u8], usize)>,
    {
        let t0 = Instant::now();
        let mut automaton = Automaton {
            nodes: vec![Node::default()],
            patterns: 0,
        };
        for (pattern, origin) in patterns {
            automaton.insert(pattern, origin);
        }
        automaton.link_failures();

        crate::instrumentation::add_nodes(automaton.nodes.len() as u64);
        crate::instrumentation::add_patterns(automaton.patterns as u64);
        crate::instrumentation::add_build_ns(t0.elapsed().as_nanos() as u64);
        trace!(
            "built automaton: {} patterns, {} nodes",
            automaton.patterns,
            automaton.nodes.len()
        );
        automaton
    }

    /// Build from every substring of `source` up to `max_len` bytes.
    pub fn from_source(source: &[u8], max_len: usize) -> Automaton {
        Self::build(substrings(source, max_len))
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of `(pattern, origin)` pairs registered.
    pub fn pattern_count(&self) -> usize {
        self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns == 0
    }

    fn insert(&mut self, pattern: &[u8], origin: usize) {
        let mut node = ROOT;
        for &byte in pattern {
            let children = &self.nodes[node].children;
            node = match children.binary_search_by_key(&byte, |&(b, _)| b) {
                Ok(i) => children[i].1,
                Err(i) => {
                    let id = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children.insert(i, (byte, id));
                    id
                }
            };
        }
        self.nodes[node].output.push(Entry {
            len: pattern.len(),
            origin,
        });
        self.patterns += 1;
    }

    // Breadth-first so a node's fail target (always shallower) already has
    // its complete output when we copy it.
    fn link_failures(&mut self) {
        let mut queue: VecDeque<NodeId> = VecDeque::new();
        let mut steps = 0u64;

        self.nodes[ROOT].fail = ROOT;
        for i in 0..self.nodes[ROOT].children.len() {
            let child = self.nodes[ROOT].children[i].1;
            self.nodes[child].fail = ROOT;
            queue.push_back(child);
        }

        while let Some(current) = queue.pop_front() {
            for i in 0..self.nodes[current].children.len() {
                let (byte, child) = self.nodes[current].children[i];

                let mut f = self.nodes[current].fail;
                while f != ROOT && self.nodes[f].child(byte).is_none() {
                    f = self.nodes[f].fail;
                    steps += 1;
                }
                let fail = match self.nodes[f].child(byte) {
                    Some(next) if next != child => next,
                    _ => ROOT,
                };
                self.nodes[child].fail = fail;

                if fail != ROOT {
                    let inherited = self.nodes[fail].output.clone();
                    self.nodes[child].output.extend(inherited);
                }
                queue.push_back(child);
            }
        }

        crate::instrumentation::add_build_fail_steps(steps);
    }
}
