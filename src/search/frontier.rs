//! Search frontier shared by all strategies
//!
//! BFS uses a FIFO queue; UCS and A* use a min-heap keyed by priority. Ties are
//! broken by insertion order so every search is deterministic.

use super::SearchStrategy;
use crate::core::Word;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

/// A frontier entry: a word, how it was reached, and at what cost
#[derive(Debug, Clone, Copy)]
pub(super) struct Node<'a> {
    pub priority: usize,
    pub cost: usize,
    pub sequence: u64,
    pub word: &'a Word,
    pub parent: Option<&'a Word>,
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl Eq for Node<'_> {}

impl PartialOrd for Node<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

enum Queue<'a> {
    Fifo(VecDeque<Node<'a>>),
    Priority(BinaryHeap<Reverse<Node<'a>>>),
}

pub(super) struct Frontier<'a> {
    queue: Queue<'a>,
    next_sequence: u64,
    peak: usize,
}

impl<'a> Frontier<'a> {
    pub fn new(strategy: SearchStrategy) -> Self {
        let queue = if strategy.is_prioritized() {
            Queue::Priority(BinaryHeap::new())
        } else {
            Queue::Fifo(VecDeque::new())
        };

        Self {
            queue,
            next_sequence: 0,
            peak: 0,
        }
    }

    pub fn push(&mut self, priority: usize, cost: usize, word: &'a Word, parent: Option<&'a Word>) {
        let node = Node {
            priority,
            cost,
            sequence: self.next_sequence,
            word,
            parent,
        };
        self.next_sequence += 1;

        match &mut self.queue {
            Queue::Fifo(queue) => queue.push_back(node),
            Queue::Priority(heap) => heap.push(Reverse(node)),
        }

        self.peak = self.peak.max(self.len());
    }

    pub fn pop(&mut self) -> Option<Node<'a>> {
        match &mut self.queue {
            Queue::Fifo(queue) => queue.pop_front(),
            Queue::Priority(heap) => heap.pop().map(|Reverse(node)| node),
        }
    }

    pub fn len(&self) -> usize {
        match &self.queue {
            Queue::Fifo(queue) => queue.len(),
            Queue::Priority(heap) => heap.len(),
        }
    }

    /// Largest size the frontier reached
    pub const fn peak(&self) -> usize {
        self.peak
    }
}
