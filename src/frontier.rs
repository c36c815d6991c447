//! A min-priority queue for the Nodes that still have to be expanded.

use crate::Cost;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// The Frontier of a search: discovered Nodes ordered by priority, lowest first.
///
/// There is no decrease-key operation. To lower the priority of a Node, simply enqueue it again.
/// The old entry stays in the queue, so a Node may be dequeued more than once. Callers are
/// expected to skip Nodes they already expanded when they come out a second time.
///
/// Entries with equal priority come out in the order they were enqueued, which makes every
/// search using the Frontier fully deterministic.
///
/// ## Examples
/// ```
/// # use maze_pathfinding::frontier::Frontier;
/// let mut frontier = Frontier::new();
/// frontier.enqueue('a', 3.0);
/// frontier.enqueue('b', 1.0);
/// frontier.enqueue('c', 1.0);
/// frontier.enqueue('a', 0.5); // 'a' improved
///
/// assert_eq!(frontier.len(), 4);
/// assert_eq!(frontier.dequeue(), Some('a'));
/// assert_eq!(frontier.dequeue(), Some('b'));
/// assert_eq!(frontier.dequeue(), Some('c'));
/// assert_eq!(frontier.dequeue(), Some('a')); // the stale entry
/// assert_eq!(frontier.dequeue(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Frontier<Id> {
    heap: BinaryHeap<Element<Id>>,
    sequence: u64,
}

impl<Id> Frontier<Id> {
    /// Creates an empty Frontier
    pub fn new() -> Frontier<Id> {
        Frontier::with_capacity(0)
    }

    /// Creates an empty Frontier with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Frontier<Id> {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
            sequence: 0,
        }
    }

    /// Adds `id` with the given priority. Existing entries for `id` are left untouched.
    pub fn enqueue(&mut self, id: Id, priority: Cost) {
        self.heap.push(Element {
            id,
            priority,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    /// Removes and returns the entry with the lowest priority.
    pub fn dequeue(&mut self) -> Option<Id> {
        self.dequeue_with_priority().map(|(id, _)| id)
    }

    /// Removes and returns the entry with the lowest priority, together with that priority.
    pub fn dequeue_with_priority(&mut self) -> Option<(Id, Cost)> {
        self.heap.pop().map(|element| (element.id, element.priority))
    }

    /// The entry that [`dequeue`](Frontier::dequeue) would return next
    pub fn peek(&self) -> Option<(&Id, Cost)> {
        self.heap.peek().map(|element| (&element.id, element.priority))
    }

    /// The number of entries, stale duplicates included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// `true` if there are no entries left
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.heap.clear();
        self.sequence = 0;
    }

    /// Iterates over all entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&Id, Cost)> + '_ {
        self.heap.iter().map(|element| (&element.id, element.priority))
    }
}

impl<Id> Default for Frontier<Id> {
    fn default() -> Frontier<Id> {
        Frontier::new()
    }
}

#[derive(Clone, Debug)]
struct Element<Id> {
    id: Id,
    priority: Cost,
    sequence: u64,
}

impl<Id> PartialEq for Element<Id> {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl<Id> Eq for Element<Id> {}
impl<Id> PartialOrd for Element<Id> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl<Id> Ord for Element<Id> {
    // reversed, so that the BinaryHeap (a max-heap) pops the lowest priority first
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.priority
            .total_cmp(&self.priority)
            .then_with(|| rhs.sequence.cmp(&self.sequence))
    }
}
