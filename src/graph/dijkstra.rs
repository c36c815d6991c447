use super::Graph;
use crate::{frontier::Frontier, path::walk_back, Cost, Path};
use hashbrown::{HashMap, HashSet};
use std::hash::Hash;

impl<Id: Copy + Eq + Hash> Graph<Id> {
    /// Searches the Graph using [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
    ///
    /// ## Returns
    /// the cheapest Path from `origin` to `destination`, or `None` if either of them is not a
    /// Vertex of this Graph or `destination` cannot be reached.
    /// The first Node in the Path is always `origin` and the last is `destination`.
    ///
    /// Among several equally cheap Paths, the one found first wins. Which one that is only
    /// depends on the order in which Edges were added, so the result is reproducible.
    pub fn shortest_path(&self, origin: Id, destination: Id) -> Option<Path<Id>> {
        if !self.contains(origin) || !self.contains(destination) {
            return None;
        }

        let mut visited: HashMap<Id, (Cost, Id)> = HashMap::with_capacity(self.len());
        let mut expanded = HashSet::with_capacity(self.len());
        let mut next = Frontier::with_capacity(self.len() / 2);
        next.enqueue(origin, 0.0);
        visited.insert(origin, (0.0, origin));

        while let Some(current_id) = next.dequeue() {
            if !expanded.insert(current_id) {
                // stale entry of an already expanded Vertex
                continue;
            }
            if current_id == destination {
                break;
            }
            let current_cost = visited[&current_id].0;

            for (other_id, weight) in self.neighbors(current_id) {
                let other_cost = current_cost + weight;

                let mut needs_visit = true;
                if let Some((prev_cost, prev_id)) = visited.get_mut(&other_id) {
                    if *prev_cost > other_cost {
                        *prev_cost = other_cost;
                        *prev_id = current_id;
                    } else {
                        needs_visit = false;
                    }
                } else if other_cost.is_finite() {
                    visited.insert(other_id, (other_cost, current_id));
                } else {
                    needs_visit = false;
                }

                if needs_visit {
                    next.enqueue(other_id, other_cost);
                }
            }
        }

        let &(cost, _) = visited.get(&destination)?;
        let steps = walk_back(origin, destination, |id| visited[&id].1);

        Some(Path::new(steps, cost))
    }
}
