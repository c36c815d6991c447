//! A general purpose weighted Graph, plus the conversion from a [`TileMap`].

use crate::{grid::TileMap, Cost, Point};
use hashbrown::HashMap;
use slab::Slab;
use std::hash::Hash;

mod dijkstra;

mod vertex;
pub use self::vertex::{Edge, Vertex};

/// Whether [`Graph::add_edge`] and [`Graph::remove_edge`] act on one or both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeDirection {
    /// only `from -> to`
    Directed,
    /// `from -> to` and `to -> from`, as two independent arcs
    Undirected,
}

/// A Graph of Vertices identified by `Id`, each with a list of outgoing weighted Edges.
///
/// Vertices are created on first use (by [`add_vertex`](Graph::add_vertex) or
/// [`add_edge`](Graph::add_edge)) and live until they are removed. There is at most one Edge
/// per ordered pair of Vertices; adding it again only updates its weight.
///
/// ## Examples
/// ```
/// use maze_pathfinding::graph::{EdgeDirection::*, Graph};
///
/// // A     B--2--E
/// // |\
/// // 1  9
/// // |   \
/// // C--6--D
/// let mut graph = Graph::new();
/// graph.add_edge('A', 'C', 1.0, Undirected);
/// graph.add_edge('A', 'D', 9.0, Undirected);
/// graph.add_edge('C', 'D', 6.0, Undirected);
/// graph.add_edge('B', 'E', 2.0, Undirected);
///
/// let path = graph.shortest_path('A', 'D').unwrap();
/// assert_eq!(path.path, vec!['A', 'C', 'D']);
/// assert_eq!(path.cost, 7.0);
///
/// assert_eq!(graph.shortest_path('A', 'E'), None);
/// ```
#[derive(Clone, Debug)]
pub struct Graph<Id> {
    vertices: Slab<Vertex<Id>>,
    keys: HashMap<Id, usize>,
}

impl<Id: Copy + Eq + Hash> Graph<Id> {
    /// Creates an empty Graph
    pub fn new() -> Graph<Id> {
        Graph {
            vertices: Slab::new(),
            keys: HashMap::new(),
        }
    }

    /// Adds a Vertex, or returns the existing one with that `id`.
    pub fn add_vertex(&mut self, id: Id) -> &Vertex<Id> {
        let key = self.key_or_insert(id);
        &self.vertices[key]
    }

    /// Removes a Vertex and every Edge leading to it.
    ///
    /// Returns `false` if there was no such Vertex.
    pub fn remove_vertex(&mut self, id: Id) -> bool {
        let key = match self.keys.remove(&id) {
            Some(key) => key,
            None => return false,
        };
        self.vertices.remove(key);
        for (_, vertex) in self.vertices.iter_mut() {
            vertex.remove_edge(id);
        }
        true
    }

    /// Adds an Edge from `from` to `to`, creating missing Vertices.
    ///
    /// With [`EdgeDirection::Undirected`] the reverse arc is added as well, carrying the same
    /// weight. Both arcs are independent afterwards.
    ///
    /// `weight` must not be negative.
    pub fn add_edge(&mut self, from: Id, to: Id, weight: Cost, direction: EdgeDirection) {
        let from_key = self.key_or_insert(from);
        let to_key = self.key_or_insert(to);
        self.vertices[from_key].insert_edge(to, weight);
        if direction == EdgeDirection::Undirected {
            self.vertices[to_key].insert_edge(from, weight);
        }
    }

    /// Removes the Edge from `from` to `to` (and with [`EdgeDirection::Undirected`] the reverse).
    ///
    /// Returns `true` if at least one arc was removed.
    pub fn remove_edge(&mut self, from: Id, to: Id, direction: EdgeDirection) -> bool {
        let mut removed = false;
        if let Some(&key) = self.keys.get(&from) {
            removed |= self.vertices[key].remove_edge(to);
        }
        if direction == EdgeDirection::Undirected {
            if let Some(&key) = self.keys.get(&to) {
                removed |= self.vertices[key].remove_edge(from);
            }
        }
        removed
    }

    /// The Vertex with that `id`, if it exists
    pub fn vertex(&self, id: Id) -> Option<&Vertex<Id>> {
        self.keys.get(&id).map(|&key| &self.vertices[key])
    }

    /// `true` if there is a Vertex with that `id`
    pub fn contains(&self, id: Id) -> bool {
        self.keys.contains_key(&id)
    }

    /// The targets and weights of all Edges leaving `id`. Empty for unknown Vertices.
    pub fn neighbors(&self, id: Id) -> impl Iterator<Item = (Id, Cost)> + '_ {
        self.vertex(id)
            .into_iter()
            .flat_map(|vertex| vertex.edges().iter().map(|edge| (edge.to, edge.weight)))
    }

    /// Iterates over all Vertices
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<Id>> + '_ {
        self.vertices.iter().map(|(_, vertex)| vertex)
    }

    /// Iterates over all Edges as `(from, edge)`
    pub fn edges(&self) -> impl Iterator<Item = (Id, &Edge<Id>)> + '_ {
        self.vertices()
            .flat_map(|vertex| vertex.edges().iter().map(move |edge| (vertex.id(), edge)))
    }

    /// The number of Vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// `true` if there are no Vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The number of directed Edges
    pub fn edge_count(&self) -> usize {
        self.vertices().map(|vertex| vertex.edges().len()).sum()
    }

    fn key_or_insert(&mut self, id: Id) -> usize {
        if let Some(&key) = self.keys.get(&id) {
            return key;
        }
        let key = self.vertices.insert(Vertex::new(id));
        self.keys.insert(id, key);
        key
    }
}

impl<Id: Copy + Eq + Hash> Default for Graph<Id> {
    fn default() -> Graph<Id> {
        Graph::new()
    }
}

impl Graph<Point> {
    /// Builds a Graph with one Vertex per traversable cell of `map`.
    ///
    /// Every cell gets one directed Edge to each of its traversable neighbors, weighted with the
    /// cost of entering that neighbor. Searching the result therefore gives the same Costs as
    /// searching the map directly.
    pub fn from_map<M: TileMap + ?Sized>(map: &M) -> Graph<Point> {
        let mut graph = Graph::new();
        let mut neighbors = Vec::with_capacity(4);

        for point in map.bounds().points() {
            if !map.is_traversable(point) {
                continue;
            }
            graph.add_vertex(point);

            neighbors.clear();
            map.adjacent(point, &mut neighbors);
            for &other in neighbors.iter() {
                graph.add_edge(point, other, map.cost_to_enter(other), EdgeDirection::Directed);
            }
        }
        graph
    }
}

impl crate::grid::GridMap {
    /// Same as [`Graph::from_map`]
    pub fn to_graph(&self) -> Graph<Point> {
        Graph::from_map(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{EdgeDirection::*, *};
    use crate::grid::GridMap;

    #[test]
    fn add_vertex_is_idempotent() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2, 1.0, Directed);
        assert_eq!(graph.add_vertex(1).edges().len(), 1);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn no_parallel_edges() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2, 1.0, Directed);
        graph.add_edge(1, 2, 4.0, Directed);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![(2, 4.0)]);
    }

    #[test]
    fn undirected_adds_two_independent_arcs() {
        let mut graph = Graph::new();
        graph.add_edge('a', 'b', 2.0, Undirected);
        assert_eq!(graph.edge_count(), 2);

        graph.add_edge('b', 'a', 7.0, Directed);
        assert_eq!(graph.neighbors('a').collect::<Vec<_>>(), vec![('b', 2.0)]);
        assert_eq!(graph.neighbors('b').collect::<Vec<_>>(), vec![('a', 7.0)]);

        assert!(graph.remove_edge('a', 'b', Directed));
        assert_eq!(graph.neighbors('a').count(), 0);
        assert_eq!(graph.neighbors('b').count(), 1);

        assert!(graph.remove_edge('a', 'b', Undirected));
        assert!(!graph.remove_edge('a', 'b', Undirected));
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn remove_vertex_removes_incoming_edges() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2, 1.0, Directed);
        graph.add_edge(3, 2, 1.0, Directed);
        graph.add_edge(2, 3, 1.0, Directed);

        assert!(graph.remove_vertex(2));
        assert!(!graph.remove_vertex(2));
        assert!(!graph.contains(2));
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.neighbors(2).count(), 0);

        // the slot gets reused without mixing up ids
        graph.add_edge(4, 1, 1.0, Directed);
        assert_eq!(graph.vertex(4).map(|v| v.id()), Some(4));
        assert_eq!(graph.vertex(1).map(|v| v.id()), Some(1));
    }

    #[test]
    fn from_map_charges_destination_cost() {
        let map: GridMap = ".ws".parse().unwrap();
        let graph = map.to_graph();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.neighbors((0, 0)).collect::<Vec<_>>(), vec![((1, 0), 3.0)]);
        assert_eq!(
            graph.neighbors((1, 0)).collect::<Vec<_>>(),
            vec![((0, 0), 1.0), ((2, 0), 2.0)]
        );
        assert_eq!(graph.neighbors((2, 0)).collect::<Vec<_>>(), vec![((1, 0), 3.0)]);
    }

    #[test]
    fn from_map_skips_walls() {
        let map: GridMap = "
            .#.
            ...
        "
        .parse()
        .unwrap();
        let graph = Graph::from_map(&map);
        assert_eq!(graph.len(), 5);
        assert!(!graph.contains((1, 0)));
        assert!(graph.edges().all(|(_, edge)| edge.to != (1, 0)));
    }
}
