use crate::Cost;

/// An arc leaving a [`Vertex`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge<Id> {
    /// the Vertex this Edge leads to
    pub to: Id,
    /// the Cost of walking this Edge
    pub weight: Cost,
}

/// A Vertex of a [`Graph`](super::Graph) and its outgoing Edges, in insertion order.
#[derive(Clone, Debug)]
pub struct Vertex<Id> {
    id: Id,
    edges: Vec<Edge<Id>>,
}

impl<Id: Copy + PartialEq> Vertex<Id> {
    pub(super) fn new(id: Id) -> Vertex<Id> {
        Vertex { id, edges: vec![] }
    }

    /// The id of this Vertex
    pub fn id(&self) -> Id {
        self.id
    }

    /// The outgoing Edges
    pub fn edges(&self) -> &[Edge<Id>] {
        &self.edges
    }

    /// The Edge leading to `to`, if there is one
    pub fn edge_to(&self, to: Id) -> Option<&Edge<Id>> {
        self.edges.iter().find(|edge| edge.to == to)
    }

    pub(super) fn insert_edge(&mut self, to: Id, weight: Cost) {
        match self.edges.iter_mut().find(|edge| edge.to == to) {
            Some(existing) => existing.weight = weight,
            None => self.edges.push(Edge { to, weight }),
        }
    }

    pub(super) fn remove_edge(&mut self, to: Id) -> bool {
        let before = self.edges.len();
        self.edges.retain(|edge| edge.to != to);
        self.edges.len() != before
    }
}
