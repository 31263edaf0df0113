//! Provides the read interface the graph algorithms work against, and a
//! simple undirected graph which implements it.
//!
//! Graphs are assembled with a [`GraphBuilder`] and are immutable once
//! built.
//!
//! ```
//! use groundwork::graph::{Graph, GraphBuilder};
//!
//! let mut builder = GraphBuilder::new();
//! let a = builder.add_vertex("A");
//! let b = builder.add_vertex("B");
//! let c = builder.add_vertex("C");
//! builder.add_connection(a, b, 1);
//! builder.add_connection(b, c, 2);
//! let graph = builder.build();
//!
//! assert_eq!(graph.vertex_count(), 3);
//! assert_eq!(graph.degree(b), 2);
//! assert_eq!(graph.connection(a, b), graph.connection(b, a));
//! assert!(graph.connection(a, c).is_none());
//! ```

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// The view of a graph needed by the algorithms in [`crate::algorithms`].
///
/// Edges are undirected: `connection(a, b)` and `connection(b, a)` name the
/// same edge. Vertices are enumerated in a fixed order, which the
/// algorithms use to break ties.
pub trait Graph {
    /// Opaque vertex identity.
    type Vertex: Copy + Eq + Ord + Hash + Debug;
    /// Opaque edge identity.
    type Edge: Copy + Eq + Hash + Debug;

    /// Every vertex, in enumeration order.
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    fn vertex_count(&self) -> usize;

    /// Every edge, once each.
    fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_;

    fn edge_count(&self) -> usize;

    /// The vertices sharing an edge with `vertex`.
    fn neighbors(&self, vertex: Self::Vertex) -> impl Iterator<Item = Self::Vertex> + '_;

    fn degree(&self, vertex: Self::Vertex) -> usize {
        self.neighbors(vertex).count()
    }

    /// The edge joining `a` and `b`, if there is one.
    fn connection(&self, a: Self::Vertex, b: Self::Vertex) -> Option<Self::Edge>;

    /// The two vertices an edge joins.
    fn endpoints(&self, edge: Self::Edge) -> (Self::Vertex, Self::Vertex);

    fn name(&self, vertex: Self::Vertex) -> &str;
}

/// Identifies a vertex of an [`AdjacencyGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

/// Identifies an edge of an [`AdjacencyGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(usize);

/// An undirected, weighted edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub begin: VertexId,
    pub end: VertexId,
    pub weight: u32,
}

/// An undirected graph stored as adjacency lists.
///
/// Vertices are enumerated in the order they were added, and neighbours in
/// the order their connections were added.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdjacencyGraph {
    names: Vec<String>,
    by_name: HashMap<String, VertexId>,
    adjacency: Vec<Vec<VertexId>>,
    edges: Vec<Edge>,
    connections: HashMap<(VertexId, VertexId), EdgeId>,
}

fn ordered(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl AdjacencyGraph {
    /// Look a vertex up by name.
    pub fn vertex(&self, name: &str) -> Option<VertexId> {
        self.by_name.get(name).copied()
    }

    pub fn edge(&self, edge: EdgeId) -> &Edge {
        &self.edges[edge.0]
    }

    pub fn weight(&self, edge: EdgeId) -> u32 {
        self.edges[edge.0].weight
    }

    /// Is the graph free of vertices?
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Graph for AdjacencyGraph {
    type Vertex = VertexId;
    type Edge = EdgeId;

    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.names.len()).map(VertexId)
    }

    fn vertex_count(&self) -> usize {
        self.names.len()
    }

    fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId)
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency[vertex.0].iter().copied()
    }

    fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency[vertex.0].len()
    }

    fn connection(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.connections.get(&ordered(a, b)).copied()
    }

    fn endpoints(&self, edge: EdgeId) -> (VertexId, VertexId) {
        let edge = &self.edges[edge.0];
        (edge.begin, edge.end)
    }

    fn name(&self, vertex: VertexId) -> &str {
        &self.names[vertex.0]
    }
}

/// Accumulates vertices and edges, then produces an [`AdjacencyGraph`].
///
/// Vertex ids handed out by one builder are only meaningful to that
/// builder and the graph it builds.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    graph: AdjacencyGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex called `name`. Adding a name twice returns the id of the
    /// existing vertex.
    pub fn add_vertex<N: Into<String>>(&mut self, name: N) -> VertexId {
        let name = name.into();
        if let Some(id) = self.graph.by_name.get(&name) {
            return *id;
        }
        let id = VertexId(self.graph.names.len());
        self.graph.names.push(name.clone());
        self.graph.by_name.insert(name, id);
        self.graph.adjacency.push(vec![]);
        id
    }

    /// Connect `a` and `b`. Connecting an already connected pair updates the
    /// weight of the existing edge. Loops are not supported and are ignored,
    /// in which case None is returned.
    pub fn add_connection(&mut self, a: VertexId, b: VertexId, weight: u32) -> Option<EdgeId> {
        if a == b {
            return None;
        }
        let key = ordered(a, b);
        if let Some(id) = self.graph.connections.get(&key) {
            self.graph.edges[id.0].weight = weight;
            return Some(*id);
        }
        let id = EdgeId(self.graph.edges.len());
        self.graph.edges.push(Edge {
            begin: a,
            end: b,
            weight,
        });
        self.graph.connections.insert(key, id);
        self.graph.adjacency[a.0].push(b);
        self.graph.adjacency[b.0].push(a);
        Some(id)
    }

    pub fn build(self) -> AdjacencyGraph {
        self.graph
    }
}
