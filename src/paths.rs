//! Shortest path tree over a graph with every edge weight treated as 1.

use std::collections::{HashMap, VecDeque};

use crate::graph::Graph;

/// Where a vertex sits in a shortest path tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathInfo<V> {
    /// The vertex one step closer to the source, None for the source itself.
    pub prev: Option<V>,
    /// Number of edges between the source and this vertex.
    pub distance: usize,
}

/// Compute a shortest path tree rooted at `source`.
///
/// Edge weights are ignored, so this is a breadth first search. Every
/// vertex reachable from `source` (including `source`) gets an entry;
/// unreachable vertices are absent.
pub fn shortest_paths_from<G: Graph>(
    graph: &G,
    source: G::Vertex,
) -> HashMap<G::Vertex, PathInfo<G::Vertex>> {
    let mut tree = HashMap::new();
    tree.insert(
        source,
        PathInfo {
            prev: None,
            distance: 0,
        },
    );
    let mut queue = VecDeque::from([(source, 0)]);
    while let Some((vertex, distance)) = queue.pop_front() {
        for neighbor in graph.neighbors(vertex) {
            if tree.contains_key(&neighbor) {
                continue;
            }
            tree.insert(
                neighbor,
                PathInfo {
                    prev: Some(vertex),
                    distance: distance + 1,
                },
            );
            queue.push_back((neighbor, distance + 1));
        }
    }
    tree
}
