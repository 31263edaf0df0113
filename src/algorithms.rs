//! Graph algorithms over anything implementing [`Graph`].
//!
//! All traversals keep their own work-lists, so deep graphs cannot exhaust
//! the call stack.
//!
//! There are two connectivity checks. [`is_connected`] demands that every
//! vertex is reached, while [`is_eulerian`] only looks at vertices which
//! have edges, so an isolated vertex fails the former but not the latter.

use std::collections::HashSet;

use crate::graph::{AdjacencyGraph, Graph, GraphBuilder};
use crate::paths::shortest_paths_from;

/// Every vertex reachable from `start`, `start` included.
fn reachable<G: Graph>(graph: &G, start: G::Vertex) -> HashSet<G::Vertex> {
    let mut visited = HashSet::from([start]);
    let mut stack = vec![start];
    while let Some(vertex) = stack.pop() {
        for neighbor in graph.neighbors(vertex) {
            if visited.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }
    visited
}

/// The vertices reached from the first vertex which has a neighbour. Empty
/// when no vertex has one.
fn reached_from_first_edge<G: Graph>(graph: &G) -> HashSet<G::Vertex> {
    graph
        .vertices()
        .find(|&vertex| graph.degree(vertex) != 0)
        .map(|vertex| reachable(graph, vertex))
        .unwrap_or_default()
}

/// Is every vertex of the graph reachable from every other?
///
/// An empty graph is not connected, and neither is a graph without edges.
pub fn is_connected<G: Graph>(graph: &G) -> bool {
    if graph.vertex_count() == 0 {
        return false;
    }
    let visited = reached_from_first_edge(graph);
    graph.vertices().all(|vertex| visited.contains(&vertex))
}

/// Does the graph have an Euler circuit?
///
/// Every vertex must have even degree and all the vertices with edges must
/// be connected to each other. Vertices without edges are ignored.
pub fn is_eulerian<G: Graph>(graph: &G) -> bool {
    if graph.vertex_count() == 0 {
        return false;
    }
    if graph.vertices().any(|vertex| graph.degree(vertex) % 2 != 0) {
        return false;
    }
    let visited = reached_from_first_edge(graph);
    graph
        .vertices()
        .filter(|&vertex| graph.degree(vertex) != 0)
        .all(|vertex| visited.contains(&vertex))
}

/// Find an Euler circuit: a closed walk using every edge exactly once.
///
/// Returns an empty Vec when the graph has no circuit. Otherwise the result
/// holds every edge once, each edge shares a vertex with the next one and
/// the last edge shares a vertex with the first.
///
/// The walk starts at the first vertex which has an edge. Whenever several
/// unused edges leave the current vertex, the one leading to the vertex
/// earliest in enumeration order is taken, so the circuit is deterministic.
pub fn find_euler_loop<G: Graph>(graph: &G) -> Vec<G::Edge> {
    if !is_eulerian(graph) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            vertices = graph.vertex_count(),
            "graph has no euler circuit"
        );
        return vec![];
    }
    let vertices: Vec<G::Vertex> = graph.vertices().collect();
    let mut unused: HashSet<G::Edge> = graph.edges().collect();
    let mut circuit = Vec::with_capacity(unused.len());
    // Isolated vertices pass is_eulerian, so the walk must not start on one
    let start = vertices
        .iter()
        .copied()
        .find(|&vertex| graph.degree(vertex) != 0);
    let mut stack: Vec<G::Vertex> = start.into_iter().collect();

    while let Some(&top) = stack.last() {
        let step = vertices.iter().find_map(|&vertex| {
            graph
                .connection(vertex, top)
                .filter(|edge| unused.contains(edge))
                .map(|edge| (vertex, edge))
        });
        match step {
            Some((vertex, edge)) => {
                unused.remove(&edge);
                stack.push(vertex);
            }
            None => {
                stack.pop();
                if let Some(edge) = stack
                    .last()
                    .and_then(|&below| graph.connection(top, below))
                {
                    circuit.push(edge);
                }
            }
        }
    }
    circuit
}

/// Build a spanning tree of a connected graph.
///
/// Edge weights are ignored: the tree is the shortest path tree (in edges)
/// from the first vertex, and every tree edge gets weight 1. A graph which
/// is not connected produces an empty graph.
///
/// Vertices are copied by name, so vertex names should be unique.
pub fn minimum_spanning_tree<G: Graph>(graph: &G) -> AdjacencyGraph {
    let mut builder = GraphBuilder::new();
    let first = match graph.vertices().next() {
        Some(first) if is_connected(graph) => first,
        _ => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                vertices = graph.vertex_count(),
                "graph is not connected, no spanning tree"
            );
            return builder.build();
        }
    };
    for vertex in graph.vertices() {
        builder.add_vertex(graph.name(vertex));
    }
    let tree = shortest_paths_from(graph, first);
    for vertex in graph.vertices() {
        if let Some(prev) = tree.get(&vertex).and_then(|info| info.prev) {
            let a = builder.add_vertex(graph.name(prev));
            let b = builder.add_vertex(graph.name(vertex));
            builder.add_connection(a, b, 1);
        }
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeId;
    use itertools::Itertools;

    fn build(vertices: &[&str], connections: &[(&str, &str)]) -> AdjacencyGraph {
        let mut builder = GraphBuilder::new();
        for name in vertices {
            builder.add_vertex(*name);
        }
        for (a, b) in connections {
            let a = builder.add_vertex(*a);
            let b = builder.add_vertex(*b);
            builder.add_connection(a, b, 1);
        }
        builder.build()
    }

    //      G -- H
    //      |    |
    // A -- B -- C -- D
    // |    |    |    |
    // E    F -- I    |
    // |              |
    // J ------------ K
    fn letters() -> AdjacencyGraph {
        build(
            &["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K"],
            &[
                ("A", "B"),
                ("B", "C"),
                ("C", "D"),
                ("A", "E"),
                ("D", "K"),
                ("E", "J"),
                ("J", "K"),
                ("B", "F"),
                ("C", "I"),
                ("F", "I"),
                ("B", "G"),
                ("C", "H"),
                ("G", "H"),
            ],
        )
    }

    fn names(graph: &AdjacencyGraph, edge: EdgeId) -> (String, String) {
        let (a, b) = graph.endpoints(edge);
        let (a, b) = (graph.name(a).to_string(), graph.name(b).to_string());
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    fn shares_vertex(graph: &AdjacencyGraph, x: EdgeId, y: EdgeId) -> bool {
        let (a, b) = graph.endpoints(x);
        let (c, d) = graph.endpoints(y);
        a == c || a == d || b == c || b == d
    }

    fn assert_euler_loop(graph: &AdjacencyGraph, circuit: &[EdgeId]) {
        assert_eq!(graph.edge_count(), circuit.len());
        assert_eq!(
            graph.edge_count(),
            circuit.iter().collect::<HashSet<_>>().len()
        );
        for (x, y) in circuit.iter().tuple_windows() {
            assert!(shares_vertex(graph, *x, *y));
        }
        assert!(shares_vertex(
            graph,
            circuit[0],
            circuit[circuit.len() - 1]
        ));
    }

    #[test]
    fn it_checks_connectivity() {
        assert!(is_connected(&letters()));
        assert!(is_connected(&build(&[], &[("A", "B")])));
        assert!(!is_connected(&build(&[], &[("A", "B"), ("C", "D")])));
    }

    #[test]
    fn it_does_not_connect_empty_graphs() {
        assert!(!is_connected(&build(&[], &[])));
        assert!(!is_connected(&build(&["A"], &[])));
        assert!(!is_eulerian(&build(&[], &[])));
    }

    #[test]
    fn it_exempts_isolated_vertices_only_for_euler() {
        let graph = build(&["X"], &[("A", "B"), ("B", "C"), ("C", "A")]);
        assert!(!is_connected(&graph));
        assert!(is_eulerian(&graph));
        assert_euler_loop(&graph, &find_euler_loop(&graph));
    }

    #[test]
    fn it_finds_euler_loop() {
        let graph = letters();
        let circuit = find_euler_loop(&graph);
        assert_euler_loop(&graph, &circuit);
        let expected = [
            ("A", "E"),
            ("E", "J"),
            ("J", "K"),
            ("D", "K"),
            ("C", "D"),
            ("C", "I"),
            ("F", "I"),
            ("B", "F"),
            ("B", "G"),
            ("G", "H"),
            ("C", "H"),
            ("B", "C"),
            ("A", "B"),
        ];
        let found: Vec<(String, String)> = circuit.iter().map(|&e| names(&graph, e)).collect();
        let expected: Vec<(String, String)> = expected
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();
        assert_eq!(expected, found);
    }

    #[test]
    fn it_finds_euler_loop_in_a_triangle() {
        let graph = build(&[], &[("A", "B"), ("B", "C"), ("C", "A")]);
        assert_euler_loop(&graph, &find_euler_loop(&graph));
    }

    #[test]
    fn it_finds_euler_loop_through_a_shared_vertex() {
        // Two triangles joined at C
        let graph = build(
            &[],
            &[
                ("A", "B"),
                ("B", "C"),
                ("C", "A"),
                ("C", "D"),
                ("D", "E"),
                ("E", "C"),
            ],
        );
        assert_euler_loop(&graph, &find_euler_loop(&graph));
    }

    #[test]
    fn it_finds_no_euler_loop_with_odd_degrees() {
        let graph = build(&[], &[("A", "B"), ("B", "C")]);
        assert!(!is_eulerian(&graph));
        assert!(find_euler_loop(&graph).is_empty());
    }

    #[test]
    fn it_finds_no_euler_loop_in_separate_cycles() {
        let graph = build(
            &[],
            &[
                ("A", "B"),
                ("B", "C"),
                ("C", "A"),
                ("D", "E"),
                ("E", "F"),
                ("F", "D"),
            ],
        );
        assert!(!is_eulerian(&graph));
        assert!(find_euler_loop(&graph).is_empty());
    }

    #[test]
    fn it_finds_empty_euler_loop_without_edges() {
        let graph = build(&["A", "B"], &[]);
        assert!(is_eulerian(&graph));
        assert!(find_euler_loop(&graph).is_empty());
    }

    #[test]
    fn it_builds_spanning_tree() {
        let graph = letters();
        let tree = minimum_spanning_tree(&graph);
        assert_eq!(graph.vertex_count(), tree.vertex_count());
        assert_eq!(graph.vertex_count() - 1, tree.edge_count());
        // Connected with V - 1 edges, so acyclic
        assert!(is_connected(&tree));
        for vertex in graph.vertices() {
            assert!(tree.vertex(graph.name(vertex)).is_some());
        }
        for edge in tree.edges() {
            assert_eq!(1, tree.weight(edge));
            let (a, b) = tree.endpoints(edge);
            let a = graph.vertex(tree.name(a)).unwrap();
            let b = graph.vertex(tree.name(b)).unwrap();
            assert!(graph.connection(a, b).is_some());
        }
    }

    #[test]
    fn it_ignores_weights_for_spanning_tree() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex("A");
        let b = builder.add_vertex("B");
        let c = builder.add_vertex("C");
        builder.add_connection(a, b, 1);
        builder.add_connection(b, c, 1);
        builder.add_connection(a, c, 50);
        let tree = minimum_spanning_tree(&builder.build());
        let a = tree.vertex("A").unwrap();
        let c = tree.vertex("C").unwrap();
        // C is one edge away from A, however heavy that edge is
        assert!(tree.connection(a, c).is_some());
        assert_eq!(2, tree.edge_count());
    }

    #[test]
    fn it_builds_empty_spanning_tree_when_disconnected() {
        let graph = build(&["X"], &[("A", "B"), ("B", "C")]);
        let tree = minimum_spanning_tree(&graph);
        assert_eq!(0, tree.vertex_count());
        assert_eq!(0, tree.edge_count());
        assert_eq!(0, minimum_spanning_tree(&build(&[], &[])).vertex_count());
    }
}
