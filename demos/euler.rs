use groundwork::algorithms::{find_euler_loop, minimum_spanning_tree};
use groundwork::graph::{Graph, GraphBuilder};

//      G -- H
//      |    |
// A -- B -- C -- D
// |    |    |    |
// E    F -- I    |
// |              |
// J ------------ K
fn main() {
    let mut builder = GraphBuilder::new();
    for name in ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K"] {
        builder.add_vertex(name);
    }
    let connections = [
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
    ];
    for (a, b) in connections {
        let a = builder.add_vertex(a);
        let b = builder.add_vertex(b);
        builder.add_connection(a, b, 1);
    }
    let graph = builder.build();

    let circuit = find_euler_loop(&graph);
    println!("euler circuit ({} edges):", circuit.len());
    for edge in circuit {
        let (a, b) = graph.endpoints(edge);
        println!("  {} -- {}", graph.name(a), graph.name(b));
    }

    let tree = minimum_spanning_tree(&graph);
    println!("spanning tree ({} edges):", tree.edge_count());
    for edge in tree.edges() {
        let (a, b) = tree.endpoints(edge);
        println!("  {} -- {}", tree.name(a), tree.name(b));
    }
}
