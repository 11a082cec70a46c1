//! Integration tests for graph traversal and shortest paths

use algokit::graph::{
    bfs_traverse, shortest_costs, Frontier, GraphProvider, PathOptions, TraversalOptions,
};
use algokit::{bfs_find_path, breadth_first_search, shortest_path, shortest_path_with};
use algokit::{AlgoError, Graph, WeightedGraph};
use std::collections::HashMap;

fn diamond() -> Graph<String> {
    Graph::from_json_str(r#"{"A": ["B", "C"], "B": ["D"], "C": ["D"], "D": []}"#).unwrap()
}

fn position(order: &[String], node: &str) -> usize {
    order.iter().position(|n| n == node).unwrap()
}

#[test]
fn test_bfs_diamond_level_order() {
    let order = breadth_first_search(&diamond(), &"A".to_string());
    assert_eq!(order.len(), 4);
    assert!(position(&order, "A") < position(&order, "B"));
    assert!(position(&order, "A") < position(&order, "C"));
    assert!(position(&order, "B") < position(&order, "D"));
    assert!(position(&order, "C") < position(&order, "D"));
}

#[test]
fn test_bfs_visits_each_reachable_node_once() {
    let mut graph = Graph::new();
    for i in 0..20u32 {
        graph.add_edge(i, (i + 1) % 20);
        graph.add_edge(i, (i * 7) % 20);
    }
    graph.add_node(99);

    let order = breadth_first_search(&graph, &0);
    assert_eq!(order.len(), 20);
    let mut seen = order.clone();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 20);
    assert!(!order.contains(&99));
}

#[test]
fn test_bfs_traverse_over_graph_type() {
    let opts = TraversalOptions {
        max_depth: Some(0),
        ..Default::default()
    };
    let result = bfs_traverse(&diamond(), &"A".to_string(), &opts);
    assert_eq!(result.order, vec!["A"]);
    assert_eq!(result.start, "A");
    assert!(result.truncated);
}

#[test]
fn test_custom_provider() {
    /// Every node links to the next integer, up to a bound
    struct Ladder {
        rungs: Vec<Vec<usize>>,
    }

    impl GraphProvider<usize> for Ladder {
        fn neighbors(&self, node: &usize) -> &[usize] {
            self.rungs.get(*node).map(Vec::as_slice).unwrap_or(&[])
        }
    }

    let ladder = Ladder {
        rungs: (0..5).map(|i| if i < 4 { vec![i + 1] } else { vec![] }).collect(),
    };
    assert_eq!(breadth_first_search(&ladder, &0), vec![0, 1, 2, 3, 4]);
    assert_eq!(bfs_find_path(&ladder, &1, &3), Some(vec![1, 2, 3]));
}

#[test]
fn test_shortest_path_example() {
    let graph: WeightedGraph<String> =
        WeightedGraph::from_json_str(r#"{"A": [["B", 1], ["C", 4]], "B": [["C", 1]], "C": []}"#)
            .unwrap();
    for frontier in [Frontier::Fifo, Frontier::Heap] {
        let result = shortest_path_with(
            &graph,
            &"A".to_string(),
            &"C".to_string(),
            &PathOptions { frontier },
        )
        .unwrap();
        assert_eq!(result.cost, 2.0);
        assert_eq!(result.path, vec!["A", "B", "C"]);
    }
}

#[test]
fn test_shortest_path_unreachable_never_returns_partial_path() {
    let mut graph = WeightedGraph::new();
    graph.add_edge("A", "B", 1.0);
    graph.add_node("island");

    let err = shortest_path(&graph, &"A", &"island").unwrap_err();
    assert!(matches!(err, AlgoError::UnreachableTarget { .. }));
    assert_eq!(err.to_json()["error"]["target"], "island");
}

#[test]
fn test_frontiers_agree_on_grid() {
    // 6x6 grid, right and down edges with varied non-negative weights
    let mut graph: HashMap<(u8, u8), Vec<((u8, u8), f64)>> = HashMap::new();
    for row in 0..6u8 {
        for col in 0..6u8 {
            let mut edges = Vec::new();
            if col < 5 {
                edges.push(((row, col + 1), f64::from((row * 3 + col) % 5) + 0.5));
            }
            if row < 5 {
                edges.push(((row + 1, col), f64::from((col * 7 + row) % 4) + 0.25));
            }
            graph.insert((row, col), edges);
        }
    }

    let fifo = shortest_costs(&graph, &(0, 0), &PathOptions { frontier: Frontier::Fifo });
    let heap = shortest_costs(&graph, &(0, 0), &PathOptions { frontier: Frontier::Heap });
    assert_eq!(fifo.len(), 36);
    assert_eq!(fifo, heap);
}
