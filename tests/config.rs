//! Integration tests for loading configuration and graph documents

use algokit::config::{AlgoConfig, CONFIG_FORMAT_VERSION};
use algokit::graph::{shortest_path_with, Frontier};
use algokit::{breadth_first_search, AlgoError, Graph, WeightedGraph};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("algokit.toml");

    let mut config = AlgoConfig::default();
    config.graph.frontier = Frontier::Fifo;
    config.sort.parallel_threshold = 64;
    config.save(&path).unwrap();

    let loaded = AlgoConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.version, CONFIG_FORMAT_VERSION);
}

#[test]
fn test_config_load_missing_file() {
    let dir = tempdir().unwrap();
    let err = AlgoConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, AlgoError::Io(_)));
}

#[test]
fn test_config_drives_shortest_path() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("algokit.toml");
    fs::write(&config_path, "[graph]\nfrontier = \"fifo\"\n").unwrap();
    let config = AlgoConfig::load(&config_path).unwrap();

    let graph_path = dir.path().join("weighted.json");
    fs::write(
        &graph_path,
        r#"{"A": [["B", 2.0], ["C", 9.0]], "B": [["C", 3.0]], "C": []}"#,
    )
    .unwrap();
    let graph: WeightedGraph<String> = WeightedGraph::load(&graph_path).unwrap();

    let result = shortest_path_with(
        &graph,
        &"A".to_string(),
        &"C".to_string(),
        &config.graph.path_options(),
    )
    .unwrap();
    assert_eq!(result.cost, 5.0);
    assert_eq!(result.path, vec!["A", "B", "C"]);
}

#[test]
fn test_config_drives_parallel_sort() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("algokit.toml");
    fs::write(&path, "[sort]\nparallel_threshold = 16\n").unwrap();
    let config = AlgoConfig::load(&path).unwrap();
    assert_eq!(config.sort.parallel_threshold, 16);

    let input: Vec<u32> = (0..5_000).map(|i| (i * 7919) % 257).collect();
    let mut expected = input.clone();
    expected.sort();
    assert_eq!(config.sort.par_quicksort(&input), expected);
}

#[test]
fn test_graph_load_toml_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.toml");
    fs::write(&path, "A = [\"B\", \"C\"]\nB = [\"D\"]\nC = [\"D\"]\nD = []\n").unwrap();

    let graph: Graph<String> = Graph::load(&path).unwrap();
    let order = breadth_first_search(&graph, &"A".to_string());
    assert_eq!(order, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_graph_load_invalid_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.json");
    fs::write(&path, "not json").unwrap();

    let err = Graph::<String>::load(&path).unwrap_err();
    assert_eq!(err.error_type(), "json_error");
}
