use trellis::{GraphError, GraphStore};

fn weighted_sample() -> GraphStore<&'static str> {
    let mut store = GraphStore::new();
    store.add_nodes(["A", "B", "C", "D"]);
    store.add_edge(&"A", &"B", 1.0).unwrap();
    store.add_edge(&"B", &"C", 2.0).unwrap();
    store.add_edge(&"A", &"C", 4.0).unwrap();
    store.add_edge(&"C", &"D", 1.0).unwrap();
    store
}

#[test]
fn test_edge_is_symmetric() {
    let store = weighted_sample();

    assert!(store.has_edge(&"A", &"C") && store.has_edge(&"C", &"A"));
    assert_eq!(store.edge_weight(&"A", &"C"), Ok(4.0));
    assert_eq!(store.edge_weight(&"C", &"A"), Ok(4.0));
}

#[test]
fn test_arrow_is_one_way() {
    let mut store = GraphStore::new();
    store.add_nodes([1, 2]);
    store.add_arrow(&1, &2, 3.0).unwrap();

    assert!(store.has_arrow(&1, &2));
    assert!(!store.has_arrow(&2, &1));
    assert!(!store.has_edge(&1, &2));
}

#[test]
fn test_del_edge_removes_both_directions() {
    let mut store = weighted_sample();
    assert!(store.del_edge(&"B", &"C"));

    assert!(matches!(store.edge_weight(&"B", &"C"), Err(GraphError::MissingEdge(..))));
    assert!(store.arrow_weight(&"C", &"B").is_err());
    assert_eq!(store.neighbors(&"B").unwrap(), vec!["A"]);
    // second delete is a no-op
    assert!(!store.del_edge(&"C", &"B"));
}

#[test]
fn test_topological_sorting_dag() {
    let mut store = GraphStore::new();
    store.add_nodes(["c", "b", "a"]);
    store.add_arrow(&"a", &"b", 1.0).unwrap();
    store.add_arrow(&"b", &"c", 1.0).unwrap();
    store.add_arrow(&"a", &"c", 1.0).unwrap();

    let order = store.topological_sorting().unwrap();
    let pos = |n: &str| order.iter().position(|x| *x == n).unwrap();
    assert_eq!(order.len(), 3);
    assert!(pos("a") < pos("b"));
    assert!(pos("b") < pos("c"));
}

#[test]
fn test_topological_sorting_cycle() {
    let mut store = GraphStore::new();
    store.add_nodes(["a", "b"]);
    store.add_arrow(&"a", &"b", 1.0).unwrap();
    store.add_arrow(&"b", &"a", 1.0).unwrap();

    assert!(matches!(store.topological_sorting(), Err(GraphError::CycleDetected(_))));
}

#[test]
fn test_shortest_path_scenario() {
    let store = weighted_sample();
    let paths = store.shortest_path(&"A").unwrap();

    assert_eq!(paths.distances.len(), 3);
    assert_eq!(paths.distances[&"B"], 1.0);
    assert_eq!(paths.distances[&"C"], 3.0);
    assert_eq!(paths.distances[&"D"], 4.0);

    assert_eq!(paths.predecessors.len(), 3);
    assert_eq!(paths.predecessors[&"B"], "A");
    assert_eq!(paths.predecessors[&"C"], "B");
    assert_eq!(paths.predecessors[&"D"], "C");

    // the source is in neither map
    assert!(!paths.distances.contains_key(&"A"));
    assert!(!paths.predecessors.contains_key(&"A"));
    assert_eq!(paths.distance_to(&"A"), Some(0.0));
    assert_eq!(paths.path_to(&"D").unwrap(), vec!["A", "B", "C", "D"]);
}

#[test]
fn test_shortest_path_negative_weight() {
    let mut store = weighted_sample();
    store.add_nodes(["E"]);
    store.add_edge(&"D", &"E", -2.0).unwrap();

    let err = store.shortest_path(&"A").unwrap_err();
    assert!(matches!(err, GraphError::InvalidWeight { weight, .. } if weight == -2.0));
}

#[test]
fn test_negative_weight_out_of_reach_is_ignored() {
    let mut store = weighted_sample();
    store.add_nodes(["X", "Y"]);
    store.add_edge(&"X", &"Y", -5.0).unwrap();

    let paths = store.shortest_path(&"A").unwrap();
    assert_eq!(paths.distance_to(&"X"), None);
    assert_eq!(paths.distance_to(&"D"), Some(4.0));
}

#[test]
fn test_minimal_spanning_tree_scenario() {
    let store = weighted_sample();
    let mst = store.minimal_spanning_tree();

    assert_eq!(mst.total_weight, 4.0);
    assert!(mst.is_spanning_tree());
    assert_eq!(mst.spanning_tree[&"A"], None);
    assert_eq!(mst.spanning_tree[&"B"], Some("A"));
    assert_eq!(mst.spanning_tree[&"C"], Some("B"));
    assert_eq!(mst.spanning_tree[&"D"], Some("C"));
}

#[test]
fn test_minimal_spanning_forest() {
    let mut store = weighted_sample();
    store.add_nodes(["X", "Y"]);
    store.add_edge(&"X", &"Y", 7.0).unwrap();

    let mst = store.minimal_spanning_tree();
    assert!(!mst.is_spanning_tree());
    assert_eq!(mst.roots().copied().collect::<Vec<_>>(), vec!["A", "X"]);
    assert_eq!(mst.total_weight, 11.0);
}

#[test]
fn test_connected_components_ids() {
    let mut store = GraphStore::new();
    store.add_nodes([4, 3, 2, 1]);
    store.add_edge(&4, &2, 1.0).unwrap();
    store.add_edge(&3, &1, 1.0).unwrap();

    let components = store.connected_components();
    assert_eq!(components[&1], 0);
    assert_eq!(components[&3], 0);
    assert_eq!(components[&2], 1);
    assert_eq!(components[&4], 1);
}

#[test]
fn test_unknown_root_and_source() {
    let store = weighted_sample();

    assert!(matches!(store.depth_first_search(Some(&"Z")), Err(GraphError::MissingNode(_))));
    assert!(matches!(store.breadth_first_search(Some(&"Z")), Err(GraphError::MissingNode(_))));
    assert!(matches!(store.shortest_path(&"Z"), Err(GraphError::MissingNode(_))));
}
