//! Structural properties checked on seeded random graphs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};
use trellis::GraphStore;

fn random_digraph(rng: &mut StdRng, n: u32, density: f64) -> GraphStore<u32> {
    let mut store = GraphStore::new();
    store.add_nodes(0..n);
    for u in 0..n {
        for v in 0..n {
            if rng.gen_bool(density) {
                store.add_arrow(&u, &v, rng.gen_range(1..=9) as f64).unwrap();
            }
        }
    }
    store
}

#[test]
fn test_add_edge_symmetry() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut store = GraphStore::new();
    store.add_nodes(0..12u32);

    let mut weights = HashMap::new();

    for _ in 0..40 {
        let (u, v) = (rng.gen_range(0..12u32), rng.gen_range(0..12u32));
        let w = rng.gen_range(1..=20) as f64;
        store.add_edge(&u, &v, w).unwrap();
        // re-adding an existing edge keeps its first weight
        let expected = *weights.entry((u.min(v), u.max(v))).or_insert(w);

        assert!(store.has_edge(&u, &v) && store.has_edge(&v, &u));
        assert_eq!(store.edge_weight(&u, &v), Ok(expected));
        assert_eq!(store.edge_weight(&v, &u), Ok(expected));
    }
}

#[test]
fn test_rooted_dfs_properties() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let store = random_digraph(&mut rng, 15, 0.12);
        let closure = store.accessibility();

        for root in 0..15u32 {
            let dfs = store.depth_first_search(Some(&root)).unwrap();

            let visited: HashSet<u32> = dfs.preorder.iter().copied().collect();
            let reachable: HashSet<u32> = closure[&root].iter().copied().collect();
            assert_eq!(visited.len(), dfs.preorder.len(), "node visited twice");
            assert_eq!(visited, reachable);
            assert_eq!(dfs.preorder.len(), dfs.postorder.len());
            assert_eq!(dfs.visited_count(), dfs.spanning_tree.len());

            for (node, parent) in &dfs.spanning_tree {
                match parent {
                    None => assert_eq!(*node, root),
                    Some(p) => {
                        let pos = |x: &u32| dfs.preorder.iter().position(|y| y == x).unwrap();
                        assert!(pos(p) < pos(node));
                        assert!(store.has_arrow(p, node));
                    }
                }
            }
        }
    }
}

#[test]
fn test_full_dfs_covers_graph() {
    let mut rng = StdRng::seed_from_u64(3);
    let store = random_digraph(&mut rng, 30, 0.05);
    let dfs = store.depth_first_search(None).unwrap();

    assert_eq!(dfs.visited_count(), 30);
    assert_eq!(dfs.postorder.len(), 30);
    assert_eq!(dfs.roots().next(), Some(&0));
}

#[test]
fn test_accessibility_reflexive_and_transitive() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10 {
        let store = random_digraph(&mut rng, 12, 0.1);
        let closure = store.accessibility();

        for (u, reached) in &closure {
            assert!(reached.contains(u));
            for v in reached {
                for w in &closure[v] {
                    assert!(reached.contains(w), "{} reaches {} reaches {}", u, v, w);
                }
            }
        }
    }
}

#[test]
fn test_mutual_accessibility_partition() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..10 {
        let store = random_digraph(&mut rng, 14, 0.1);
        let closure = store.accessibility();
        let scc = store.mutual_accessibility();

        let mut seen = HashSet::new();
        for members in &scc.components {
            assert!(!members.is_empty());
            for m in members {
                assert!(seen.insert(*m), "{} in two components", m);
            }
        }
        assert_eq!(seen.len(), store.len());

        for u in 0..14u32 {
            for v in 0..14u32 {
                let mutual = closure[&u].contains(&v) && closure[&v].contains(&u);
                assert_eq!(scc.mutually_accessible(&u, &v), mutual);
            }
        }
    }
}

#[test]
fn test_topological_order_respects_arrows() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut store = GraphStore::new();
    store.add_nodes((0..20u32).rev());
    for u in 0..20u32 {
        for v in (u + 1)..20 {
            if rng.gen_bool(0.2) {
                store.add_arrow(&u, &v, 1.0).unwrap();
            }
        }
    }

    let order = store.topological_sorting().unwrap();
    assert_eq!(order.len(), 20);
    let pos = |x: u32| order.iter().position(|&y| y == x).unwrap();
    for u in 0..20u32 {
        for v in store.neighbors(&u).unwrap() {
            assert!(pos(u) < pos(v));
        }
    }
}

#[test]
fn test_shortest_paths_are_consistent() {
    let mut rng = StdRng::seed_from_u64(21);
    let store = random_digraph(&mut rng, 25, 0.15);
    let paths = store.shortest_path(&0).unwrap();

    for (node, &distance) in &paths.distances {
        let prev = &paths.predecessors[node];
        let hop = store.arrow_weight(prev, node).unwrap();
        assert_eq!(paths.distance_to(prev).unwrap() + hop, distance);
    }

    // no arrow leaving a settled node offers a shortcut
    for (node, &distance) in &paths.distances {
        for next in store.neighbors(node).unwrap() {
            let via = distance + store.arrow_weight(node, &next).unwrap();
            assert!(paths.distance_to(&next).unwrap() <= via);
        }
    }
}
