use adjacency_graph::{Graph, GraphError};
use proptest::prelude::*;

const N: usize = 6;

#[derive(Debug, Clone)]
enum Op {
    Add(usize, usize, i32),
    Remove(usize, usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..N, 0..N, 0..10i32).prop_map(|(u, v, w)| Op::Add(u, v, w)),
        1 => (0..N, 0..N).prop_map(|(u, v)| Op::Remove(u, v)),
    ]
}

fn apply(graph: &mut Graph, ops: &[Op]) {
    for op in ops {
        match *op {
            Op::Add(u, v, w) => graph.add_edge(u, v, f64::from(w)).unwrap(),
            Op::Remove(u, v) => graph.remove_edge(u, v).unwrap(),
        }
    }
}

fn snapshot(graph: &Graph) -> (Vec<Vec<f64>>, Vec<Vec<(usize, f64)>>) {
    let lists = (0..graph.vertex_count())
        .map(|v| graph.adjacency(v).unwrap().to_vec())
        .collect();
    (graph.matrix().to_vec(), lists)
}

#[test]
fn undirected_unweighted_walkthrough() {
    let mut g = Graph::new(5, false, false);
    for (u, v) in [(0, 1), (0, 2), (1, 3), (3, 4)] {
        g.add_unit_edge(u, v).unwrap();
    }
    assert_eq!(g.neighbors(1).unwrap(), vec![0, 3]);
    assert_eq!(g.degree(1).unwrap(), 2);
    assert!(g.has_edge(0, 2).unwrap());

    g.remove_edge(0, 2).unwrap();
    assert!(!g.has_edge(0, 2).unwrap());
    assert_eq!(g.neighbors(0).unwrap(), vec![1]);
    assert!(g.check_consistency().is_ok());
}

#[test]
fn directed_weighted_walkthrough() {
    let mut g = Graph::new(4, true, true);
    for (u, v, w) in [(0, 1, 5.0), (0, 2, 3.0), (1, 3, 2.0), (2, 3, 7.0)] {
        g.add_edge(u, v, w).unwrap();
    }
    assert_eq!(g.matrix()[0][1], 5.0);
    assert_eq!(g.matrix()[1][0], 0.0);
    assert_eq!(g.degree(0).unwrap(), 2);
    assert_eq!(g.degree(3).unwrap(), 0);
    assert_eq!(
        g.display_list(),
        "Adjacency list:\n0: [1(5), 2(3)]\n1: [3(2)]\n2: [3(7)]\n3: []\n"
    );
}

#[test]
fn rejected_add_is_atomic() {
    let mut g = Graph::new(5, false, true);
    g.add_edge(1, 2, 4.0).unwrap();
    let before = snapshot(&g);

    assert_eq!(
        g.add_edge(5, 0, 1.0),
        Err(GraphError::InvalidVertex { vertex: 5, vertex_count: 5 })
    );
    assert_eq!(snapshot(&g), before);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_undirected_matrix_is_symmetric(
        ops in prop::collection::vec(op_strategy(), 0..40),
        weighted in any::<bool>(),
    ) {
        let mut g = Graph::new(N, false, weighted);
        apply(&mut g, &ops);
        for u in 0..N {
            for v in 0..N {
                prop_assert_eq!(g.matrix()[u][v], g.matrix()[v][u]);
            }
        }
    }

    #[test]
    fn prop_views_stay_consistent(
        ops in prop::collection::vec(op_strategy(), 0..40),
        directed in any::<bool>(),
        weighted in any::<bool>(),
    ) {
        let mut g = Graph::new(N, directed, weighted);
        apply(&mut g, &ops);
        prop_assert!(g.check_consistency().is_ok(), "{:?}", g.check_consistency());

        for u in 0..N {
            for v in 0..N {
                let cell = g.matrix()[u][v];
                if cell != 0.0 {
                    prop_assert!(g.adjacency(u).unwrap().contains(&(v, cell)));
                }
            }
        }
    }

    #[test]
    fn prop_unweighted_stores_unit_weights(
        ops in prop::collection::vec(op_strategy(), 0..40),
        directed in any::<bool>(),
    ) {
        let mut g = Graph::new(N, directed, false);
        apply(&mut g, &ops);
        prop_assert!(g.matrix().iter().flatten().all(|&w| w == 0.0 || w == 1.0));
        for v in 0..N {
            prop_assert!(g.adjacency(v).unwrap().iter().all(|&(_, w)| w == 1.0));
        }
    }

    #[test]
    fn prop_remove_is_idempotent(
        ops in prop::collection::vec(op_strategy(), 0..40),
        directed in any::<bool>(),
        u in 0..N,
        v in 0..N,
    ) {
        let mut g = Graph::new(N, directed, true);
        apply(&mut g, &ops);

        g.remove_edge(u, v).unwrap();
        let once = snapshot(&g);
        g.remove_edge(u, v).unwrap();
        prop_assert_eq!(snapshot(&g), once);
        prop_assert!(!g.has_edge(u, v).unwrap());
        prop_assert!(!g.neighbors(u).unwrap().contains(&v));
    }

    #[test]
    fn prop_degree_counts_list_entries(
        ops in prop::collection::vec(op_strategy(), 0..40),
        directed in any::<bool>(),
    ) {
        let mut g = Graph::new(N, directed, false);
        apply(&mut g, &ops);

        let adds_from = |x: usize| ops.iter().filter(|op| matches!(op, Op::Add(u, _, _) if *u == x)).count();
        for v in 0..N {
            prop_assert_eq!(g.degree(v).unwrap(), g.neighbors(v).unwrap().len());
            if directed && !ops.iter().any(|op| matches!(op, Op::Remove(..))) {
                prop_assert_eq!(g.degree(v).unwrap(), adds_from(v));
            }
        }
    }
}
