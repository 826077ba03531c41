//! Property-based tests for the schedulers.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::bridging::{greedy_edge_order, greedy_vertex_order};
    use crate::frontier::edge_frontier;
    use crate::graph::Graph;
    use crate::strategy::BestSeed;

    fn random_graph() -> impl Strategy<Value = Graph<u8>> {
        proptest::collection::btree_set((0u8..12, 0u8..12), 0..30).prop_map(|pairs| {
            let edges: std::collections::BTreeSet<(u8, u8)> = pairs
                .into_iter()
                .filter(|(u, v)| u != v)
                .map(|(u, v)| (u.min(v), u.max(v)))
                .collect();
            Graph::from_edges(edges).unwrap()
        })
    }

    proptest! {
        #[test]
        fn edge_orders_are_permutations(graph in random_graph(), pick in any::<prop::sample::Index>()) {
            let topology = graph.topology();
            prop_assume!(topology.num_edges() > 0);
            let seed = topology.edges()[pick.index(topology.num_edges())];
            let mut order = greedy_edge_order(topology, seed);
            prop_assert_eq!(order[0], seed);
            order.sort_unstable();
            prop_assert_eq!(order.as_slice(), topology.edges());
        }

        #[test]
        fn vertex_orders_are_permutations(graph in random_graph(), pick in any::<prop::sample::Index>()) {
            let topology = graph.topology();
            prop_assume!(topology.num_edges() > 0);
            let (a, b) = topology.edges()[pick.index(topology.num_edges())];
            let mut order = greedy_vertex_order(topology, &[a, b]);
            order.sort_unstable();
            prop_assert_eq!(order, (0..topology.num_nodes()).collect::<Vec<_>>());
        }

        #[test]
        fn best_seed_is_no_worse_than_any_seed(graph in random_graph(), pick in any::<prop::sample::Index>()) {
            let topology = graph.topology();
            prop_assume!(topology.num_edges() > 0);
            let seed = topology.edges()[pick.index(topology.num_edges())];
            let best = BestSeed::search(topology).unwrap();
            let order = greedy_edge_order(topology, seed);
            prop_assert!(best.frontier <= edge_frontier(topology, &order));
        }
    }
}
