//! Property-based tests for the assemblers.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use crate::{
        count_matchings, independence_poly, independent_sets, matching_poly,
        permanental_minor_poly, EdgeSchedule, IndependenceConfig, MatchingConfig,
        PermanentalConfig, VertexSchedule,
    };
    use hobj_core::Modular;
    use hobj_order::Graph;
    use hobj_rings::{Residue, Ring, Z};

    fn graph() -> impl Strategy<Value = Graph<u8>> {
        proptest::collection::btree_set((0u8..9, 0u8..9), 1..18).prop_filter_map(
            "no edges",
            |pairs| {
                let edges: BTreeSet<(u8, u8)> = pairs
                    .into_iter()
                    .filter(|(u, v)| u != v)
                    .map(|(u, v)| (u.min(v), u.max(v)))
                    .collect();
                (!edges.is_empty()).then(|| Graph::from_edges(edges).unwrap())
            },
        )
    }

    fn matrix() -> impl Strategy<Value = Vec<Vec<i64>>> {
        (1usize..5, 1usize..5).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(proptest::collection::vec(-3i64..4, cols), rows)
        })
    }

    proptest! {
        #[test]
        fn matchings_do_not_depend_on_schedule(g in graph(), pick in any::<prop::sample::Index>()) {
            let seed = g.topology().edges()[pick.index(g.num_edges())];
            let seed = (g.id(seed.0).clone(), g.id(seed.1).clone());
            let fixed: Vec<(u8, u8)> = g
                .topology()
                .edges()
                .iter()
                .rev()
                .map(|&(a, b)| (*g.id(a), *g.id(b)))
                .collect();

            let reference = matching_poly::<Z, _>(&g, &MatchingConfig::new()).unwrap();
            for schedule in [
                EdgeSchedule::Greedy { seed: Some(seed) },
                EdgeSchedule::BestSeed,
                EdgeSchedule::Fixed(fixed),
            ] {
                let poly = matching_poly::<Z, _>(&g, &schedule.into()).unwrap();
                prop_assert_eq!(&poly, &reference);
            }
        }

        #[test]
        fn independence_does_not_depend_on_schedule(g in graph()) {
            let reversed: Vec<u8> = g.ids().iter().rev().copied().collect();
            let greedy = independence_poly::<Z, _>(&g, &IndependenceConfig::new()).unwrap();
            let fixed =
                independence_poly::<Z, _>(&g, &VertexSchedule::Fixed(reversed).into()).unwrap();
            prop_assert_eq!(greedy, fixed);
        }

        #[test]
        fn enumeration_agrees_with_independence(g in graph()) {
            let sets = independent_sets(&g).unwrap();
            let poly = independence_poly::<Z, _>(&g, &IndependenceConfig::new()).unwrap();
            prop_assert_eq!(Z::new(sets.len() as i64), poly.eval(&Z::one()));
        }

        #[test]
        fn relabeling_preserves_matchings(g in graph(), offset in 0u8..100) {
            let shifted = Graph::from_edges(g.topology().edges().iter().map(|&(a, b)| {
                (u32::from(*g.id(a)) + u32::from(offset), u32::from(*g.id(b)) + u32::from(offset))
            }))
            .unwrap();
            prop_assert_eq!(
                matching_poly::<Z, _>(&g, &MatchingConfig::new()).unwrap(),
                matching_poly::<Z, _>(&shifted, &MatchingConfig::new()).unwrap()
            );
        }

        #[test]
        fn modular_matchings_reduce_symbolic(g in graph(), point in -20i64..20) {
            let p = 10_007u64;
            let poly = matching_poly::<Z, _>(&g, &MatchingConfig::new()).unwrap();
            let expected = poly.eval(&Z::new(point)).residue(p).unwrap();
            let algebra = Modular::new(&Z::new(point), p).unwrap();
            prop_assert_eq!(count_matchings(&g, &MatchingConfig::new(), algebra).unwrap(), expected);
        }

        #[test]
        fn permanental_minors_are_transpose_invariant(m in matrix()) {
            let rows: Vec<Vec<Z>> = m.iter().map(|row| row.iter().copied().map(Z::new).collect()).collect();
            let cols: Vec<Vec<Z>> = (0..m[0].len())
                .map(|j| m.iter().map(|row| Z::new(row[j])).collect())
                .collect();
            prop_assert_eq!(
                permanental_minor_poly(&rows, &PermanentalConfig::new()).unwrap(),
                permanental_minor_poly(&cols, &PermanentalConfig::new()).unwrap()
            );
        }
    }
}
