//! Property-based tests for the transition engine.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use crate::{HardObjects, Incidence, Modular, Symbolic};
    use hobj_rings::{Ring, Z};

    type Edge = (u8, u8);

    fn edge_set() -> impl Strategy<Value = Vec<Edge>> {
        proptest::collection::btree_set((0u8..7, 0u8..7), 0..12).prop_map(|pairs| {
            pairs
                .into_iter()
                .filter(|(u, v)| u != v)
                .map(|(u, v)| (u.min(v), u.max(v)))
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect()
        })
    }

    fn shuffled_edges() -> impl Strategy<Value = Vec<Edge>> {
        edge_set().prop_flat_map(|edges| Just(edges).prop_shuffle())
    }

    /// Closing lists for an edge order: each vertex closes on its last edge.
    fn closings(order: &[Edge]) -> Vec<Vec<u8>> {
        let mut seen = BTreeSet::new();
        let mut lists = vec![Vec::new(); order.len()];
        for (i, &(u, v)) in order.iter().enumerate().rev() {
            for w in [u, v] {
                if seen.insert(w) {
                    lists[i].push(w);
                }
            }
        }
        lists
    }

    fn brute_force(edges: &[Edge]) -> Vec<i64> {
        let mut counts = vec![0i64; edges.len() + 1];
        for subset in 0u32..(1 << edges.len()) {
            let mut used = 0u8;
            let mut ok = true;
            for (i, &(u, v)) in edges.iter().enumerate() {
                if subset & (1 << i) != 0 {
                    let bits = (1 << u) | (1 << v);
                    ok &= used & bits == 0;
                    used |= bits;
                }
            }
            if ok {
                counts[subset.count_ones() as usize] += 1;
            }
        }
        while counts.len() > 1 && counts.last() == Some(&0) {
            counts.pop();
        }
        counts.reverse();
        counts
    }

    proptest! {
        #[test]
        fn matchings_agree_with_brute_force(order in shuffled_edges()) {
            let mut engine = HardObjects::new(Symbolic::<Z>::new());
            for (&(u, v), closing) in order.iter().zip(closings(&order)) {
                engine
                    .apply((u, v), &Incidence::single(Z::one(), vec![u, v]).with_closing(closing))
                    .unwrap();
            }
            let expected: Vec<Z> = brute_force(&order).into_iter().map(Z::new).collect();
            let result = engine.into_result().unwrap();
            prop_assert_eq!(result.coeffs(), expected.as_slice());
        }

        #[test]
        fn modular_matches_reduced_symbolic(order in shuffled_edges(), point in 0i64..20) {
            let mut symbolic = HardObjects::new(Symbolic::<Z>::new());
            let mut modular = HardObjects::new(Modular::new(&Z::new(point), 13).unwrap());
            for (&(u, v), closing) in order.iter().zip(closings(&order)) {
                let incidence = Incidence::single(Z::one(), vec![u, v]).with_closing(closing);
                symbolic.apply((u, v), &incidence).unwrap();
                modular.apply((u, v), &incidence).unwrap();
            }
            let value = symbolic.into_result().unwrap().eval(&Z::new(point));
            prop_assert_eq!(Some(modular.into_result().unwrap()), value.0.residue(13));
        }
    }
}
