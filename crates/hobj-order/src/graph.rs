//! Validated simple graphs.
//!
//! Node ids can be any ordered, hashable type. On construction they are
//! sorted and relabelled to `0..n`, and every adjacency list is sorted, so
//! two inputs that differ only by naming produce the same [`Topology`].

use std::fmt::Debug;
use std::hash::Hash;

use hobj_core::{HobjError, Result};
use rustc_hash::{FxHashMap, FxHashSet};

/// An edge between two dense node indices, smaller index first.
pub type Edge = (usize, usize);

/// Dense adjacency over `0..n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topology {
    adjacency: Vec<Vec<usize>>,
    edges: Vec<Edge>,
}

impl Topology {
    /// Builds a topology from sorted, symmetric adjacency lists.
    fn from_adjacency(adjacency: Vec<Vec<usize>>) -> Self {
        let edges = adjacency
            .iter()
            .enumerate()
            .flat_map(|(a, nbrs)| nbrs.iter().filter(move |&&b| a < b).map(move |&b| (a, b)))
            .collect();
        Self { adjacency, edges }
    }

    /// Number of nodes.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Neighbours of `node`, ascending.
    #[must_use]
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// Degree of `node`.
    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.adjacency[node].len()
    }

    /// All adjacency lists.
    #[must_use]
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// Edges in lexicographic order; the position of an edge is its edge
    /// index.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns true if `a` and `b` are adjacent.
    #[must_use]
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|nbrs| nbrs.binary_search(&b).is_ok())
    }

    /// Index of the edge `{a, b}` in [`Topology::edges`].
    #[must_use]
    pub fn edge_index(&self, a: usize, b: usize) -> Option<usize> {
        self.edges.binary_search(&(a.min(b), a.max(b))).ok()
    }

    /// Edge indices incident to `node`, in neighbour order.
    #[must_use]
    pub fn incident_edges(&self, node: usize) -> Vec<usize> {
        self.adjacency[node]
            .iter()
            .filter_map(|&other| self.edge_index(node, other))
            .collect()
    }
}

/// A simple undirected graph over caller ids.
#[derive(Clone, Debug)]
pub struct Graph<N> {
    ids: Vec<N>,
    index: FxHashMap<N, usize>,
    topology: Topology,
}

impl<N: Ord + Hash + Clone + Debug> Graph<N> {
    /// Builds a graph from `node -> neighbours` pairs.
    ///
    /// Every node must appear as a key, even if isolated.
    ///
    /// # Errors
    ///
    /// - [`HobjError::MalformedGraph`] on a repeated key, a self-loop, a
    ///   repeated neighbour or a neighbour that is not a key.
    /// - [`HobjError::AsymmetricGraph`] if `u` lists `v` but `v` does not
    ///   list `u`.
    pub fn new<I, J>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, J)>,
        J: IntoIterator<Item = N>,
    {
        let mut raw: Vec<(N, Vec<N>)> = adjacency
            .into_iter()
            .map(|(node, nbrs)| (node, nbrs.into_iter().collect()))
            .collect();
        raw.sort_by(|a, b| a.0.cmp(&b.0));

        let ids: Vec<N> = raw.iter().map(|(node, _)| node.clone()).collect();
        if let Some(pair) = ids.windows(2).find(|w| w[0] == w[1]) {
            return Err(HobjError::MalformedGraph(format!(
                "node {:?} listed twice",
                pair[0]
            )));
        }
        let index: FxHashMap<N, usize> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();

        let mut dense = Vec::with_capacity(raw.len());
        for (node, nbrs) in &raw {
            let mut list = Vec::with_capacity(nbrs.len());
            for nbr in nbrs {
                if nbr == node {
                    return Err(HobjError::MalformedGraph(format!("self-loop at {node:?}")));
                }
                let &j = index.get(nbr).ok_or_else(|| {
                    HobjError::MalformedGraph(format!("{node:?} lists unknown node {nbr:?}"))
                })?;
                list.push(j);
            }
            list.sort_unstable();
            if list.windows(2).any(|w| w[0] == w[1]) {
                return Err(HobjError::MalformedGraph(format!(
                    "{node:?} lists a neighbour twice"
                )));
            }
            dense.push(list);
        }

        for (a, nbrs) in dense.iter().enumerate() {
            for &b in nbrs {
                if dense[b].binary_search(&a).is_err() {
                    return Err(HobjError::AsymmetricGraph {
                        node: format!("{:?}", ids[a]),
                        neighbor: format!("{:?}", ids[b]),
                    });
                }
            }
        }

        Ok(Self {
            ids,
            index,
            topology: Topology::from_adjacency(dense),
        })
    }

    /// Builds a graph from an edge list; nodes are the edge endpoints.
    ///
    /// # Errors
    ///
    /// [`HobjError::MalformedGraph`] on a self-loop or a repeated edge.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut adjacency: FxHashMap<N, Vec<N>> = FxHashMap::default();
        let mut seen = FxHashSet::default();
        for (u, v) in edges {
            if u == v {
                return Err(HobjError::MalformedGraph(format!("self-loop at {u:?}")));
            }
            let key = if u < v {
                (u.clone(), v.clone())
            } else {
                (v.clone(), u.clone())
            };
            if !seen.insert(key) {
                return Err(HobjError::MalformedGraph(format!(
                    "edge ({u:?}, {v:?}) listed twice"
                )));
            }
            adjacency.entry(u.clone()).or_default().push(v.clone());
            adjacency.entry(v).or_default().push(u);
        }
        Self::new(adjacency)
    }

    /// The dense view.
    #[must_use]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Number of nodes.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.ids.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.topology.num_edges()
    }

    /// Caller id of dense node `i`.
    #[must_use]
    pub fn id(&self, i: usize) -> &N {
        &self.ids[i]
    }

    /// Caller ids, ascending.
    #[must_use]
    pub fn ids(&self) -> &[N] {
        &self.ids
    }

    /// Dense index of a caller id.
    #[must_use]
    pub fn index_of(&self, id: &N) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Dense index of a caller id, as a graph error if unknown.
    ///
    /// # Errors
    ///
    /// [`HobjError::MalformedGraph`] if `id` is not a node.
    pub fn require(&self, id: &N) -> Result<usize> {
        self.index_of(id)
            .ok_or_else(|| HobjError::MalformedGraph(format!("unknown node {id:?}")))
    }

    /// Translates a caller edge into a dense edge.
    ///
    /// # Errors
    ///
    /// [`HobjError::MalformedGraph`] if either endpoint is unknown or the
    /// two are not adjacent.
    pub fn require_edge(&self, u: &N, v: &N) -> Result<Edge> {
        let (a, b) = (self.require(u)?, self.require(v)?);
        if !self.topology.has_edge(a, b) {
            return Err(HobjError::MalformedGraph(format!(
                "({u:?}, {v:?}) is not an edge"
            )));
        }
        Ok((a.min(b), a.max(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relabels_sorted() {
        let g = Graph::new(vec![
            ("c", vec!["a"]),
            ("a", vec!["c", "b"]),
            ("b", vec!["a"]),
        ])
        .unwrap();
        assert_eq!(g.ids(), &["a", "b", "c"]);
        assert_eq!(g.topology().neighbors(0), &[1, 2]);
        assert_eq!(g.topology().edges(), &[(0, 1), (0, 2)]);
        assert_eq!(g.topology().edge_index(2, 0), Some(1));
        assert_eq!(g.topology().incident_edges(0), vec![0, 1]);
    }

    #[test]
    fn test_rejects_asymmetry() {
        let err = Graph::new(vec![(0, vec![1]), (1, vec![])]).unwrap_err();
        assert_eq!(
            err,
            HobjError::AsymmetricGraph {
                node: "0".to_string(),
                neighbor: "1".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_malformed_lists() {
        assert!(matches!(
            Graph::new(vec![(0, vec![0])]),
            Err(HobjError::MalformedGraph(_))
        ));
        assert!(matches!(
            Graph::new(vec![(0, vec![7])]),
            Err(HobjError::MalformedGraph(_))
        ));
        assert!(matches!(
            Graph::new(vec![(0, vec![1, 1]), (1, vec![0])]),
            Err(HobjError::MalformedGraph(_))
        ));
        assert!(matches!(
            Graph::new(vec![(0, vec![]), (0, vec![])]),
            Err(HobjError::MalformedGraph(_))
        ));
    }

    #[test]
    fn test_from_edges() {
        let g = Graph::from_edges(vec![(3, 1), (1, 2)]).unwrap();
        assert_eq!(g.ids(), &[1, 2, 3]);
        assert_eq!(g.require_edge(&3, &1), Ok((0, 2)));
        assert!(g.require_edge(&2, &3).is_err());
        assert!(Graph::from_edges(vec![(1, 2), (2, 1)]).is_err());
    }

    #[test]
    fn test_isolated_nodes_kept() {
        let g = Graph::new(vec![(0, vec![1]), (1, vec![0]), (2, vec![])]).unwrap();
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.topology().degree(2), 0);
    }
}
