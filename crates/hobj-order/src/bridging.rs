//! Greedy bridging orders.
//!
//! Both schedulers grow a covered sub-graph from a seed. Nodes with some but
//! not all of their edges covered are *active*; they are what the engine
//! keeps open. Each round finds the shortest path of uncovered edges joining
//! two active nodes and covers it, so that the nodes at both ends can finish
//! soon after. The edge scheduler additionally covers, after every round,
//! any edge that finishes a node for free.

use std::collections::VecDeque;

use log::debug;
use rustc_hash::FxHashSet;

use crate::graph::{Edge, Topology};

/// The covered sub-graph and the order in which its edges were added.
struct Cover<'t> {
    topology: &'t Topology,
    linked: FxHashSet<Edge>,
    covered: Vec<usize>,
    order: Vec<Edge>,
}

impl<'t> Cover<'t> {
    fn new(topology: &'t Topology) -> Self {
        Self {
            topology,
            linked: FxHashSet::default(),
            covered: vec![0; topology.num_nodes()],
            order: Vec::with_capacity(topology.num_edges()),
        }
    }

    fn is_linked(&self, a: usize, b: usize) -> bool {
        self.linked.contains(&(a.min(b), a.max(b)))
    }

    fn link(&mut self, a: usize, b: usize) {
        let edge = (a.min(b), a.max(b));
        if self.linked.insert(edge) {
            self.covered[a] += 1;
            self.covered[b] += 1;
            self.order.push(edge);
        }
    }

    fn is_active(&self, node: usize) -> bool {
        self.covered[node] > 0 && self.covered[node] < self.topology.degree(node)
    }

    /// Touched and missing exactly one edge.
    fn one_short(&self, node: usize) -> bool {
        self.covered[node] > 0 && self.covered[node] + 1 == self.topology.degree(node)
    }

    fn is_complete(&self) -> bool {
        self.order.len() == self.topology.num_edges()
    }

    /// Covers free edges until none is left: the last edge of a node that is
    /// one short, and edges between two touched nodes where either side is
    /// one short.
    fn saturate(&mut self) {
        let n = self.topology.num_nodes();
        loop {
            let mut grew = false;

            for k in 0..n {
                if self.one_short(k) {
                    let missing = self
                        .topology
                        .neighbors(k)
                        .iter()
                        .copied()
                        .find(|&j| !self.is_linked(k, j));
                    if let Some(j) = missing {
                        self.link(k, j);
                        grew = true;
                    }
                }
            }

            for k1 in 0..n {
                for i in 0..self.topology.degree(k1) {
                    let k2 = self.topology.neighbors(k1)[i];
                    if k1 < k2
                        && self.covered[k1] > 0
                        && self.covered[k2] > 0
                        && !self.is_linked(k1, k2)
                        && (self.one_short(k1) || self.one_short(k2))
                    {
                        self.link(k1, k2);
                        grew = true;
                    }
                }
            }

            if !grew {
                break;
            }
        }
    }

    fn active(&self) -> Vec<usize> {
        (0..self.topology.num_nodes())
            .filter(|&k| self.is_active(k))
            .collect()
    }

    /// Shortest path of uncovered edges between two distinct active nodes,
    /// listed from the far end back to its start. Ties go to the lowest
    /// start node, then to breadth-first discovery order.
    fn shortest_bridge(&self, active: &[usize]) -> Option<Vec<usize>> {
        let n = self.topology.num_nodes();
        let mut is_active = vec![false; n];
        for &k in active {
            is_active[k] = true;
        }

        let mut best: Option<Vec<usize>> = None;
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut queue = VecDeque::new();

        for &start in active {
            parent.iter_mut().for_each(|p| *p = None);
            parent[start] = Some(start);
            queue.clear();
            queue.push_back(start);

            let mut found = None;
            'search: while let Some(u) = queue.pop_front() {
                for &v in self.topology.neighbors(u) {
                    if parent[v].is_some() || self.is_linked(u, v) {
                        continue;
                    }
                    parent[v] = Some(u);
                    if is_active[v] {
                        found = Some(v);
                        break 'search;
                    }
                    queue.push_back(v);
                }
            }

            let Some(end) = found else { continue };
            let mut path = vec![end];
            let mut node = end;
            while let Some(p) = parent[node] {
                path.push(p);
                node = p;
                if is_active[p] {
                    break;
                }
            }
            if best.as_ref().map_or(true, |b| path.len() < b.len()) {
                best = Some(path);
            }
        }
        best
    }

    fn link_path(&mut self, path: &[usize]) {
        for pair in path.windows(2) {
            self.link(pair[0], pair[1]);
        }
    }
}

/// Orders every edge of `topology` by greedy bridging from `seed`.
///
/// `seed` must be an edge. The result is always a permutation of
/// [`Topology::edges`]: another component is entered through its smallest
/// edge, and if no bridge exists the remaining edges are appended in index
/// order.
#[must_use]
pub(crate) fn greedy_edge_order(topology: &Topology, seed: Edge) -> Vec<Edge> {
    if topology.num_edges() == 0 {
        return Vec::new();
    }
    let mut cover = Cover::new(topology);
    cover.link(seed.0, seed.1);
    cover.saturate();

    while !cover.is_complete() {
        let active = cover.active();
        if active.is_empty() {
            let next = topology
                .edges()
                .iter()
                .copied()
                .find(|&(a, b)| !cover.is_linked(a, b));
            if let Some((a, b)) = next {
                cover.link(a, b);
                cover.saturate();
            }
            continue;
        }

        match cover.shortest_bridge(&active) {
            Some(path) => {
                cover.link_path(&path);
                cover.saturate();
            }
            None => {
                for &(a, b) in topology.edges() {
                    cover.link(a, b);
                }
            }
        }
    }

    debug!("ordered {} edges from seed {:?}", cover.order.len(), seed);
    cover.order
}

/// Orders every node of `topology` by greedy bridging from `seed_path`.
///
/// Consecutive seed nodes must be adjacent. Each bridging path contributes
/// its interior nodes; nodes never reached are appended in ascending order.
#[must_use]
pub(crate) fn greedy_vertex_order(topology: &Topology, seed_path: &[usize]) -> Vec<usize> {
    let mut cover = Cover::new(topology);
    let mut order = seed_path.to_vec();
    cover.link_path(seed_path);

    loop {
        let active = cover.active();
        if active.is_empty() {
            break;
        }
        let Some(path) = cover.shortest_bridge(&active) else {
            break;
        };
        order.extend_from_slice(&path[1..path.len() - 1]);
        cover.link_path(&path);
    }

    let mut placed = vec![false; topology.num_nodes()];
    for &k in &order {
        placed[k] = true;
    }
    order.extend((0..topology.num_nodes()).filter(|&k| !placed[k]));

    debug!("ordered {} nodes from seed path {:?}", order.len(), seed_path);
    order
}
