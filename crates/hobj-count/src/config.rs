//! Configuration of the assemblers.
//!
//! Schedules name nodes by caller id; they are translated to dense indices
//! and validated against the graph when a computation starts.

use hobj_core::DEFAULT_CAPACITY;

/// How edges are ordered for a matching computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EdgeSchedule<N> {
    /// Greedy bridging from `seed` (default: the smallest edge).
    Greedy {
        /// Seed edge by caller ids.
        seed: Option<(N, N)>,
    },
    /// Greedy bridging from every edge, keeping the smallest frontier.
    BestSeed,
    /// An explicit order; must list every edge exactly once.
    Fixed(Vec<(N, N)>),
}

impl<N> Default for EdgeSchedule<N> {
    fn default() -> Self {
        Self::Greedy { seed: None }
    }
}

/// How vertices are ordered for an independence computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VertexSchedule<N> {
    /// Greedy bridging from a seed path of adjacent nodes (default: the
    /// smallest edge).
    Greedy {
        /// Seed path by caller ids.
        seed_path: Option<Vec<N>>,
    },
    /// An explicit order; must list every node exactly once.
    Fixed(Vec<N>),
}

impl<N> Default for VertexSchedule<N> {
    fn default() -> Self {
        Self::Greedy { seed_path: None }
    }
}

/// Configuration for matching computations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchingConfig<N> {
    /// Edge schedule (default: greedy from the smallest edge).
    pub schedule: EdgeSchedule<N>,
    /// Maximum number of simultaneously open vertices (default: unbounded).
    pub capacity: usize,
}

impl<N> MatchingConfig<N> {
    /// Greedy schedule, unbounded pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            schedule: EdgeSchedule::default(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl<N> Default for MatchingConfig<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> From<EdgeSchedule<N>> for MatchingConfig<N> {
    fn from(schedule: EdgeSchedule<N>) -> Self {
        Self {
            schedule,
            ..Self::new()
        }
    }
}

/// Configuration for independence computations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndependenceConfig<N> {
    /// Vertex schedule (default: greedy from the smallest edge).
    pub schedule: VertexSchedule<N>,
    /// Maximum number of simultaneously open edges.
    pub capacity: usize,
}

impl<N> IndependenceConfig<N> {
    /// Greedy schedule, unbounded pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            schedule: VertexSchedule::default(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl<N> Default for IndependenceConfig<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> From<VertexSchedule<N>> for IndependenceConfig<N> {
    fn from(schedule: VertexSchedule<N>) -> Self {
        Self {
            schedule,
            ..Self::new()
        }
    }
}

/// Configuration for permanental-minor computations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PermanentalConfig {
    /// Maximum number of simultaneously open columns.
    pub capacity: usize,
}

impl PermanentalConfig {
    /// Unbounded pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Default for PermanentalConfig {
    fn default() -> Self {
        Self::new()
    }
}
