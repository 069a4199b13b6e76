use log::{debug, trace};

use crate::{
    Cost, FrontierArena, NodePool, Scratch, SearchConfig, SearchError, SearchNode, SearchStats,
};

/// Result of [`Dijkstra::solve`].
#[derive(Debug)]
pub struct Solution<N: SearchNode> {
    /// Cost of the winner, or `Cost::MAX` when no goal was reached.
    pub cost: N::Cost,
    /// The cheapest goal found. Among equally cheap goals, the first one
    /// discovered.
    pub winner: Option<N>,
    pub stats: SearchStats,
}

impl<N: SearchNode> Solution<N> {
    /// Whether a goal was reached at all.
    #[inline]
    pub fn found(&self) -> bool {
        self.winner.is_some()
    }

    /// The `(cost, winner)` pair, if a goal was reached.
    pub fn into_pair(self) -> Option<(N::Cost, N)> {
        let cost = self.cost;
        self.winner.map(|n| (cost, n))
    }
}

/// Best-first shortest-cost search over nodes of type `N`.
///
/// Construct it with a start node, then call [`solve`](Self::solve), which
/// runs until the frontier is empty. Each round pops the cheapest queued
/// node, expands it and drops it, then handles every successor:
///
/// 1. costlier than the best goal so far: discarded,
/// 2. a goal: becomes the winner if strictly cheaper, otherwise discarded,
/// 3. anything else: queued.
///
/// The start node itself is queued without a goal test; only successors are
/// ever checked with [`SearchNode::is_goal`]. Entries are not re-checked
/// against the best cost when popped, so a node queued before the best cost
/// tightened is still expanded (its successors are then pruned).
///
/// # Example
///
/// ```
/// use aoc_dijkstra::{Dijkstra, SearchConfig, SearchNode};
///
/// /// Count up from 0 to 10 in steps of 1 or 3, paying the step size.
/// struct Counter(u32);
///
/// impl SearchNode for Counter {
///     type Cost = u32;
///     type Scratch = ();
///
///     fn expand(&self, _: &mut (), out: &mut Vec<(u32, Self)>) {
///         for step in [1, 3] {
///             if self.0 + step <= 10 {
///                 out.push((self.0 + step, Counter(self.0 + step)));
///             }
///         }
///     }
///
///     fn is_goal(&self) -> bool {
///         self.0 == 10
///     }
/// }
///
/// let search = Dijkstra::new(Counter(0), SearchConfig::new(64)).unwrap();
/// let (cost, winner) = search.solve().unwrap().into_pair().unwrap();
/// assert_eq!(cost, 10);
/// assert_eq!(winner.0, 10);
/// ```
pub struct Dijkstra<N: SearchNode> {
    lowest: N::Cost,
    winner: Option<N>,
    frontier: FrontierArena<N::Cost>,
    pool: NodePool<N>,
    scratch: N::Scratch,
    stats: SearchStats,
}

impl<N: SearchNode> Dijkstra<N> {
    /// Create a search starting at `start` with zero cost.
    pub fn new(start: N, config: SearchConfig) -> Result<Self, SearchError> {
        Self::with_cost(start, <N::Cost as Cost>::ZERO, config)
    }

    /// Create a search starting at `start` with an initial `cost`.
    pub fn with_cost(start: N, cost: N::Cost, config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let mut search = Self {
            lowest: <N::Cost as Cost>::MAX,
            winner: None,
            frontier: FrontierArena::with_capacity(config.complexity),
            pool: NodePool::new(config.complexity, config.growable_pool),
            scratch: <N::Scratch as Scratch>::with_allowance(config.extra_mem),
            stats: SearchStats::default(),
        };
        search.push(cost, start)?;
        Ok(search)
    }

    /// Number of queued nodes.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Run the search to completion.
    pub fn solve(mut self) -> Result<Solution<N>, SearchError> {
        debug!(
            "search started: frontier capacity {}, pool capacity {}",
            self.frontier.capacity(),
            self.pool.capacity()
        );

        let mut successors: Vec<(N::Cost, N)> = Vec::new();

        while let Some(entry) = self.frontier.pop() {
            let (parent_cost, handle) = entry.into_parts();
            let node = self.pool.take(handle);
            successors.clear();
            node.expand(&mut self.scratch, &mut successors);
            drop(node);

            self.stats.expansions += 1;
            self.stats.generated += successors.len() as u64;

            for (cost, next) in successors.drain(..) {
                debug_assert!(
                    cost >= parent_cost,
                    "successor cost {cost:?} is below its parent's {parent_cost:?}"
                );
                if cost > self.lowest {
                    self.stats.pruned += 1;
                    continue;
                }
                if next.is_goal() {
                    self.stats.goals_seen += 1;
                    if cost < self.lowest {
                        trace!("best goal improved from {:?} to {:?}", self.lowest, cost);
                        self.lowest = cost;
                        self.winner = Some(next);
                        self.stats.improvements += 1;
                    }
                    continue;
                }
                self.push(cost, next)?;
            }
        }

        self.stats.peak_frontier = self.frontier.peak();
        self.stats.peak_pool = self.pool.peak();
        debug!("search finished at cost {:?}: {}", self.lowest, self.stats);

        Ok(Solution {
            cost: self.lowest,
            winner: self.winner,
            stats: self.stats,
        })
    }

    fn push(&mut self, cost: N::Cost, node: N) -> Result<(), SearchError> {
        let handle = self.pool.insert(node)?;
        if let Err((err, handle)) = self.frontier.push(cost, handle) {
            drop(self.pool.take(handle));
            return Err(err);
        }
        self.stats.pushed += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::mem::size_of;

    use rand::{RngExt, SeedableRng};

    use super::*;
    use crate::{Arena, ConfigError};

    // -----------------------------------------------------------------------
    // Six-city road map
    // -----------------------------------------------------------------------

    #[derive(Debug, PartialEq)]
    struct Roads {
        distances: BTreeMap<&'static str, Vec<(&'static str, u32)>>,
    }

    impl Roads {
        fn new() -> Self {
            let mut distances = BTreeMap::new();
            distances.insert(
                "Berlin",
                vec![("Essen", 530), ("Stuttgart", 630), ("Dortmund", 491)],
            );
            distances.insert(
                "Essen",
                vec![("Stuttgart", 430), ("Dortmund", 38), ("Bremen", 255)],
            );
            distances.insert(
                "Stuttgart",
                vec![("Dortmund", 417), ("Bremen", 638), ("Mannheim", 133)],
            );
            distances.insert(
                "Dortmund",
                vec![("Bremen", 234), ("Mannheim", 294), ("Berlin", 492)],
            );
            distances.insert(
                "Bremen",
                vec![("Mannheim", 512), ("Berlin", 390), ("Essen", 248)],
            );
            distances.insert(
                "Mannheim",
                vec![("Berlin", 624), ("Essen", 310), ("Stuttgart", 140)],
            );
            Self { distances }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Trip<'r> {
        roads: &'r Roads,
        last: &'static str,
        route: Vec<&'static str>,
        cost: u32,
    }

    impl<'r> Trip<'r> {
        fn leaving(roads: &'r Roads, city: &'static str) -> Self {
            Self {
                roads,
                last: city,
                route: Vec::new(),
                cost: 0,
            }
        }

        fn successors(&self, out: &mut Vec<(u32, Self)>) {
            if self.last == "Bremen" {
                return;
            }
            let Some(edges) = self.roads.distances.get(self.last) else {
                return;
            };
            for &(to, d) in edges {
                let mut next = self.clone();
                next.route.push(self.last);
                next.last = to;
                next.cost += d;
                out.push((next.cost, next));
            }
        }
    }

    impl SearchNode for Trip<'_> {
        type Cost = u32;
        type Scratch = ();

        fn expand(&self, _: &mut (), out: &mut Vec<(u32, Self)>) {
            self.successors(out);
        }

        fn is_goal(&self) -> bool {
            self.last == "Bremen"
        }
    }

    /// Same trip, but never expands a city twice. The settled cities live in
    /// the scratch space.
    struct SettledTrip<'r>(Trip<'r>);

    impl SearchNode for SettledTrip<'_> {
        type Cost = u32;
        type Scratch = Vec<&'static str>;

        fn expand(&self, settled: &mut Vec<&'static str>, out: &mut Vec<(u32, Self)>) {
            if settled.contains(&self.0.last) {
                return;
            }
            settled.push(self.0.last);
            let mut plain = Vec::new();
            self.0.successors(&mut plain);
            out.extend(plain.into_iter().map(|(c, t)| (c, SettledTrip(t))));
        }

        fn is_goal(&self) -> bool {
            self.0.is_goal()
        }
    }

    #[test]
    fn six_cities_mannheim_to_bremen() {
        let roads = Roads::new();
        let search = Dijkstra::new(Trip::leaving(&roads, "Mannheim"), SearchConfig::new(30)).unwrap();
        assert_eq!(search.frontier_len(), 1);

        let solution = search.solve().unwrap();
        assert_eq!(solution.cost, 565);
        assert_eq!(solution.stats.improvements, 2);
        assert!(solution.stats.pruned > 0);
        assert!(solution.stats.peak_frontier <= 30);

        let (cost, winner) = solution.into_pair().unwrap();
        assert_eq!(cost, 565);
        assert_eq!(winner.last, "Bremen");
        assert_eq!(winner.route, vec!["Mannheim", "Essen"]);
    }

    #[test]
    fn start_cost_carried_by_node() {
        let roads = Roads::new();
        let start = Trip {
            cost: 100,
            ..Trip::leaving(&roads, "Mannheim")
        };
        let search = Dijkstra::with_cost(start, 100, SearchConfig::new(30)).unwrap();
        let solution = search.solve().unwrap();
        assert_eq!(solution.cost, 665);
        assert_eq!(solution.winner.unwrap().cost, 665);
    }

    #[test]
    fn start_cost_only_orders_start_entry() {
        // Successor costs are absolute, so a start cost the node does not
        // carry leaves the result unchanged.
        let roads = Roads::new();
        let search =
            Dijkstra::with_cost(Trip::leaving(&roads, "Mannheim"), 100, SearchConfig::new(30)).unwrap();
        let solution = search.solve().unwrap();
        assert_eq!(solution.cost, 565);
        assert_eq!(solution.winner.unwrap().route, vec!["Mannheim", "Essen"]);
    }

    #[test]
    fn expansion_is_repeatable() {
        let roads = Roads::new();
        let trip = Trip::leaving(&roads, "Dortmund");
        let (mut a, mut b) = (Vec::new(), Vec::new());
        trip.expand(&mut (), &mut a);
        trip.expand(&mut (), &mut b);
        assert_eq!(a.len(), 3);
        assert_eq!(a, b);
    }

    #[test]
    fn scratch_persists_between_expansions() {
        let roads = Roads::new();
        let plain = Dijkstra::new(Trip::leaving(&roads, "Mannheim"), SearchConfig::new(30))
            .unwrap()
            .solve()
            .unwrap();

        let config = SearchConfig::new(30).with_extra_mem(6 * size_of::<&str>());
        let settled = Dijkstra::new(SettledTrip(Trip::leaving(&roads, "Mannheim")), config)
            .unwrap()
            .solve()
            .unwrap();

        assert_eq!(settled.cost, plain.cost);
        assert_eq!(settled.winner.unwrap().0.route, vec!["Mannheim", "Essen"]);
        assert!(settled.stats.generated < plain.stats.generated);
    }

    // -----------------------------------------------------------------------
    // Numbered graphs
    // -----------------------------------------------------------------------

    #[derive(Debug, PartialEq)]
    struct Net {
        edges: Vec<Vec<(usize, u32)>>,
        goals: Vec<usize>,
        expanded: RefCell<Vec<usize>>,
    }

    impl Net {
        fn new(edges: Vec<Vec<(usize, u32)>>, goals: Vec<usize>) -> Self {
            Self {
                edges,
                goals,
                expanded: RefCell::new(Vec::new()),
            }
        }

        fn expanded(&self) -> Vec<usize> {
            self.expanded.borrow().clone()
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Walk<'n> {
        net: &'n Net,
        at: usize,
        cost: u32,
        path: Vec<usize>,
    }

    impl<'n> Walk<'n> {
        fn start(net: &'n Net, at: usize) -> Self {
            Self {
                net,
                at,
                cost: 0,
                path: vec![at],
            }
        }
    }

    impl SearchNode for Walk<'_> {
        type Cost = u32;
        type Scratch = ();

        fn expand(&self, _: &mut (), out: &mut Vec<(u32, Self)>) {
            self.net.expanded.borrow_mut().push(self.at);
            for &(to, w) in &self.net.edges[self.at] {
                let mut next = self.clone();
                next.at = to;
                next.cost += w;
                next.path.push(to);
                out.push((next.cost, next));
            }
        }

        fn is_goal(&self) -> bool {
            self.net.goals.contains(&self.at)
        }
    }

    fn solve(net: &Net, config: SearchConfig) -> Result<Solution<Walk<'_>>, SearchError> {
        Dijkstra::new(Walk::start(net, 0), config)?.solve()
    }

    #[test]
    fn equal_cost_goals_in_one_expansion_keep_first() {
        let net = Net::new(vec![vec![(1, 5), (2, 5)], vec![], vec![]], vec![1, 2]);
        let solution = solve(&net, SearchConfig::new(4)).unwrap();
        assert_eq!(solution.cost, 5);
        assert_eq!(solution.winner.unwrap().at, 1);
        assert_eq!(solution.stats.goals_seen, 2);
        assert_eq!(solution.stats.improvements, 1);
    }

    #[test]
    fn equal_cost_goals_across_expansions_keep_first() {
        // Diamond: 0 -> 1 -> 3 and 0 -> 2 -> 3, both paths cost 3.
        let net = Net::new(
            vec![vec![(1, 1), (2, 1)], vec![(3, 2)], vec![(3, 2)], vec![]],
            vec![3],
        );
        let solution = solve(&net, SearchConfig::new(4)).unwrap();
        assert_eq!(solution.cost, 3);
        assert_eq!(solution.winner.unwrap().path, vec![0, 1, 3]);
        assert_eq!(net.expanded(), vec![0, 1, 2]);
    }

    #[test]
    fn start_goal_is_not_tested() {
        // The start vertex is a goal with no way out: nothing is found.
        let net = Net::new(vec![vec![]], vec![0]);
        let solution = solve(&net, SearchConfig::new(1)).unwrap();
        assert!(!solution.found());
        assert_eq!(solution.cost, u32::MAX);
        assert_eq!(solution.stats.expansions, 1);
    }

    #[test]
    fn start_goal_loses_to_successor_goal() {
        let net = Net::new(vec![vec![(1, 3)], vec![]], vec![0, 1]);
        let solution = solve(&net, SearchConfig::new(2)).unwrap();
        assert_eq!(solution.cost, 3);
        assert_eq!(solution.winner.unwrap().at, 1);
    }

    #[test]
    fn costlier_successor_is_pruned() {
        // The goal is seen first, so vertex 2 (cost 11) never enters the frontier.
        let net = Net::new(vec![vec![(1, 10), (2, 11)], vec![], vec![(3, 12)], vec![]], vec![1]);
        let solution = solve(&net, SearchConfig::new(4)).unwrap();
        assert_eq!(solution.cost, 10);
        assert_eq!(solution.stats.pruned, 1);
        assert_eq!(solution.stats.pushed, 1);
        assert_eq!(net.expanded(), vec![0]);
    }

    #[test]
    fn stale_entry_is_still_expanded() {
        // Vertex 2 is queued before the goal tightens the bound; it is popped
        // and expanded anyway, and its successor is pruned.
        let net = Net::new(vec![vec![(2, 11), (1, 10)], vec![], vec![(3, 12)], vec![]], vec![1]);
        let solution = solve(&net, SearchConfig::new(4)).unwrap();
        assert_eq!(solution.cost, 10);
        assert_eq!(net.expanded(), vec![0, 2]);
        assert_eq!(solution.stats.pruned, 1);
        assert_eq!(solution.winner.unwrap().path, vec![0, 1]);
    }

    #[test]
    fn unreachable_goal_returns_sentinel() {
        let net = Net::new(vec![vec![(1, 4)], vec![], vec![]], vec![2]);
        let solution = solve(&net, SearchConfig::new(4)).unwrap();
        assert_eq!(solution.cost, u32::MAX);
        assert!(solution.into_pair().is_none());
    }

    // -----------------------------------------------------------------------
    // Capacity and configuration
    // -----------------------------------------------------------------------

    fn star() -> Net {
        Net::new(
            vec![vec![(1, 1), (2, 2), (3, 3), (4, 4)], vec![], vec![], vec![], vec![]],
            vec![],
        )
    }

    #[test]
    fn undersized_pool_reports_capacity() {
        let net = star();
        let err = solve(&net, SearchConfig::new(3)).err();
        assert_eq!(
            err,
            Some(SearchError::CapacityExceeded {
                arena: Arena::NodePool,
                capacity: 3
            })
        );
    }

    #[test]
    fn undersized_frontier_reports_capacity_even_with_growable_pool() {
        let net = star();
        let err = solve(&net, SearchConfig::new(3).growable()).err();
        assert_eq!(
            err,
            Some(SearchError::CapacityExceeded {
                arena: Arena::Frontier,
                capacity: 3
            })
        );
    }

    #[test]
    fn exact_capacity_is_enough() {
        let net = star();
        let solution = solve(&net, SearchConfig::new(4)).unwrap();
        assert!(!solution.found());
        assert_eq!(solution.stats.peak_frontier, 4);
        assert_eq!(solution.stats.peak_pool, 4);
        assert_eq!(solution.stats.expansions, 5);
    }

    #[test]
    fn zero_complexity_is_rejected() {
        let net = star();
        let err = Dijkstra::new(Walk::start(&net, 0), SearchConfig::new(0)).err();
        assert_eq!(err, Some(SearchError::Config(ConfigError::ZeroComplexity)));
        assert!(net.expanded().is_empty());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "below its parent")]
    fn decreasing_cost_trips_debug_assertion() {
        struct Backwards;

        impl SearchNode for Backwards {
            type Cost = i32;
            type Scratch = ();

            fn expand(&self, _: &mut (), out: &mut Vec<(i32, Self)>) {
                out.push((-1, Backwards));
            }

            fn is_goal(&self) -> bool {
                false
            }
        }

        let _ = Dijkstra::new(Backwards, SearchConfig::new(2)).unwrap().solve();
    }

    // -----------------------------------------------------------------------
    // Randomized cross-check
    // -----------------------------------------------------------------------

    /// Exhaustive shortest distance from vertex 0 to `goal` in a DAG whose
    /// edges only point to higher vertices.
    fn dag_distance(edges: &[Vec<(usize, u32)>], goal: usize) -> Option<u32> {
        let mut dist: Vec<Option<u32>> = vec![None; edges.len()];
        dist[0] = Some(0);
        for from in 0..edges.len() {
            let Some(d) = dist[from] else {
                continue;
            };
            for &(to, w) in &edges[from] {
                let candidate = d + w;
                if dist[to].is_none_or(|cur| candidate < cur) {
                    dist[to] = Some(candidate);
                }
            }
        }
        dist[goal]
    }

    #[test]
    fn random_dags_match_exhaustive_distance() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let n = rng.random_range(2..9usize);
            let mut edges = vec![Vec::new(); n];
            for (from, out) in edges.iter_mut().enumerate() {
                for to in from + 1..n {
                    if rng.random_range(0..3u32) != 0 {
                        out.push((to, rng.random_range(0..20u32)));
                    }
                }
            }
            let goal = n - 1;
            let expected = dag_distance(&edges, goal);

            let net = Net::new(edges, vec![goal]);
            let solution = solve(&net, SearchConfig::new(4096)).unwrap();
            match expected {
                Some(cost) => {
                    assert_eq!(solution.cost, cost);
                    let winner = solution.winner.unwrap();
                    assert_eq!(winner.at, goal);
                    assert_eq!(winner.cost, cost);
                }
                None => {
                    assert!(!solution.found());
                    assert_eq!(solution.cost, u32::MAX);
                }
            }
        }
    }
}
