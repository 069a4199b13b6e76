//! Cheapest road trip between German cities.
//!
//! The road map is directed and has cycles. Trips are not deduplicated, so
//! the search relies on pruning against the best trip found so far.

use std::collections::BTreeMap;

use aoc_dijkstra::{Dijkstra, SearchConfig, SearchError, SearchNode, Solution};

/// Directed road distances in kilometres.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadMap {
    roads: BTreeMap<&'static str, Vec<(&'static str, u32)>>,
}

impl RoadMap {
    /// Add a road from `from` to `to`.
    pub fn connect(&mut self, from: &'static str, to: &'static str, km: u32) {
        self.roads.entry(from).or_default().push((to, km));
    }

    /// Roads leaving `city`, in insertion order.
    pub fn roads_from(&self, city: &str) -> &[(&'static str, u32)] {
        self.roads.get(city).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for RoadMap {
    /// The six-city sample map.
    fn default() -> Self {
        const ROADS: [(&str, [(&str, u32); 3]); 6] = [
            ("Berlin", [("Essen", 530), ("Stuttgart", 630), ("Dortmund", 491)]),
            ("Essen", [("Stuttgart", 430), ("Dortmund", 38), ("Bremen", 255)]),
            ("Stuttgart", [("Dortmund", 417), ("Bremen", 638), ("Mannheim", 133)]),
            ("Dortmund", [("Bremen", 234), ("Mannheim", 294), ("Berlin", 492)]),
            ("Bremen", [("Mannheim", 512), ("Berlin", 390), ("Essen", 248)]),
            ("Mannheim", [("Berlin", 624), ("Essen", 310), ("Stuttgart", 140)]),
        ];
        let mut map = Self {
            roads: BTreeMap::new(),
        };
        for (from, roads) in ROADS {
            for (to, km) in roads {
                map.connect(from, to, km);
            }
        }
        map
    }
}

/// A trip in progress: where it is now and the cities passed on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip<'m> {
    map: &'m RoadMap,
    destination: &'static str,
    pub at: &'static str,
    pub route: Vec<&'static str>,
    pub km: u32,
}

impl<'m> Trip<'m> {
    pub fn new(map: &'m RoadMap, from: &'static str, to: &'static str) -> Self {
        Self {
            map,
            destination: to,
            at: from,
            route: Vec::new(),
            km: 0,
        }
    }

    /// All cities of the trip including the current one.
    pub fn stops(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.route.iter().copied().chain(std::iter::once(self.at))
    }
}

impl SearchNode for Trip<'_> {
    type Cost = u32;
    type Scratch = ();

    fn expand(&self, _: &mut (), out: &mut Vec<(u32, Self)>) {
        if self.is_goal() {
            return;
        }
        for &(to, km) in self.map.roads_from(self.at) {
            let mut next = self.clone();
            next.route.push(self.at);
            next.at = to;
            next.km += km;
            out.push((next.km, next));
        }
    }

    fn is_goal(&self) -> bool {
        self.at == self.destination
    }
}

/// Find the shortest trip from `from` to `to`.
///
/// On a map with cycles the destination must be reachable, otherwise nothing
/// bounds the search.
pub fn plan<'m>(
    map: &'m RoadMap,
    from: &'static str,
    to: &'static str,
) -> Result<Solution<Trip<'m>>, SearchError> {
    Dijkstra::new(Trip::new(map, from, to), SearchConfig::new(30))?.solve()
}
