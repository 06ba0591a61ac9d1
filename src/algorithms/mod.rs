pub mod dijkstra;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NavigatorError;
use crate::models::{Building, Route, RouteOutcome};

pub use self::dijkstra::{IndexedDijkstra, LinearScanDijkstra};

/// Trait for shortest route solvers over a building map
pub trait RouteFinder {
    /// Searches for the least-cost route from `source` to `destination`
    fn search(&self, building: &Building, source: &str, destination: &str) -> RouteOutcome;

    /// Same search collapsed to a route, empty when none was found
    fn find_route(&self, building: &Building, source: &str, destination: &str) -> Route {
        self.search(building, source, destination).into_route()
    }
}

/// Frontier implementation of the Dijkstra search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Scans every unsettled location per step, O(n²)
    LinearScan,
    /// Indexed min-priority queue with decrease-key, O((n + e) log n)
    #[default]
    IndexedHeap,
}

impl SearchStrategy {
    pub fn search(self, building: &Building, source: &str, destination: &str) -> RouteOutcome {
        match self {
            SearchStrategy::LinearScan => LinearScanDijkstra.search(building, source, destination),
            SearchStrategy::IndexedHeap => IndexedDijkstra.search(building, source, destination),
        }
    }

    pub fn find_route(self, building: &Building, source: &str, destination: &str) -> Route {
        self.search(building, source, destination).into_route()
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::LinearScan => write!(f, "linear-scan"),
            SearchStrategy::IndexedHeap => write!(f, "indexed-heap"),
        }
    }
}

impl FromStr for SearchStrategy {
    type Err = NavigatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear-scan" | "linear" => Ok(SearchStrategy::LinearScan),
            "indexed-heap" | "heap" => Ok(SearchStrategy::IndexedHeap),
            other => Err(NavigatorError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Least-cost route between two locations with the default strategy.
///
/// Returns an empty route when either identifier is unknown, when both are the same
/// location, or when the destination cannot be reached.
pub fn find_route(building: &Building, source: &str, destination: &str) -> Route {
    SearchStrategy::default().find_route(building, source, destination)
}

/// Like [`find_route`] but tells apart the reasons for an empty result
pub fn search_route(building: &Building, source: &str, destination: &str) -> RouteOutcome {
    SearchStrategy::default().search(building, source, destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_round_trip_through_display() {
        for strategy in [SearchStrategy::LinearScan, SearchStrategy::IndexedHeap] {
            assert_eq!(strategy.to_string().parse::<SearchStrategy>().unwrap(), strategy);
        }
        assert!("astar".parse::<SearchStrategy>().is_err());
    }
}
