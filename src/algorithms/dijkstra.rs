use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeSet, HashMap};

use priority_queue::PriorityQueue;

use crate::algorithms::RouteFinder;
use crate::models::{Building, Distance, Location, Route, RouteOutcome};

// Custom wrapper to make f64 implement Ord
#[derive(PartialEq, Copy, Clone, Debug)]
struct F64Wrapper(f64);

impl Eq for F64Wrapper {}

impl PartialOrd for F64Wrapper {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for F64Wrapper {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

/// Dijkstra with the reference frontier: every step scans all unsettled locations.
///
/// Fine for maps of a few hundred locations; ties go to the smallest identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScanDijkstra;

/// Dijkstra over an indexed min-priority queue.
///
/// The queue starts out holding every location at infinity, exactly like the unsettled
/// set of the scanning variant, and relaxation lowers priorities in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexedDijkstra;

/// Tentative distances and predecessor pointers of one search
struct SearchState<'a> {
    distances: HashMap<&'a str, Distance>,
    predecessors: HashMap<&'a str, &'a str>,
    settled: usize,
}

impl<'a> SearchState<'a> {
    fn new(source: &'a str) -> Self {
        let mut distances = HashMap::new();
        distances.insert(source, 0.0);

        Self {
            distances,
            predecessors: HashMap::new(),
            settled: 0,
        }
    }

    fn distance(&self, id: &str) -> Distance {
        self.distances.get(id).copied().unwrap_or(f64::INFINITY)
    }

    /// Relaxes the connections of a freshly settled location.
    ///
    /// Only neighbours for which `is_unsettled` holds are considered; identifiers missing
    /// from the map are skipped. Returns the neighbours whose distance improved.
    fn relax<F>(
        &mut self,
        building: &'a Building,
        current: &'a Location,
        is_unsettled: F,
    ) -> Vec<(&'a str, Distance)>
    where
        F: Fn(&str) -> bool,
    {
        self.settled += 1;
        let base = self.distance(&current.id);
        let mut improved = Vec::new();

        for neighbour_id in &current.connections {
            if !is_unsettled(neighbour_id.as_str()) {
                continue;
            }

            if let Some(neighbour) = building.get(neighbour_id) {
                let candidate = base + current.distance_to(neighbour);
                if candidate < self.distance(&neighbour.id) {
                    self.distances.insert(neighbour.id.as_str(), candidate);
                    self.predecessors.insert(neighbour.id.as_str(), current.id.as_str());
                    improved.push((neighbour.id.as_str(), candidate));
                }
            }
        }

        improved
    }

    /// Walks predecessor pointers back from the destination
    fn into_outcome(self, source: &str, destination: &'a str) -> RouteOutcome {
        if self.distance(destination).is_infinite() {
            return RouteOutcome::Unreachable;
        }

        let mut stops = vec![destination.to_string()];
        let mut current = destination;
        while let Some(&previous) = self.predecessors.get(current) {
            stops.push(previous.to_string());
            current = previous;
        }
        stops.reverse();

        // A one-stop walk carries no navigation
        if stops.len() < 2 || stops[0] != source {
            return RouteOutcome::Unreachable;
        }

        RouteOutcome::Found(Route::new(stops))
    }
}

/// Resolves both endpoints or explains why no search is needed
fn resolve_endpoints<'a>(
    building: &'a Building,
    source: &str,
    destination: &str,
) -> Result<(&'a Location, &'a Location), RouteOutcome> {
    let source = building.get(source).ok_or(RouteOutcome::UnknownSource)?;
    let destination = building
        .get(destination)
        .ok_or(RouteOutcome::UnknownDestination)?;

    if source.id == destination.id {
        return Err(RouteOutcome::SameLocation);
    }

    Ok((source, destination))
}

fn log_outcome(
    kind: &str,
    source: &str,
    destination: &str,
    settled: usize,
    outcome: &RouteOutcome,
) {
    match outcome {
        RouteOutcome::Found(route) => log::debug!(
            "{} search {} -> {}: settled {} locations, {} stops",
            kind,
            source,
            destination,
            settled,
            route.len()
        ),
        other => log::debug!(
            "{} search {} -> {}: settled {} locations, {:?}",
            kind,
            source,
            destination,
            settled,
            other
        ),
    }
}

impl RouteFinder for LinearScanDijkstra {
    fn search(&self, building: &Building, source: &str, destination: &str) -> RouteOutcome {
        let (source, destination) = match resolve_endpoints(building, source, destination) {
            Ok(endpoints) => endpoints,
            Err(outcome) => return outcome,
        };

        let mut state = SearchState::new(source.id.as_str());
        let mut unsettled: BTreeSet<&str> =
            building.locations().map(|l| l.id.as_str()).collect();

        loop {
            // Find unsettled location with minimum distance
            let mut current = None;
            let mut min_distance = f64::INFINITY;
            for &id in &unsettled {
                let distance = state.distance(id);
                if distance < min_distance {
                    min_distance = distance;
                    current = Some(id);
                }
            }

            let current_id = match current {
                Some(id) if id != destination.id => id,
                _ => break,
            };
            unsettled.remove(current_id);

            if let Some(current) = building.get(current_id) {
                state.relax(building, current, |id| unsettled.contains(id));
            }
        }

        let settled = state.settled;
        let outcome = state.into_outcome(&source.id, &destination.id);
        log_outcome("Linear-scan", &source.id, &destination.id, settled, &outcome);
        outcome
    }
}

impl RouteFinder for IndexedDijkstra {
    fn search(&self, building: &Building, source: &str, destination: &str) -> RouteOutcome {
        let (source, destination) = match resolve_endpoints(building, source, destination) {
            Ok(endpoints) => endpoints,
            Err(outcome) => return outcome,
        };

        let mut state = SearchState::new(source.id.as_str());
        let mut frontier: PriorityQueue<&str, Reverse<F64Wrapper>> =
            PriorityQueue::with_capacity(building.len());
        for location in building.locations() {
            frontier.push(location.id.as_str(), Reverse(F64Wrapper(f64::INFINITY)));
        }
        frontier.change_priority(source.id.as_str(), Reverse(F64Wrapper(0.0)));

        while let Some((current_id, Reverse(F64Wrapper(distance)))) = frontier.pop() {
            if distance.is_infinite() || current_id == destination.id {
                break;
            }

            if let Some(current) = building.get(current_id) {
                let improved = state.relax(building, current, |id| frontier.get(id).is_some());
                for (id, distance) in improved {
                    frontier.change_priority(id, Reverse(F64Wrapper(distance)));
                }
            }
        }

        let settled = state.settled;
        let outcome = state.into_outcome(&source.id, &destination.id);
        log_outcome("Indexed", &source.id, &destination.id, settled, &outcome);
        outcome
    }
}
