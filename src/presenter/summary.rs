// Stop list and aggregate statistics of a route

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::models::{floor_name, Building, Distance, Floor, LocationId, Route};

/// One stop of a route as shown in the directions list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stop {
    /// 1-based position in the route
    pub index: usize,
    pub id: LocationId,
    pub name: String,
    pub floor: Floor,
    pub floor_name: String,
    pub is_first: bool,
    pub is_last: bool,
    /// Name of the floor the next stop is on, when it differs from this one
    pub transition_to: Option<String>,
}

impl Stop {
    /// Direction line for a floor change, e.g. "Take stairs to Floor 1"
    pub fn transition_label(&self) -> Option<String> {
        self.transition_to
            .as_ref()
            .map(|floor| format!("Take stairs to {}", floor))
    }
}

/// Expands a route into per-stop records.
///
/// Identifiers missing from the map are skipped; numbering, endpoints and floor
/// changes follow the remaining stops.
pub fn stops(building: &Building, route: &Route) -> Vec<Stop> {
    let resolved = building.resolve(route);
    let last = resolved.len().saturating_sub(1);

    resolved
        .iter()
        .enumerate()
        .map(|(idx, location)| {
            let transition_to = resolved
                .get(idx + 1)
                .filter(|next| next.floor != location.floor)
                .map(|next| floor_name(next.floor));

            Stop {
                index: idx + 1,
                id: location.id.clone(),
                name: location.name.clone(),
                floor: location.floor,
                floor_name: floor_name(location.floor),
                is_first: idx == 0,
                is_last: idx == last,
                transition_to,
            }
        })
        .collect()
}

/// Sum of Euclidean leg lengths in map units
pub fn raw_distance(building: &Building, route: &Route) -> Distance {
    building
        .resolve(route)
        .windows(2)
        .map(|pair| pair[0].distance_to(pair[1]))
        .fold(0.0, |total, leg| total + leg)
}

/// Converts map units to display metres, rounded to one decimal
pub fn display_distance(raw: Distance, scale: f64) -> f64 {
    (raw / scale * 10.0).round() / 10.0
}

/// Distinct floors visited by the route
pub fn floors_touched(building: &Building, route: &Route) -> BTreeSet<Floor> {
    building.resolve(route).iter().map(|l| l.floor).collect()
}

/// Number of legs whose ends are on different floors
pub fn transition_count(building: &Building, route: &Route) -> usize {
    building
        .resolve(route)
        .windows(2)
        .filter(|pair| pair[0].floor != pair[1].floor)
        .count()
}

pub fn is_multi_floor(building: &Building, route: &Route) -> bool {
    floors_touched(building, route).len() > 1
}

/// Headline figures of a route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub stop_count: usize,
    pub distance_m: f64,
    pub transitions: usize,
    pub multi_floor: bool,
}

impl RouteSummary {
    pub fn new(building: &Building, route: &Route, distance_scale: f64) -> Self {
        Self {
            stop_count: building.resolve(route).len(),
            distance_m: display_distance(raw_distance(building, route), distance_scale),
            transitions: transition_count(building, route),
            multi_floor: is_multi_floor(building, route),
        }
    }
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} stops • {:.1}m estimated distance",
            self.stop_count, self.distance_m
        )?;
        if self.multi_floor {
            write!(f, " • Multiple floors")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use approx::assert_relative_eq;

    fn create_building() -> Building {
        Building::from_locations(
            "Summary",
            vec![
                Location::new("A", "Lobby", 0, 0.0, 0.0).with_connections(["B"]),
                Location::new("B", "Stairs", 0, 30.0, 0.0).with_connections(["A", "C"]),
                Location::new("C", "Landing", 1, 30.0, 40.0).with_connections(["B", "D"]),
                Location::new("D", "Library", 1, 30.0, 45.0).with_connections(["C"]),
            ],
        )
        .unwrap()
    }

    fn route(ids: &[&str]) -> Route {
        Route::new(ids.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_stop_records() {
        let building = create_building();
        let list = stops(&building, &route(&["A", "B", "C", "D"]));

        assert_eq!(list.len(), 4);
        assert_eq!(list[0].index, 1);
        assert!(list[0].is_first && !list[0].is_last);
        assert_eq!(list[0].floor_name, "Ground Floor");
        assert_eq!(list[0].transition_to, None);

        assert_eq!(list[1].transition_to.as_deref(), Some("Floor 1"));
        assert_eq!(
            list[1].transition_label().as_deref(),
            Some("Take stairs to Floor 1")
        );

        assert!(list[3].is_last);
        assert_eq!(list[3].name, "Library");
        assert_eq!(list[3].transition_to, None);
    }

    #[test]
    fn test_distance_and_rounding() {
        let building = create_building();
        let r = route(&["A", "B", "C", "D"]);

        assert_relative_eq!(raw_distance(&building, &r), 75.0);
        assert_eq!(display_distance(75.0, 10.0), 7.5);
        assert_eq!(display_distance(1460.350082642674, 10.0), 146.0);
        assert_eq!(display_distance(1033.8861166614236, 10.0), 103.4);
        assert_eq!(raw_distance(&building, &Route::empty()), 0.0);
    }

    #[test]
    fn test_distance_grows_with_prefix() {
        let building = create_building();
        let full = ["A", "B", "C", "D"];
        let mut previous = 0.0;
        for len in 1..=full.len() {
            let d = raw_distance(&building, &route(&full[..len]));
            assert!(d >= previous);
            previous = d;
        }
    }

    #[test]
    fn test_multi_floor_matches_transitions() {
        let building = create_building();

        let single = route(&["A", "B"]);
        assert!(!is_multi_floor(&building, &single));
        assert_eq!(transition_count(&building, &single), 0);

        let multi = route(&["A", "B", "C"]);
        assert!(is_multi_floor(&building, &multi));
        assert_eq!(transition_count(&building, &multi), 1);
        assert!(stops(&building, &multi)
            .iter()
            .any(|s| s.transition_to.is_some()));
        assert_eq!(
            floors_touched(&building, &multi).into_iter().collect::<Vec<_>>(),
            vec![0, 1]
        );
    }

    #[test]
    fn test_unknown_stop_between_floors() {
        let building = create_building();
        let r = route(&["B", "ghost", "C"]);

        assert!(is_multi_floor(&building, &r));
        assert_eq!(transition_count(&building, &r), 1);

        let list = stops(&building, &r);
        assert_eq!(list.iter().map(|s| s.index).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(list[0].transition_to.as_deref(), Some("Floor 1"));
        assert!(list[1].is_last);
        assert_eq!(list[1].id, "C");

        assert_relative_eq!(raw_distance(&building, &r), 40.0);
        assert_eq!(RouteSummary::new(&building, &r, 10.0).stop_count, 2);
    }

    #[test]
    fn test_empty_route_summary() {
        let building = create_building();

        assert!(raw_distance(&building, &Route::empty()).is_sign_positive());
        assert!(raw_distance(&building, &route(&["A"])).is_sign_positive());
        assert_eq!(
            RouteSummary::new(&building, &Route::empty(), 10.0).to_string(),
            "0 stops • 0.0m estimated distance"
        );
    }

    #[test]
    fn test_summary_line() {
        let building = create_building();

        let summary = RouteSummary::new(&building, &route(&["A", "B", "C", "D"]), 10.0);
        assert_eq!(summary.stop_count, 4);
        assert_eq!(summary.transitions, 1);
        assert_eq!(
            summary.to_string(),
            "4 stops • 7.5m estimated distance • Multiple floors"
        );

        let summary = RouteSummary::new(&building, &route(&["A", "B"]), 10.0);
        assert_eq!(summary.to_string(), "2 stops • 3.0m estimated distance");
    }
}
