// Building model: the immutable map of every location

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::error::NavigatorError;
use crate::models::{Floor, Location, Route};

/// Display label for a floor index
pub fn floor_name(floor: Floor) -> String {
    if floor == 0 {
        "Ground Floor".to_string()
    } else {
        format!("Floor {}", floor)
    }
}

/// Locations of one floor, ordered for selection lists
#[derive(Debug, Clone, Serialize)]
pub struct FloorGroup<'a> {
    pub floor: Floor,
    pub label: String,
    pub rooms: Vec<&'a Location>,
}

/// Read-only map of the building, keyed by location identifier.
///
/// Locations live in an ordered map so that every enumeration, and with it the
/// tie-breaking of the route search, is stable between runs.
#[derive(Debug, Clone, Default)]
pub struct Building {
    name: String,
    locations: BTreeMap<String, Location>,
}

impl Building {
    /// Builds a map from a list of locations, rejecting duplicate identifiers
    pub fn from_locations<S, I>(name: S, locations: I) -> Result<Self, NavigatorError>
    where
        S: Into<String>,
        I: IntoIterator<Item = Location>,
    {
        let mut map = BTreeMap::new();
        for location in locations {
            match map.entry(location.id.clone()) {
                Entry::Occupied(entry) => {
                    return Err(NavigatorError::DuplicateLocation(entry.key().clone()))
                }
                Entry::Vacant(entry) => {
                    entry.insert(location);
                }
            }
        }

        Ok(Self {
            name: name.into(),
            locations: map,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a location by identifier
    pub fn get(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.locations.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// All locations in identifier order
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Locations on a single floor, in identifier order
    pub fn locations_on_floor(&self, floor: Floor) -> impl Iterator<Item = &Location> {
        self.locations.values().filter(move |l| l.floor == floor)
    }

    /// Locations of a route in order; identifiers missing from the map are dropped
    pub fn resolve<'a>(&'a self, route: &'a Route) -> Vec<&'a Location> {
        route.stops.iter().filter_map(|id| self.get(id)).collect()
    }

    /// Distinct floor indices in ascending order
    pub fn floors(&self) -> Vec<Floor> {
        self.locations
            .values()
            .map(|l| l.floor)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Groups all locations by floor, each group sorted by display name
    pub fn rooms_by_floor(&self) -> Vec<FloorGroup<'_>> {
        let mut groups: BTreeMap<Floor, Vec<&Location>> = BTreeMap::new();
        for location in self.locations.values() {
            groups.entry(location.floor).or_default().push(location);
        }

        groups
            .into_iter()
            .map(|(floor, mut rooms)| {
                rooms.sort_by(|a, b| {
                    a.name
                        .to_lowercase()
                        .cmp(&b.name.to_lowercase())
                        .then_with(|| a.id.cmp(&b.id))
                });
                FloorGroup {
                    floor,
                    label: floor_name(floor),
                    rooms,
                }
            })
            .collect()
    }
}
