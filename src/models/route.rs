// Route models for representing computed walks through the building

use serde::Serialize;

use crate::models::LocationId;

/// Ordered identifiers from source to destination inclusive.
///
/// An empty route means "no route"; it is also what a fresh `Route::default()` holds,
/// so callers that care whether a search ran must track that themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Route {
    pub stops: Vec<LocationId>,
}

impl Route {
    /// Creates a new route from an ordered list of identifiers
    pub fn new(stops: Vec<LocationId>) -> Self {
        Self { stops }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of stops, endpoints included
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn source(&self) -> Option<&str> {
        self.stops.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.stops.last().map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.stops.iter().any(|s| s == id)
    }

    /// Consecutive (from, to) identifier pairs
    pub fn legs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.stops
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

/// Result of a route search, keeping apart the cases an empty route conflates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RouteOutcome {
    Found(Route),
    SameLocation,
    UnknownSource,
    UnknownDestination,
    Unreachable,
}

impl RouteOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }

    /// Collapses the outcome into the plain route contract: anything but `Found` is empty
    pub fn into_route(self) -> Route {
        match self {
            RouteOutcome::Found(route) => route,
            _ => Route::empty(),
        }
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            RouteOutcome::Found(route) => Some(route),
            _ => None,
        }
    }
}
