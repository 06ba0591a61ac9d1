// Location model representing a named point of the building graph

use geo::{EuclideanDistance, Point};
use serde::{Deserialize, Serialize};

use crate::models::{Distance, Floor, LocationId};

/// A room, corridor junction or staircase landing that a route can pass through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique key of the location
    pub id: LocationId,

    /// Human readable name shown in listings and on the floor plan
    pub name: String,

    /// Floor index, 0 is the ground floor
    pub floor: Floor,

    /// Planar coordinates, arbitrary unit
    pub x: f64,
    pub y: f64,

    /// Identifiers of directly reachable locations
    #[serde(default)]
    pub connections: Vec<LocationId>,
}

impl Location {
    /// Creates a new location without connections
    pub fn new<S: Into<String>, N: Into<String>>(
        id: S,
        name: N,
        floor: Floor,
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            floor,
            x,
            y,
            connections: Vec::new(),
        }
    }

    /// Builder-style helper that appends neighbour identifiers
    pub fn with_connections<I, S>(mut self, connections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.connections.extend(connections.into_iter().map(Into::into));
        self
    }

    /// The coordinates as a geo point
    pub fn point(&self) -> Point<f64> {
        Point::new(self.x, self.y)
    }

    /// Calculates the Euclidean distance between two locations
    pub fn distance_to(&self, other: &Location) -> Distance {
        self.point().euclidean_distance(&other.point())
    }

    /// Whether this location lists `id` as a neighbour
    pub fn connects_to(&self, id: &str) -> bool {
        self.connections.iter().any(|c| c == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let loc1 = Location::new("a", "A", 0, 0.0, 0.0);
        let loc2 = Location::new("b", "B", 0, 3.0, 4.0);

        assert_eq!(loc1.distance_to(&loc2), 5.0);
        assert_eq!(loc2.distance_to(&loc1), 5.0);
    }

    #[test]
    fn test_distance_ignores_floor() {
        let loc1 = Location::new("a", "A", 0, 10.0, 10.0);
        let loc2 = Location::new("b", "B", 3, 10.0, 10.0);

        assert_eq!(loc1.distance_to(&loc2), 0.0);
    }

    #[test]
    fn test_deserialize_authoring_format() {
        let json = r#"{"id":"lab-01","name":"lab 01","floor":0,"x":200,"y":810,"connections":["lab-02"]}"#;
        let location: Location = serde_json::from_str(json).unwrap();

        assert_eq!(location.id, "lab-01");
        assert_eq!(location.floor, 0);
        assert_eq!(location.x, 200.0);
        assert!(location.connects_to("lab-02"));
        assert!(!location.connects_to("lab-03"));
    }

    #[test]
    fn test_missing_connections_default_to_empty() {
        let json = r#"{"id":"exit","name":"exit","floor":0,"x":1.5,"y":2.5}"#;
        let location: Location = serde_json::from_str(json).unwrap();

        assert!(location.connections.is_empty());
    }
}
