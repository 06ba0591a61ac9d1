use std::collections::HashSet;

use geo::{BoundingRect, MultiPoint, Point};
use serde::Serialize;

use crate::models::{Building, Floor, Location, Route};

/// One drawable line between two points of the same floor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    fn between(from: &Location, to: &Location) -> Self {
        Self {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
        }
    }
}

/// Styling class of a node on the floor plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeRole {
    Source,
    Destination,
    OnRoute,
    Default,
}

/// The locations picked by the user, possibly before any search ran
#[derive(Debug, Clone, Copy, Default)]
pub struct Selection<'a> {
    pub source: Option<&'a str>,
    pub destination: Option<&'a str>,
}

impl<'a> Selection<'a> {
    pub fn new(source: &'a str, destination: &'a str) -> Self {
        Self {
            source: Some(source),
            destination: Some(destination),
        }
    }
}

/// Locations drawn on `floor`
pub fn floor_nodes(building: &Building, floor: Floor) -> Vec<&Location> {
    building.locations_on_floor(floor).collect()
}

/// Static background lines of a floor.
///
/// Every declared connection whose ends both sit on `floor` is emitted once, whichever
/// side declared it. Dangling references are skipped.
pub fn floor_connections(building: &Building, floor: Floor) -> Vec<Segment> {
    let mut processed: HashSet<(&str, &str)> = HashSet::new();
    let mut segments = Vec::new();

    for room in building.locations_on_floor(floor) {
        for neighbour_id in &room.connections {
            let neighbour = match building.get(neighbour_id) {
                Some(n) if n.floor == floor && n.id != room.id => n,
                _ => continue,
            };

            let key = if room.id <= neighbour.id {
                (room.id.as_str(), neighbour.id.as_str())
            } else {
                (neighbour.id.as_str(), room.id.as_str())
            };
            if processed.insert(key) {
                segments.push(Segment::between(room, neighbour));
            }
        }
    }

    segments
}

/// Route legs lying entirely on `floor`; floor transitions are never drawn
pub fn floor_segments(building: &Building, route: &Route, floor: Floor) -> Vec<Segment> {
    building
        .resolve(route)
        .windows(2)
        .filter(|pair| pair[0].floor == floor && pair[1].floor == floor)
        .map(|pair| Segment::between(pair[0], pair[1]))
        .collect()
}

/// Styling class of `id`: the selected endpoints win over route membership
pub fn classify(id: &str, route: &Route, selection: Selection<'_>) -> NodeRole {
    if selection.source == Some(id) {
        NodeRole::Source
    } else if selection.destination == Some(id) {
        NodeRole::Destination
    } else if route.contains(id) {
        NodeRole::OnRoute
    } else {
        NodeRole::Default
    }
}

/// Drawing viewport of one floor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FloorBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for FloorBounds {
    fn default() -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            width: 800.0,
            height: 500.0,
        }
    }
}

impl FloorBounds {
    /// Bounding box of the floor's nodes grown by `padding` on every side
    pub fn of_floor(building: &Building, floor: Floor, padding: f64) -> Self {
        let points: MultiPoint<f64> = building
            .locations_on_floor(floor)
            .map(Location::point)
            .collect::<Vec<Point<f64>>>()
            .into();

        match points.bounding_rect() {
            Some(rect) => Self {
                min_x: rect.min().x - padding,
                min_y: rect.min().y - padding,
                width: rect.width() + 2.0 * padding,
                height: rect.height() + 2.0 * padding,
            },
            None => Self::default(),
        }
    }

    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.min_y + self.height
    }
}
