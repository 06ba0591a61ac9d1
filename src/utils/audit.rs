// Consistency report over authored map data

use std::collections::HashMap;

use petgraph::algo::{connected_components, dijkstra};
use petgraph::graph::{DiGraph, NodeIndex};
use rayon::prelude::*;
use serde::Serialize;

use crate::models::{Building, Distance, LocationId};

/// Directed petgraph view of a building, edges weighted by Euclidean length.
/// Dangling references and self-loops are left out.
pub struct BuildingGraph<'a> {
    pub graph: DiGraph<&'a str, Distance>,
    index: HashMap<&'a str, NodeIndex>,
}

impl<'a> BuildingGraph<'a> {
    pub fn new(building: &'a Building) -> Self {
        let mut graph = DiGraph::with_capacity(building.len(), building.len() * 2);
        let mut index = HashMap::new();

        for location in building.locations() {
            index.insert(location.id.as_str(), graph.add_node(location.id.as_str()));
        }

        for location in building.locations() {
            for neighbour_id in &location.connections {
                if *neighbour_id == location.id {
                    continue;
                }
                if let Some(neighbour) = building.get(neighbour_id) {
                    graph.add_edge(
                        index[location.id.as_str()],
                        index[neighbour.id.as_str()],
                        location.distance_to(neighbour),
                    );
                }
            }
        }

        Self { graph, index }
    }

    pub fn node(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Shortest distances from `id` to every location it can reach, itself included
    pub fn distances_from(&self, id: &str) -> HashMap<&'a str, Distance> {
        let start = match self.node(id) {
            Some(start) => start,
            None => return HashMap::new(),
        };

        dijkstra(&self.graph, start, None, |e| *e.weight())
            .into_iter()
            .map(|(node, distance)| (self.graph[node], distance))
            .collect()
    }

    /// Number of parts the map falls into when direction is ignored
    pub fn component_count(&self) -> usize {
        connected_components(&self.graph)
    }

    fn is_isolated(&self, id: &str) -> bool {
        self.node(id)
            .map(|n| self.graph.neighbors_undirected(n).next().is_none())
            .unwrap_or(false)
    }
}

/// Findings about a map; none of them stop the engine from working
#[derive(Debug, Clone, Default, Serialize)]
pub struct MapAudit {
    /// (location, missing neighbour) pairs
    pub dangling: Vec<(LocationId, LocationId)>,
    /// (from, to) connections with no matching (to, from)
    pub one_way: Vec<(LocationId, LocationId)>,
    /// Locations with no usable connection in either direction
    pub isolated: Vec<LocationId>,
    /// Weakly connected components
    pub components: usize,
    /// Ordered (source, destination) pairs without any route
    pub unreachable: Vec<(LocationId, LocationId)>,
}

impl MapAudit {
    pub fn of(building: &Building) -> Self {
        let mut audit = MapAudit::default();

        for location in building.locations() {
            for neighbour_id in &location.connections {
                match building.get(neighbour_id) {
                    None => audit
                        .dangling
                        .push((location.id.clone(), neighbour_id.clone())),
                    Some(neighbour) if !neighbour.connects_to(&location.id) => audit
                        .one_way
                        .push((location.id.clone(), neighbour_id.clone())),
                    Some(_) => {}
                }
            }
        }

        let graph = BuildingGraph::new(building);
        audit.components = graph.component_count();
        audit.isolated = building
            .locations()
            .filter(|l| graph.is_isolated(&l.id))
            .map(|l| l.id.clone())
            .collect();

        // One full search per source, in parallel
        let ids: Vec<&str> = building.locations().map(|l| l.id.as_str()).collect();
        audit.unreachable = ids
            .par_iter()
            .flat_map_iter(|&source| {
                let reached = graph.distances_from(source);
                ids.iter()
                    .filter(|&&target| target != source && !reached.contains_key(target))
                    .map(|&target| (source.to_string(), target.to_string()))
                    .collect::<Vec<_>>()
            })
            .collect();

        audit
    }

    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty()
            && self.one_way.is_empty()
            && self.isolated.is_empty()
            && self.unreachable.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn create_building() -> Building {
        Building::from_locations(
            "Audit",
            vec![
                Location::new("a", "A", 0, 0.0, 0.0).with_connections(["b", "ghost"]),
                Location::new("b", "B", 0, 3.0, 4.0).with_connections(["a", "c"]),
                Location::new("c", "C", 0, 6.0, 8.0),
                Location::new("d", "D", 1, 0.0, 0.0).with_connections(["d"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_findings() {
        let audit = MapAudit::of(&create_building());

        assert_eq!(audit.dangling, vec![("a".to_string(), "ghost".to_string())]);
        assert_eq!(audit.one_way, vec![("b".to_string(), "c".to_string())]);
        assert_eq!(audit.isolated, vec!["d".to_string()]);
        assert_eq!(audit.components, 2);
        assert!(!audit.is_clean());

        // c reaches nothing, d reaches nothing and nothing reaches d
        assert!(audit.unreachable.contains(&("c".to_string(), "a".to_string())));
        assert!(audit.unreachable.contains(&("a".to_string(), "d".to_string())));
        assert!(!audit.unreachable.contains(&("a".to_string(), "c".to_string())));
        assert_eq!(audit.unreachable.len(), 8);
    }

    #[test]
    fn test_graph_distances() {
        let building = create_building();
        let graph = BuildingGraph::new(&building);

        let distances = graph.distances_from("a");
        assert_eq!(distances["a"], 0.0);
        assert_eq!(distances["b"], 5.0);
        assert_eq!(distances["c"], 10.0);
        assert!(!distances.contains_key("d"));
        assert!(graph.distances_from("ghost").is_empty());
    }

    #[test]
    fn test_symmetric_map_is_clean() {
        let building = Building::from_locations(
            "Clean",
            vec![
                Location::new("a", "A", 0, 0.0, 0.0).with_connections(["b"]),
                Location::new("b", "B", 0, 1.0, 0.0).with_connections(["a"]),
            ],
        )
        .unwrap();

        let audit = MapAudit::of(&building);
        assert!(audit.is_clean());
        assert_eq!(audit.components, 1);
    }
}
