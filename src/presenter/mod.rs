// Presenter module - floor-scoped views and statistics derived from a route

mod floor_view;
mod summary;

pub use self::floor_view::{
    classify, floor_connections, floor_nodes, floor_segments, FloorBounds, NodeRole, Segment,
    Selection,
};
pub use self::summary::{
    display_distance, floors_touched, is_multi_floor, raw_distance, stops, transition_count,
    RouteSummary, Stop,
};
