// Models module - exports all model types

mod building;
mod location;
mod route;

// Re-export model types
pub use self::building::{floor_name, Building, FloorGroup};
pub use self::location::Location;
pub use self::route::{Route, RouteOutcome};

// Common type aliases for improved code readability
pub type LocationId = String;
pub type Floor = u32;
pub type Distance = f64;
