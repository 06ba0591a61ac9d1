// Public modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod presenter;
pub mod utils;

// Re-exports for convenience
pub use algorithms::{find_route, search_route, RouteFinder, SearchStrategy};
pub use config::NavigatorConfig;
pub use error::NavigatorError;
pub use models::{Building, Location, Route, RouteOutcome};
pub use presenter::RouteSummary;
