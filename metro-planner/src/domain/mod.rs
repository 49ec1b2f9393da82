//! Domain types for the metro route planner.
//!
//! These types represent the vocabulary shared between the network graph
//! and the route finders: station and line identifiers, and the routes the
//! finders return. Routes carry snapshots of the stations they pass through,
//! so consumers can format them without access to the graph.

mod identifiers;
mod route;

pub use identifiers::{LineId, StationId};
pub use route::{EmptyRoute, Route, RouteStop, TimedRoute};
