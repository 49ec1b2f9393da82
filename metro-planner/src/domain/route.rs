//! Route types returned by the planner.

use super::{LineId, StationId};

/// Error returned when constructing a route with no stops.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("route must have at least one stop")]
pub struct EmptyRoute;

/// Snapshot of one station on a returned route.
///
/// Carries everything a consumer needs to render the stop, so routes stay
/// usable without access to the network graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStop {
    /// The station's unique id.
    pub station: StationId,

    /// Display name of the station.
    pub name: String,

    /// Line the station belongs to.
    pub line: LineId,
}

impl RouteStop {
    /// Create a route stop.
    pub fn new(station: StationId, name: impl Into<String>, line: LineId) -> Self {
        Self {
            station,
            name: name.into(),
            line,
        }
    }
}

/// An ordered, non-empty sequence of stops from start to target inclusive.
///
/// A route of a single stop means start and target were the same station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stops: Vec<RouteStop>,
}

impl Route {
    /// Create a route from its stops.
    ///
    /// Fails if `stops` is empty: every route includes at least its start.
    pub fn new(stops: Vec<RouteStop>) -> Result<Self, EmptyRoute> {
        if stops.is_empty() {
            return Err(EmptyRoute);
        }
        Ok(Self { stops })
    }

    /// The stops in travel order, start and target inclusive.
    pub fn stops(&self) -> &[RouteStop] {
        &self.stops
    }

    /// The first stop (the start station).
    pub fn start(&self) -> &RouteStop {
        &self.stops[0]
    }

    /// The last stop (the target station).
    pub fn end(&self) -> &RouteStop {
        &self.stops[self.stops.len() - 1]
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.stops.len() - 1
    }

    /// Number of line changes: consecutive stops with differing line tags.
    pub fn change_count(&self) -> usize {
        self.stops
            .windows(2)
            .filter(|pair| pair[0].line != pair[1].line)
            .count()
    }
}

/// A route together with its total travel time.
///
/// The total includes the transfer penalty for every line change along the
/// route, so it is not simply the sum of the traversed edge weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedRoute {
    /// The route taken.
    pub route: Route,

    /// Total travel time in minutes, transfer penalties included.
    pub total_minutes: u32,
}
