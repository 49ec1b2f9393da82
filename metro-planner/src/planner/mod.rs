//! Route finders over the metro network.
//!
//! Two independent algorithms answer the two routing questions:
//!
//! - [`Planner::fewest_transfers`]: breadth-first search minimizing hop
//!   count.
//! - [`Planner::fastest_route`]: heuristic-guided weighted search
//!   minimizing travel minutes, transfer penalties included.
//!
//! Both searches are self-contained traversals over the read-only graph;
//! nothing is shared or mutated between calls.

mod astar;
mod bfs;
mod config;


pub use config::SearchConfig;

use crate::domain::{Route, RouteStop, StationId, TimedRoute};
use crate::network::Network;

/// Route planner over a read-only network graph.
pub struct Planner<'a> {
    network: &'a Network,
    config: SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a planner with the default [`SearchConfig`].
    pub fn new(network: &'a Network) -> Self {
        Self::with_config(network, SearchConfig::default())
    }

    /// Create a planner with an explicit configuration.
    pub fn with_config(network: &'a Network, config: SearchConfig) -> Self {
        Self { network, config }
    }

    /// Find a route from `start` to `target` with the fewest hops.
    ///
    /// Returns `None` if either id is unknown or no path exists; both are
    /// normal outcomes, not errors. When several minimum-hop routes exist,
    /// the one discovered first under connection insertion order is
    /// returned, deterministically.
    pub fn fewest_transfers(&self, start: &StationId, target: &StationId) -> Option<Route> {
        bfs::fewest_transfers(self.network, start, target)
    }

    /// Find the route from `start` to `target` minimizing total minutes.
    ///
    /// Total minutes is the sum of edge weights plus the configured
    /// transfer penalty for every line change along the route. Returns
    /// `None` under the same conditions as [`Planner::fewest_transfers`].
    ///
    /// Guidance toward the target uses straight-line coordinate distance,
    /// which has no declared unit correspondence to travel minutes; on
    /// adversarial coordinate layouts the returned route may not be the
    /// true optimum. With all stations at the same coordinates the search
    /// degenerates to plain weighted shortest-path and is exact.
    pub fn fastest_route(&self, start: &StationId, target: &StationId) -> Option<TimedRoute> {
        astar::fastest_route(self.network, &self.config, start, target)
    }
}

/// Turn a sequence of station ids into a [`Route`] of stop snapshots.
///
/// Returns `None` if any id is missing from the graph, which would mean a
/// broken adjacency invariant rather than a user error.
fn route_from_ids(network: &Network, ids: Vec<StationId>) -> Option<Route> {
    let stops = ids
        .into_iter()
        .map(|id| {
            let station = network.station(&id)?;
            Some(RouteStop::new(
                id,
                station.name().to_string(),
                station.line().clone(),
            ))
        })
        .collect::<Option<Vec<_>>>()?;
    Route::new(stops).ok()
}
