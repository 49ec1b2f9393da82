//! Fewest-hops search.
//!
//! Breadth-first traversal from the start station. The first time the
//! target is dequeued its recorded path is returned; BFS level order
//! guarantees that path has the minimum hop count. Note the metric is hop
//! count, which only approximates "fewest transfers" in the colloquial
//! sense; a true fewest-line-changes search would need (station, line)
//! states and is a different algorithm.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::domain::{Route, StationId};
use crate::network::Network;

use super::route_from_ids;

pub(super) fn fewest_transfers(
    network: &Network,
    start: &StationId,
    target: &StationId,
) -> Option<Route> {
    if !network.contains(start) || !network.contains(target) {
        return None;
    }

    // Frontier of (station, path-so-far). Stations are marked visited at
    // enqueue time, not dequeue time, so a station reachable via several
    // same-level parents is enqueued only once.
    let mut frontier: VecDeque<(StationId, Vec<StationId>)> = VecDeque::new();
    frontier.push_back((start.clone(), vec![start.clone()]));
    let mut visited: HashSet<StationId> = HashSet::from([start.clone()]);

    let mut dequeued = 0usize;

    while let Some((current, path)) = frontier.pop_front() {
        dequeued += 1;

        if &current == target {
            debug!(
                start = %start,
                target = %target,
                hops = path.len() - 1,
                dequeued,
                "fewest-hops route found"
            );
            return route_from_ids(network, path);
        }

        let station = network.station(&current)?;
        trace!(station = %current, neighbors = station.neighbors().len(), "expanding");

        for (neighbor, _) in station.neighbors() {
            if visited.insert(neighbor.clone()) {
                let mut next = path.clone();
                next.push(neighbor.clone());
                frontier.push_back((neighbor.clone(), next));
            }
        }
    }

    debug!(start = %start, target = %target, dequeued, "no route");
    None
}
