//! Fastest-route search.
//!
//! Heuristic-guided priority search over the weighted graph. The cost of
//! a candidate path is the sum of its edge weights plus the transfer
//! penalty for every line change; guidance toward the target adds the
//! straight-line coordinate distance from the frontier station. Stations
//! are closed at first pop; later, costlier entries for the same station
//! are popped and discarded.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use tracing::{debug, trace};

use crate::domain::{StationId, TimedRoute};
use crate::network::Network;

use super::config::SearchConfig;
use super::route_from_ids;

/// A candidate path in the priority queue.
///
/// `seq` is a per-push counter making the ordering total without ever
/// comparing paths or stations. Ties on priority pop in push order, which
/// keeps the search reproducible across runs and platforms.
struct Candidate {
    /// Accumulated minutes plus heuristic distance to the target.
    priority: f64,
    seq: u64,
    station: StationId,
    path: Vec<StationId>,
    /// Accumulated real cost: edge weights plus transfer penalties.
    minutes: u32,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub(super) fn fastest_route(
    network: &Network,
    config: &SearchConfig,
    start: &StationId,
    target: &StationId,
) -> Option<TimedRoute> {
    let start_station = network.station(start)?;
    let target_station = network.station(target)?;

    let mut open: BinaryHeap<Candidate> = BinaryHeap::new();
    let mut seq = 0u64;
    open.push(Candidate {
        priority: start_station.distance_to(target_station),
        seq,
        station: start.clone(),
        path: vec![start.clone()],
        minutes: 0,
    });
    let mut visited: HashSet<StationId> = HashSet::new();

    let mut popped = 0usize;

    while let Some(candidate) = open.pop() {
        popped += 1;

        if &candidate.station == target {
            debug!(
                start = %start,
                target = %target,
                minutes = candidate.minutes,
                hops = candidate.path.len() - 1,
                popped,
                "fastest route found"
            );
            let route = route_from_ids(network, candidate.path)?;
            return Some(TimedRoute {
                route,
                total_minutes: candidate.minutes,
            });
        }

        // A station can be pushed several times before its first pop;
        // stale entries are discarded here.
        if !visited.insert(candidate.station.clone()) {
            continue;
        }

        let station = network.station(&candidate.station)?;
        trace!(station = %candidate.station, minutes = candidate.minutes, "closing");

        for (neighbor_id, edge_minutes) in station.neighbors() {
            if visited.contains(neighbor_id) {
                continue;
            }
            let neighbor = network.station(neighbor_id)?;

            let mut minutes = candidate.minutes + edge_minutes;
            if station.line() != neighbor.line() {
                minutes += config.transfer_penalty();
            }
            let priority = f64::from(minutes) + neighbor.distance_to(target_station);

            let mut path = candidate.path.clone();
            path.push(neighbor_id.clone());
            seq += 1;
            open.push(Candidate {
                priority,
                seq,
                station: neighbor_id.clone(),
                path,
                minutes,
            });
        }
    }

    debug!(start = %start, target = %target, popped, "no route");
    None
}
