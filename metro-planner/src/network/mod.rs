//! The metro network graph.
//!
//! A [`Network`] owns every [`Station`] and the adjacency between them.
//! Stations reference their neighbors by id, never by pointer, so
//! interchange loops and other cycles are harmless and traversal never
//! recurses. The graph is built once by a loader and then treated as
//! read-only for the duration of all queries; no query mutates it.

mod sample;

use std::collections::HashMap;

use crate::domain::{LineId, StationId};

pub use sample::ankara_network;

/// Error from building the network graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A connection referenced a station id not present in the graph.
    #[error("unknown station: {0}")]
    UnknownStation(StationId),
}

/// A single line-specific stop in the network.
///
/// A physical hub served by several lines is modeled as several stations
/// sharing a name and coordinates but with distinct ids and line tags.
/// The line tag is immutable after creation.
#[derive(Debug, Clone)]
pub struct Station {
    id: StationId,
    name: String,
    line: LineId,
    x: f64,
    y: f64,
    /// Neighboring stations with traversal time in minutes, in the order
    /// the connections were added. Search tie-breaking depends on this
    /// order being stable.
    neighbors: Vec<(StationId, u32)>,
}

impl Station {
    fn new(id: StationId, name: String, line: LineId, x: f64, y: f64) -> Self {
        Self {
            id,
            name,
            line,
            x,
            y,
            neighbors: Vec::new(),
        }
    }

    /// The station's unique id.
    pub fn id(&self) -> &StationId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The line this station belongs to.
    pub fn line(&self) -> &LineId {
        &self.line
    }

    /// Planar coordinates, used only as a search heuristic.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Neighboring stations and edge weights, in insertion order.
    pub fn neighbors(&self) -> &[(StationId, u32)] {
        &self.neighbors
    }

    /// Straight-line distance to another station's coordinates.
    ///
    /// This is a heuristic quantity only; it is never used as travel cost.
    pub fn distance_to(&self, other: &Station) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// The complete metro network: stations, lines, and weighted adjacency.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: HashMap<StationId, Station>,
    /// Stations per line in insertion order. Used for reporting and
    /// construction only; the route finders never consult it.
    lines: HashMap<LineId, Vec<StationId>>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a station.
    ///
    /// Inserting an id that already exists is a silent no-op: the first
    /// insertion wins. This is documented behavior, not an error.
    pub fn add_station(
        &mut self,
        id: impl Into<StationId>,
        name: impl Into<String>,
        line: impl Into<LineId>,
        x: f64,
        y: f64,
    ) {
        let id = id.into();
        if self.stations.contains_key(&id) {
            return;
        }
        let line = line.into();
        self.lines.entry(line.clone()).or_default().push(id.clone());
        self.stations
            .insert(id.clone(), Station::new(id, name.into(), line, x, y));
    }

    /// Connect two stations with a bidirectional edge of weight `minutes`.
    ///
    /// Fails with [`NetworkError::UnknownStation`] if either id is absent.
    /// Self-loops and duplicate edges are permitted and not deduplicated;
    /// avoiding them is the caller's responsibility.
    pub fn add_connection(
        &mut self,
        a: impl Into<StationId>,
        b: impl Into<StationId>,
        minutes: u32,
    ) -> Result<(), NetworkError> {
        let a = a.into();
        let b = b.into();
        if !self.stations.contains_key(&a) {
            return Err(NetworkError::UnknownStation(a));
        }
        if !self.stations.contains_key(&b) {
            return Err(NetworkError::UnknownStation(b));
        }
        let Some(station_a) = self.stations.get_mut(&a) else {
            return Err(NetworkError::UnknownStation(a));
        };
        station_a.neighbors.push((b.clone(), minutes));
        let Some(station_b) = self.stations.get_mut(&b) else {
            return Err(NetworkError::UnknownStation(b));
        };
        station_b.neighbors.push((a, minutes));
        Ok(())
    }

    /// Look up a station by id.
    pub fn station(&self, id: &StationId) -> Option<&Station> {
        self.stations.get(id)
    }

    /// Whether the network contains a station with this id.
    pub fn contains(&self, id: &StationId) -> bool {
        self.stations.contains_key(id)
    }

    /// Number of stations in the network.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Straight-line distance between two stations' coordinates.
    ///
    /// Returns `None` if either id is unknown. Used only as a search
    /// heuristic, never as actual travel cost.
    pub fn euclidean_distance(&self, a: &StationId, b: &StationId) -> Option<f64> {
        Some(self.station(a)?.distance_to(self.station(b)?))
    }

    /// The stations of a line, in the order they were added.
    ///
    /// Returns an empty slice for an unknown line.
    pub fn line_stations(&self, line: &LineId) -> &[StationId] {
        self.lines.get(line).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over the lines of the network (in no particular order).
    pub fn lines(&self) -> impl Iterator<Item = &LineId> {
        self.lines.keys()
    }
}
