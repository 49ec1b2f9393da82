//! Station and line identifier types.

use std::fmt;
use std::sync::Arc;

/// Unique key of a station in the network.
///
/// A physical interchange served by several lines appears as several
/// stations with distinct ids, one per line. Ids are free-form strings;
/// the wrapper is backed by `Arc<str>` so paths can clone it cheaply.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::StationId;
///
/// let id = StationId::new("K1");
/// assert_eq!(id.as_str(), "K1");
/// assert_eq!(id, StationId::new("K1"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationId(Arc<str>);

impl StationId {
    /// Create a station id from a string.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StationId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for StationId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tag identifying the line a station belongs to.
///
/// A station's line tag is fixed at creation; moving between stations with
/// differing tags is what the planner counts as a transfer.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LineId(Arc<str>);

impl LineId {
    /// Create a line id from a string.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LineId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for LineId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_id_as_str() {
        let id = StationId::new("M2");
        assert_eq!(id.as_str(), "M2");
    }

    #[test]
    fn station_id_equality() {
        let a = StationId::new("K1");
        let b = StationId::new("K1");
        let c = StationId::new("K2");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn station_id_hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StationId::new("T3"));
        assert!(set.contains(&StationId::new("T3")));
        assert!(!set.contains(&StationId::new("T4")));
    }

    #[test]
    fn station_id_display_and_debug() {
        let id = StationId::new("K1");
        assert_eq!(format!("{}", id), "K1");
        assert_eq!(format!("{:?}", id), "StationId(K1)");
    }

    #[test]
    fn line_id_display_and_debug() {
        let line = LineId::new("Red Line");
        assert_eq!(format!("{}", line), "Red Line");
        assert_eq!(format!("{:?}", line), "LineId(Red Line)");
    }

    #[test]
    fn from_str_matches_new() {
        assert_eq!(StationId::from("K1"), StationId::new("K1"));
        assert_eq!(LineId::from("Red Line"), LineId::new("Red Line"));
    }
}
