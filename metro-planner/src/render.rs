//! Display formatting for routes.
//!
//! Formats a route as an arrow-joined list of stop names, annotating a
//! stop with its line whenever the line differs from the previous stop's
//! line, i.e. at every transfer.

use std::fmt::Write;

use crate::domain::{Route, TimedRoute};

/// Render a route as `Start -> Next -> Changed (Line) -> ...`.
pub fn describe_route(route: &Route) -> String {
    let mut out = String::new();
    let mut previous_line = None;

    for stop in route.stops() {
        if !out.is_empty() {
            out.push_str(" -> ");
        }
        if previous_line.is_some_and(|line| line != &stop.line) {
            let _ = write!(out, "{} ({})", stop.name, stop.line);
        } else {
            out.push_str(&stop.name);
        }
        previous_line = Some(&stop.line);
    }

    out
}

/// Render a timed route with its total minutes appended.
pub fn describe_timed_route(timed: &TimedRoute) -> String {
    format!(
        "{} ({} minutes)",
        describe_route(&timed.route),
        timed.total_minutes
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineId, RouteStop, StationId};

    fn stop(id: &str, name: &str, line: &str) -> RouteStop {
        RouteStop::new(StationId::new(id), name, LineId::new(line))
    }

    #[test]
    fn single_stop_has_no_arrows_or_annotation() {
        let route = Route::new(vec![stop("K1", "Kızılay", "Red Line")]).unwrap();
        assert_eq!(describe_route(&route), "Kızılay");
    }

    #[test]
    fn annotates_only_at_line_changes() {
        let route = Route::new(vec![
            stop("M1", "AŞTİ", "Blue Line"),
            stop("M2", "Kızılay", "Blue Line"),
            stop("K1", "Kızılay", "Red Line"),
            stop("K2", "Ulus", "Red Line"),
        ])
        .unwrap();
        assert_eq!(
            describe_route(&route),
            "AŞTİ -> Kızılay -> Kızılay (Red Line) -> Ulus"
        );
    }

    #[test]
    fn timed_route_appends_total() {
        let route = Route::new(vec![
            stop("T1", "Batıkent", "Orange Line"),
            stop("T2", "Demetevler", "Orange Line"),
        ])
        .unwrap();
        let timed = TimedRoute {
            route,
            total_minutes: 7,
        };
        assert_eq!(
            describe_timed_route(&timed),
            "Batıkent -> Demetevler (7 minutes)"
        );
    }
}
