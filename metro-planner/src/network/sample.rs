//! Sample Ankara metro network.
//!
//! A small three-line network used by the demonstration driver and by
//! tests that want a realistic fixture. Interchange hubs (Kızılay,
//! Demetevler, Gar) are modeled as one station per line, connected by a
//! short interchange edge.

use super::{Network, NetworkError};

/// Build the sample Ankara network.
///
/// Three lines with four stations each, plus interchange edges at the
/// three hubs. Coordinates are schematic, used only by the fastest-route
/// heuristic.
pub fn ankara_network() -> Result<Network, NetworkError> {
    let mut network = Network::new();

    // Red Line
    network.add_station("K1", "Kızılay", "Red Line", 50.0, 50.0);
    network.add_station("K2", "Ulus", "Red Line", 40.0, 60.0);
    network.add_station("K3", "Demetevler", "Red Line", 30.0, 70.0);
    network.add_station("K4", "OSB", "Red Line", 20.0, 80.0);

    // Blue Line
    network.add_station("M1", "AŞTİ", "Blue Line", 60.0, 40.0);
    network.add_station("M2", "Kızılay", "Blue Line", 50.0, 50.0); // interchange
    network.add_station("M3", "Sıhhiye", "Blue Line", 60.0, 60.0);
    network.add_station("M4", "Gar", "Blue Line", 70.0, 70.0);

    // Orange Line
    network.add_station("T1", "Batıkent", "Orange Line", 10.0, 60.0);
    network.add_station("T2", "Demetevler", "Orange Line", 30.0, 70.0); // interchange
    network.add_station("T3", "Gar", "Orange Line", 70.0, 70.0); // interchange
    network.add_station("T4", "Keçiören", "Orange Line", 80.0, 80.0);

    // Red Line edges
    network.add_connection("K1", "K2", 4)?;
    network.add_connection("K2", "K3", 6)?;
    network.add_connection("K3", "K4", 8)?;

    // Blue Line edges
    network.add_connection("M1", "M2", 5)?;
    network.add_connection("M2", "M3", 3)?;
    network.add_connection("M3", "M4", 4)?;

    // Orange Line edges
    network.add_connection("T1", "T2", 7)?;
    network.add_connection("T2", "T3", 9)?;
    network.add_connection("T3", "T4", 5)?;

    // Interchange edges (same hub, different lines)
    network.add_connection("K1", "M2", 2)?; // Kızılay
    network.add_connection("K3", "T2", 3)?; // Demetevler
    network.add_connection("M4", "T3", 2)?; // Gar

    Ok(network)
}
