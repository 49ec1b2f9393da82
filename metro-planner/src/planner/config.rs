//! Search configuration for the route planner.

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Fixed penalty in minutes added every time a route moves between
    /// stations with differing line tags.
    pub transfer_penalty_mins: u32,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(transfer_penalty_mins: u32) -> Self {
        Self {
            transfer_penalty_mins,
        }
    }

    /// Returns the transfer penalty in minutes.
    pub fn transfer_penalty(&self) -> u32 {
        self.transfer_penalty_mins
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            transfer_penalty_mins: 2,
        }
    }
}
