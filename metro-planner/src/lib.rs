//! Metro network route planner.
//!
//! Models a multi-line metro network as a graph and answers two routing
//! questions: "which route has the fewest stops?" and "which route is
//! fastest, counting a fixed penalty for every line change?"

pub mod domain;
pub mod network;
pub mod planner;
pub mod render;
