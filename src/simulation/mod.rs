//! Standalone traffic automaton module
//!
//! Cars, lanes, roads and the graph that holds them. Everything here is
//! single-threaded: a driver calls `update` once per tick on one lane or
//! road at a time.

mod car;
mod crossroad;
mod edge;
mod error;
mod grid;
mod handoff;
mod lane;
mod road;
mod road_network;
mod types;
mod world;

pub use car::Car;
pub use crossroad::Crossroad;
pub use edge::Edge;
pub use error::{SimError, SimResult};
pub use grid::{CellGrid, StepOutcome};
pub use handoff::{DeadEnd, NextSegment};
pub use lane::Lane;
pub use road::Road;
pub use road_network::RoadNet;
pub use types::{CarId, Cell, EdgeId, NodeId, Pos, Rgb};
pub use world::{TrafficWorld, WorldConfig, WorldStats};
