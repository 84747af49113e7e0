//! Traffic Automaton Library
//!
//! Road traffic modelled as a discrete-time cellular automaton laid over a
//! directed graph of crossroads and multi-lane roads.

pub mod simulation;
