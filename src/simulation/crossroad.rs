//! Crossroads: the graph nodes of the road network
//!
//! A crossroad holds no automaton state; it only carries a stable identity
//! and a display color.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::types::{NodeId, Rgb};

/// A crossroad (intersection) in the road network
#[derive(Debug, Clone)]
pub struct Crossroad {
    id: NodeId,
    color: Rgb,
}

impl Default for Crossroad {
    fn default() -> Self {
        Self::new()
    }
}

impl Crossroad {
    pub fn new() -> Self {
        Self::with_id(NodeId::fresh())
    }

    /// Create a crossroad with an externally supplied identity
    pub fn with_id(id: NodeId) -> Self {
        Self {
            id,
            color: Rgb::BLACK,
        }
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }
}

impl PartialEq for Crossroad {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Crossroad {}

impl Hash for Crossroad {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Crossroad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crossroad: {}", self.id)
    }
}
