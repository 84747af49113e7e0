//! Directed, weighted edges between crossroads
//!
//! Equality and hashing go through [`EdgeId`] only; endpoints, weight,
//! name and color can all change without moving an edge between hash
//! buckets.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::{SimError, SimResult};
use super::types::{EdgeId, NodeId, Rgb};

/// A directed edge `u -> v`
#[derive(Debug, Clone)]
pub struct Edge {
    id: EdgeId,
    u: NodeId,
    v: NodeId,
    name: Option<String>,
    weight: usize,
    color: Rgb,
}

impl Edge {
    /// Create an edge from signed endpoints
    ///
    /// Fails if `u == v` or either endpoint is negative.
    pub fn new(u: i64, v: i64) -> SimResult<Self> {
        let (u, v) = Self::checked_uv(u, v)?;
        Self::connecting(u, v)
    }

    /// Create an edge between two existing node ids
    pub fn connecting(u: NodeId, v: NodeId) -> SimResult<Self> {
        Self::check_distinct(u, v)?;
        Ok(Self {
            id: EdgeId::fresh(),
            u,
            v,
            name: None,
            weight: 0,
            color: Rgb::BLACK,
        })
    }

    pub fn with_id(mut self, id: EdgeId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_weight(mut self, weight: usize) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    fn checked_uv(u: i64, v: i64) -> SimResult<(NodeId, NodeId)> {
        if u == v {
            return Err(SimError::value_expected("Edge", "u != v", format!("u({u}) == v({v})")));
        }
        Ok((NodeId::checked("Edge", "u", u)?, NodeId::checked("Edge", "v", v)?))
    }

    fn check_distinct(u: NodeId, v: NodeId) -> SimResult<()> {
        if u == v {
            return Err(SimError::value_expected("Edge", "u != v", format!("u({u}) == v({v})")));
        }
        Ok(())
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Endpoints as `(u, v)`
    pub fn uv(&self) -> (NodeId, NodeId) {
        (self.u, self.v)
    }

    pub fn set_uv(&mut self, u: i64, v: i64) -> SimResult<()> {
        let (u, v) = Self::checked_uv(u, v)?;
        self.u = u;
        self.v = v;
        Ok(())
    }

    pub fn set_endpoints(&mut self, u: NodeId, v: NodeId) -> SimResult<()> {
        Self::check_distinct(u, v)?;
        self.u = u;
        self.v = v;
        Ok(())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn weight(&self) -> usize {
        self.weight
    }

    pub fn set_weight(&mut self, weight: usize) {
        self.weight = weight;
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Compare weights, not identities
    pub fn is_equal_to(&self, other: &Edge) -> bool {
        self.weight == other.weight
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Edge:")?;
        self.write_fields(f)
    }
}

impl Edge {
    pub(crate) fn write_fields(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " * uv: ({}, {})", self.u, self.v)?;
        writeln!(f, " * name: {}", self.name.as_deref().unwrap_or("None"))?;
        writeln!(f, " * weight: {}", self.weight)?;
        writeln!(f, " * color (RGB): {}", self.color)?;
        write!(f, " * id: {}", self.id)
    }
}
