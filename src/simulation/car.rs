//! Vehicles in the traffic automaton
//!
//! A car is identified by its [`CarId`] alone. Moving a car never changes
//! how it compares or hashes, so a car can still be found and removed from
//! a list after an update pass has shifted it.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::SimResult;
use super::types::{CarId, Pos};

/// A car occupying one cell of a lane or road
#[derive(Debug, Clone)]
pub struct Car {
    id: CarId,
    pos: Pos,
    name: Option<String>,
}

impl Default for Car {
    fn default() -> Self {
        Self::new(Pos::default())
    }
}

impl Car {
    pub fn new(pos: Pos) -> Self {
        Self {
            id: CarId::fresh(),
            pos,
            name: None,
        }
    }

    /// A car on cell `cell` of a single-lane container
    pub fn at_cell(cell: usize) -> Self {
        Self::new(Pos::cell(cell))
    }

    /// A car on `cell` of lane `lane`
    pub fn at(lane: usize, cell: usize) -> Self {
        Self::new(Pos::new(lane, cell))
    }

    /// Build a car from signed coordinates, rejecting negative components
    pub fn try_at(lane: i64, cell: i64) -> SimResult<Self> {
        Ok(Self::new(Pos::try_from((lane, cell))?))
    }

    pub fn with_id(mut self, id: CarId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Another handle on the same physical vehicle: same id, same position
    pub fn copy(&self) -> Car {
        self.clone()
    }

    pub fn id(&self) -> CarId {
        self.id
    }

    pub fn set_id(&mut self, id: CarId) {
        self.id = id;
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn set_pos(&mut self, pos: Pos) {
        self.pos = pos;
    }

    /// Set the position from signed coordinates
    ///
    /// Fails with `ValueExpected` if any component is negative; the car is
    /// left where it was.
    pub fn try_set_pos(&mut self, lane: i64, cell: i64) -> SimResult<()> {
        self.pos = Pos::try_from((lane, cell))?;
        Ok(())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub(crate) fn advance(&mut self) {
        self.pos = self.pos.ahead();
    }
}

impl PartialEq for Car {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Car {}

impl Hash for Car {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Car {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Car {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Car:")?;
        writeln!(f, " * uuid: {}", self.id)?;
        writeln!(f, " * name: {}", self.name.as_deref().unwrap_or("None"))?;
        write!(f, " * pos: {}", self.pos)
    }
}
