//! Core types for the traffic automaton
//!
//! Identity keys, colors, cell coordinates and cell states shared by the
//! lane, road and graph containers.

use std::fmt;
use uuid::Uuid;

use super::error::{non_negative, SimError, SimResult};

/// Identity of a crossroad (graph node)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u128);

impl NodeId {
    /// Draw a fresh random 128-bit node id
    pub fn fresh() -> Self {
        NodeId(Uuid::new_v4().as_u128())
    }

    /// Build a node id from a signed integer, rejecting negatives
    pub fn checked(src: &'static str, what: &str, value: i64) -> SimResult<Self> {
        non_negative(src, what, value).map(|v| NodeId(v as u128))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a directed edge (road)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub Uuid);

impl EdgeId {
    /// Draw a fresh random edge id
    pub fn fresh() -> Self {
        EdgeId(Uuid::new_v4())
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CarId(pub Uuid);

impl CarId {
    /// Draw a fresh random car id
    pub fn fresh() -> Self {
        CarId(Uuid::new_v4())
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An RGB color; every channel is in [0, 255] by construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from signed channels, rejecting any outside [0, 255]
    pub fn checked(r: i64, g: i64, b: i64) -> SimResult<Self> {
        Ok(Rgb::new(Self::channel(r)?, Self::channel(g)?, Self::channel(b)?))
    }

    fn channel(value: i64) -> SimResult<u8> {
        u8::try_from(value).map_err(|_| {
            SimError::value_expected("Rgb", "color value [0; 255]", format!("color value {value}"))
        })
    }
}

impl TryFrom<(i64, i64, i64)> for Rgb {
    type Error = SimError;

    fn try_from((r, g, b): (i64, i64, i64)) -> SimResult<Self> {
        Rgb::checked(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A car position: lane row and cell column
///
/// Single-lane containers only use `lane == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pos {
    pub lane: usize,
    pub cell: usize,
}

impl Pos {
    pub const fn new(lane: usize, cell: usize) -> Self {
        Self { lane, cell }
    }

    /// Position on a single-lane container
    pub const fn cell(cell: usize) -> Self {
        Self { lane: 0, cell }
    }

    /// The next cell along the same lane
    pub fn ahead(&self) -> Pos {
        Pos::new(self.lane, self.cell + 1)
    }
}

impl TryFrom<i64> for Pos {
    type Error = SimError;

    fn try_from(cell: i64) -> SimResult<Self> {
        Ok(Pos::cell(non_negative("Car", "pos", cell)?))
    }
}

impl TryFrom<(i64, i64)> for Pos {
    type Error = SimError;

    fn try_from((lane, cell): (i64, i64)) -> SimResult<Self> {
        if lane < 0 || cell < 0 {
            return Err(SimError::value_expected(
                "Car",
                "all pos values >= 0",
                format!("pos = ({lane}, {cell})"),
            ));
        }
        Ok(Pos::new(lane as usize, cell as usize))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lane, self.cell)
    }
}

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Full,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Full => '#',
        }
    }
}
