//! Multi-lane roads
//!
//! A road is a weighted [`Edge`] whose weight is the number of cells per
//! lane, plus an `n_lanes x lane_capacity` cell grid driven by its car
//! list. Cars carry `Pos { lane, cell }` and never change lanes.

use std::fmt;
use std::hash::{Hash, Hasher};

use log::debug;

use super::car::Car;
use super::edge::Edge;
use super::error::{SimError, SimResult};
use super::grid::{CellGrid, StepOutcome};
use super::handoff::{DeadEnd, NextSegment};
use super::types::{Cell, CarId, EdgeId, NodeId, Pos, Rgb};

/// A road segment between two crossroads
#[derive(Debug, Clone)]
pub struct Road {
    edge: Edge,
    n_lanes: usize,
    cars: Vec<Car>,
    grid: CellGrid,
}

impl Road {
    /// A single-lane road `u -> v`
    pub fn new(u: i64, v: i64, lane_capacity: usize, cars: Vec<Car>) -> SimResult<Self> {
        Self::with_lanes(u, v, lane_capacity, 1, cars)
    }

    pub fn with_lanes(
        u: i64,
        v: i64,
        lane_capacity: usize,
        n_lanes: usize,
        cars: Vec<Car>,
    ) -> SimResult<Self> {
        Self::check_lane_capacity(lane_capacity)?;
        let edge = Edge::new(u, v)?.with_weight(lane_capacity);
        Self::from_edge(edge, n_lanes, cars)
    }

    /// Build a road on an existing edge; the edge weight is the lane capacity
    pub fn from_edge(edge: Edge, n_lanes: usize, cars: Vec<Car>) -> SimResult<Self> {
        Self::check_lane_capacity(edge.weight())?;
        Self::check_n_lanes(n_lanes)?;
        let mut cars = cars;
        let grid = CellGrid::rebuild(n_lanes, edge.weight(), &mut cars, "Road");
        Ok(Self {
            edge,
            n_lanes,
            cars,
            grid,
        })
    }

    /// A road between two crossroads already known by id
    pub fn connecting(
        u: NodeId,
        v: NodeId,
        lane_capacity: usize,
        n_lanes: usize,
        cars: Vec<Car>,
    ) -> SimResult<Self> {
        Self::check_lane_capacity(lane_capacity)?;
        let edge = Edge::connecting(u, v)?.with_weight(lane_capacity);
        Self::from_edge(edge, n_lanes, cars)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.edge.set_name(Some(name.into()));
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.edge.set_color(color);
        self
    }

    fn check_lane_capacity(cap: usize) -> SimResult<()> {
        if cap < 1 {
            return Err(SimError::value_expected(
                "Road",
                "lane_capacity > 0",
                format!("lane_capacity = {cap}"),
            ));
        }
        Ok(())
    }

    fn check_n_lanes(n: usize) -> SimResult<()> {
        if n < 1 {
            return Err(SimError::value_expected("Road", "lanes >= 1", format!("lanes = {n}")));
        }
        Ok(())
    }

    fn rebuild(&mut self) {
        self.grid = CellGrid::rebuild(self.n_lanes, self.lane_capacity(), &mut self.cars, "Road");
    }

    pub fn edge(&self) -> &Edge {
        &self.edge
    }

    pub fn id(&self) -> EdgeId {
        self.edge.id()
    }

    pub fn uv(&self) -> (NodeId, NodeId) {
        self.edge.uv()
    }

    pub fn set_uv(&mut self, u: i64, v: i64) -> SimResult<()> {
        self.edge.set_uv(u, v)
    }

    pub fn name(&self) -> Option<&str> {
        self.edge.name()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.edge.set_name(name);
    }

    pub fn color(&self) -> Rgb {
        self.edge.color()
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.edge.set_color(color);
    }

    pub fn weight(&self) -> usize {
        self.edge.weight()
    }

    pub fn lane_capacity(&self) -> usize {
        self.edge.weight()
    }

    /// Resize every lane, dropping cars that no longer fit
    pub fn set_lane_capacity(&mut self, cap: usize) -> SimResult<()> {
        Self::check_lane_capacity(cap)?;
        self.edge.set_weight(cap);
        self.rebuild();
        Ok(())
    }

    pub fn n_lanes(&self) -> usize {
        self.n_lanes
    }

    /// Change the lane count, dropping cars on removed lanes
    pub fn set_n_lanes(&mut self, n: usize) -> SimResult<()> {
        Self::check_n_lanes(n)?;
        self.n_lanes = n;
        self.rebuild();
        Ok(())
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// Replace the car list, dropping cars that do not fit
    pub fn set_cars(&mut self, cars: Vec<Car>) {
        self.cars = cars;
        self.rebuild();
    }

    pub fn car(&self, id: CarId) -> Option<&Car> {
        self.cars.iter().find(|c| c.id() == id)
    }

    pub fn cars_in_lane(&self, lane: usize) -> impl Iterator<Item = &Car> {
        self.cars.iter().filter(move |c| c.pos().lane == lane)
    }

    pub fn cells(&self) -> &CellGrid {
        &self.grid
    }

    pub fn lane_cells(&self, lane: usize) -> Option<&[Cell]> {
        (lane < self.n_lanes).then(|| self.grid.row(lane))
    }

    /// Fraction of cells currently holding a car
    pub fn occupancy(&self) -> f32 {
        self.grid.full_count() as f32 / (self.n_lanes * self.lane_capacity()) as f32
    }

    /// Place `car` on `cell` of lane `lane`
    ///
    /// Returns `Ok(false)` if that cell is already occupied. A position
    /// outside the road is an error.
    pub fn add_car(&mut self, mut car: Car, lane: usize, cell: usize) -> SimResult<bool> {
        let pos = Pos::new(lane, cell);
        if !self.grid.contains(pos) {
            return Err(SimError::value_expected(
                "Road",
                format!("pos within {}x{}", self.n_lanes, self.lane_capacity()),
                format!("pos = {pos}"),
            ));
        }
        if !self.grid.get(pos).is_empty() {
            debug!("Road {}: cell {pos} occupied, car {} rejected", self.id(), car.id());
            return Ok(false);
        }
        car.set_pos(pos);
        self.cars.push(car);
        self.grid.set(pos, Cell::Full);
        Ok(true)
    }

    /// Remove `car` (matched by identity) and return the road's copy of it
    pub fn rm_car(&mut self, car: &Car) -> Option<Car> {
        let idx = self.cars.iter().position(|c| c == car)?;
        let removed = self.cars.remove(idx);
        self.grid = CellGrid::from_cars(self.n_lanes, self.lane_capacity(), &self.cars);
        Some(removed)
    }

    /// Advance the road one tick; cars at the end of their lane stay put
    pub fn update(&mut self) -> StepOutcome {
        self.update_with(&mut DeadEnd)
    }

    /// Advance the road one tick, offering cars at lane ends to `next`
    pub fn update_with(&mut self, next: &mut impl NextSegment) -> StepOutcome {
        self.grid.step(&mut self.cars, next)
    }

    /// Compare lane capacities, not identities
    pub fn is_equal_to(&self, other: &Road) -> bool {
        self.edge.is_equal_to(&other.edge)
    }

    pub fn render(&self) -> String {
        self.grid.render()
    }
}

impl PartialEq for Road {
    fn eq(&self, other: &Self) -> bool {
        self.edge == other.edge
    }
}

impl Eq for Road {}

impl Hash for Road {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.edge.hash(state);
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Road:")?;
        self.edge.write_fields(f)?;
        writeln!(f)?;
        writeln!(f, " * n_lanes: {}", self.n_lanes)?;
        write!(f, " * len(cars): {}", self.cars.len())
    }
}
