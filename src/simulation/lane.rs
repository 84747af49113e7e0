//! Single-lane cellular automaton
//!
//! A lane is a row of `capacity` cells. The car list is the source of
//! truth; [`Lane::cells`] is the occupancy derived from it.

use std::fmt;

use log::debug;

use super::car::Car;
use super::error::{SimError, SimResult};
use super::grid::{CellGrid, StepOutcome};
use super::handoff::{DeadEnd, NextSegment};
use super::types::{Cell, CarId, Pos};

/// A single road lane
#[derive(Debug, Clone)]
pub struct Lane {
    cars: Vec<Car>,
    grid: CellGrid,
}

impl Lane {
    /// Create a lane of `capacity` cells holding `cars`
    ///
    /// Cars that do not fit on the lane are dropped.
    pub fn new(capacity: usize, cars: Vec<Car>) -> SimResult<Self> {
        Self::check_capacity(capacity)?;
        let mut cars = cars;
        let grid = CellGrid::rebuild(1, capacity, &mut cars, "Lane");
        Ok(Self { cars, grid })
    }

    fn check_capacity(capacity: usize) -> SimResult<()> {
        if capacity == 0 {
            return Err(SimError::value_expected(
                "Lane",
                "capacity > 0",
                format!("capacity = {capacity}"),
            ));
        }
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.grid.capacity()
    }

    /// Resize the lane, dropping cars that no longer fit
    pub fn set_capacity(&mut self, capacity: usize) -> SimResult<()> {
        Self::check_capacity(capacity)?;
        self.grid = CellGrid::rebuild(1, capacity, &mut self.cars, "Lane");
        Ok(())
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// Replace the car list, dropping cars that do not fit
    pub fn set_cars(&mut self, cars: Vec<Car>) {
        self.cars = cars;
        self.grid = CellGrid::rebuild(1, self.capacity(), &mut self.cars, "Lane");
    }

    pub fn car(&self, id: CarId) -> Option<&Car> {
        self.cars.iter().find(|c| c.id() == id)
    }

    pub fn cells(&self) -> &[Cell] {
        self.grid.row(0)
    }

    /// Place `car` on cell `cell`
    ///
    /// Returns `Ok(false)` and leaves the lane untouched if the cell is
    /// already occupied. A cell beyond the end of the lane is an error.
    pub fn add_car(&mut self, mut car: Car, cell: usize) -> SimResult<bool> {
        let pos = Pos::cell(cell);
        if !self.grid.contains(pos) {
            return Err(SimError::value_expected(
                "Lane",
                format!("pos < {}", self.capacity()),
                format!("pos = {cell}"),
            ));
        }
        if !self.grid.get(pos).is_empty() {
            debug!("Lane: cell {cell} occupied, car {} rejected", car.id());
            return Ok(false);
        }
        car.set_pos(pos);
        self.cars.push(car);
        self.grid.set(pos, Cell::Full);
        Ok(true)
    }

    /// Remove `car` (matched by identity) and return the lane's copy of it
    pub fn rm_car(&mut self, car: &Car) -> Option<Car> {
        let idx = self.cars.iter().position(|c| c == car)?;
        let removed = self.cars.remove(idx);
        self.grid = CellGrid::from_cars(1, self.capacity(), &self.cars);
        Some(removed)
    }

    /// Advance the lane one tick; cars at the last cell stay put
    pub fn update(&mut self) -> StepOutcome {
        self.update_with(&mut DeadEnd)
    }

    /// Advance the lane one tick, offering cars at the last cell to `next`
    pub fn update_with(&mut self, next: &mut impl NextSegment) -> StepOutcome {
        self.grid.step(&mut self.cars, next)
    }

    pub fn render(&self) -> String {
        self.grid.render()
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lane:")?;
        writeln!(f, " * capacity: {}", self.capacity())?;
        write!(f, " * cells: {}", self.render())
    }
}
