//! Cell grid shared by lanes and roads
//!
//! The grid is always a view derived from a car list. Setters rebuild it
//! wholesale through [`CellGrid::rebuild`]; only car insertion, removal
//! and the tick step patch individual cells.

use std::collections::HashSet;
use std::ops::AddAssign;

use log::{debug, trace};

use super::car::Car;
use super::handoff::NextSegment;
use super::types::{Cell, CarId, Pos};

/// Counts of what happened to each car during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Cars that advanced one cell
    pub moved: usize,
    /// Cars whose next cell was occupied
    pub blocked: usize,
    /// Cars sitting on the last cell that the next segment refused
    pub at_end: usize,
    /// Cars that left through the next segment
    pub handed_off: usize,
}

impl AddAssign for StepOutcome {
    fn add_assign(&mut self, rhs: Self) {
        self.moved += rhs.moved;
        self.blocked += rhs.blocked;
        self.at_end += rhs.at_end;
        self.handed_off += rhs.handed_off;
    }
}

/// A `lanes x capacity` array of cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    lanes: usize,
    capacity: usize,
    cells: Vec<Cell>,
}

impl CellGrid {
    pub fn empty(lanes: usize, capacity: usize) -> Self {
        Self {
            lanes,
            capacity,
            cells: vec![Cell::Empty; lanes * capacity],
        }
    }

    /// Occupancy derived from `cars`; cars outside the grid are ignored
    pub fn from_cars(lanes: usize, capacity: usize, cars: &[Car]) -> Self {
        let mut grid = Self::empty(lanes, capacity);
        for car in cars {
            if grid.contains(car.pos()) {
                grid.set(car.pos(), Cell::Full);
            }
        }
        grid
    }

    /// Drop cars that no longer fit or land on a cell an earlier car in the
    /// list already holds, and build the grid from the rest
    pub fn rebuild(lanes: usize, capacity: usize, cars: &mut Vec<Car>, src: &str) -> Self {
        let mut grid = Self::empty(lanes, capacity);
        let mut outside = 0;
        let mut doubled = 0;
        cars.retain(|car| {
            let pos = car.pos();
            if !grid.contains(pos) {
                outside += 1;
                return false;
            }
            if !grid.get(pos).is_empty() {
                doubled += 1;
                return false;
            }
            grid.set(pos, Cell::Full);
            true
        });
        if outside > 0 {
            debug!("{src}: dropped {outside} car(s) outside {lanes}x{capacity}");
        }
        if doubled > 0 {
            debug!("{src}: dropped {doubled} car(s) on already occupied cells");
        }
        grid
    }

    pub fn lanes(&self) -> usize {
        self.lanes
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.lane < self.lanes && pos.cell < self.capacity
    }

    fn index(&self, pos: Pos) -> usize {
        pos.lane * self.capacity + pos.cell
    }

    /// State of the cell at `pos`; out-of-range positions read as full
    pub fn get(&self, pos: Pos) -> Cell {
        if self.contains(pos) {
            self.cells[self.index(pos)]
        } else {
            Cell::Full
        }
    }

    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    pub fn row(&self, lane: usize) -> &[Cell] {
        let start = lane * self.capacity;
        &self.cells[start..start + self.capacity]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.capacity.max(1)).take(self.lanes)
    }

    pub fn full_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// One text row per lane, `#` for full cells and `.` for empty ones
    pub fn render(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Advance every car by at most one cell, in list order
    ///
    /// The grid is patched in place as each car moves, so a car later in
    /// the list sees the positions earlier cars already took this tick.
    pub(crate) fn step(&mut self, cars: &mut Vec<Car>, next: &mut impl NextSegment) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        let mut departed: HashSet<CarId> = HashSet::new();

        for car in cars.iter_mut() {
            let pos = car.pos();
            if pos.cell + 1 < self.capacity {
                let ahead = pos.ahead();
                if self.get(ahead).is_empty() {
                    self.set(pos, Cell::Empty);
                    car.advance();
                    self.set(ahead, Cell::Full);
                    outcome.moved += 1;
                } else {
                    outcome.blocked += 1;
                }
            } else if next.accept(car) {
                trace!("car {} handed off from {}", car.id(), pos);
                self.set(pos, Cell::Empty);
                departed.insert(car.id());
                outcome.handed_off += 1;
            } else {
                outcome.at_end += 1;
            }
        }

        if !departed.is_empty() {
            cars.retain(|car| !departed.contains(&car.id()));
        }

        outcome
    }
}
