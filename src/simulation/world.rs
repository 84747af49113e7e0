//! Simulation world that ties everything together
//!
//! Drives the road network one tick at a time and provides the console
//! summary and map used by the headless binary.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::car::Car;
use super::crossroad::Crossroad;
use super::grid::StepOutcome;
use super::road::Road;
use super::road_network::RoadNet;
use super::types::{EdgeId, NodeId, Rgb};

/// Parameters for building a test world
#[derive(Debug, Clone)]
pub struct WorldConfig {
    /// Crossroads on the ring
    pub crossroads: usize,
    /// Cells per lane on every road
    pub lane_capacity: usize,
    /// Lanes on every road
    pub lanes: usize,
    /// Cars placed on each road at start
    pub cars_per_road: usize,
    /// Seed for reproducible car placement
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            crossroads: 4,
            lane_capacity: 20,
            lanes: 2,
            cars_per_road: 8,
            seed: None,
        }
    }
}

/// Per-world running totals
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldStats {
    pub ticks: u64,
    pub total: StepOutcome,
    pub last: StepOutcome,
}

/// The main simulation world
pub struct TrafficWorld {
    /// Roads and crossroads
    pub network: RoadNet,

    /// Running totals across ticks
    pub stats: WorldStats,

    rng: StdRng,
}

impl Default for TrafficWorld {
    fn default() -> Self {
        Self::new(None)
    }
}

impl TrafficWorld {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            network: RoadNet::new(),
            stats: WorldStats::default(),
            rng,
        }
    }

    /// Build a ring of crossroads joined by one-way roads and scatter cars
    /// over every road
    pub fn build_test_world(config: &WorldConfig) -> Result<Self> {
        if config.crossroads < 2 {
            anyhow::bail!("A ring needs at least 2 crossroads, got {}", config.crossroads);
        }

        let mut world = Self::new(config.seed);

        let mut ring: Vec<NodeId> = Vec::with_capacity(config.crossroads);
        for _ in 0..config.crossroads {
            ring.push(world.network.add_crossroad(Crossroad::new())?);
        }

        for (i, &from) in ring.iter().enumerate() {
            let to = ring[(i + 1) % ring.len()];
            let road = Road::connecting(from, to, config.lane_capacity, config.lanes, Vec::new())
                .context("Failed to build ring road")?
                .with_name(format!("Ring {i}"))
                .with_color(Rgb::new(64, 64, 64));
            let road_id = world.network.add_road(road)?;
            world.populate_road(road_id, config.cars_per_road)?;
        }

        info!(
            "Built test world: {} crossroads, {} roads, {} cars",
            world.network.crossroad_count(),
            world.network.road_count(),
            world.network.car_count()
        );

        Ok(world)
    }

    /// Place up to `count` cars on random free cells of a road
    fn populate_road(&mut self, road_id: EdgeId, count: usize) -> Result<usize> {
        let road = self
            .network
            .get_road_mut(road_id)
            .context("Road not found")?;

        let cells = road.n_lanes() * road.lane_capacity();
        let wanted = count.min(cells);
        if wanted < count {
            warn!("Road {road_id} has only {cells} cells, placing {wanted} of {count} cars");
        }

        let mut placed = 0;
        let mut attempts = 0;
        while placed < wanted && attempts < cells * 4 {
            attempts += 1;
            let lane = self.rng.random_range(0..road.n_lanes());
            let cell = self.rng.random_range(0..road.lane_capacity());
            if road.add_car(Car::default(), lane, cell)? {
                placed += 1;
            }
        }

        // Fall back to a linear scan so the requested count is always met
        'scan: for lane in 0..road.n_lanes() {
            for cell in 0..road.lane_capacity() {
                if placed >= wanted {
                    break 'scan;
                }
                if road.add_car(Car::default(), lane, cell)? {
                    placed += 1;
                }
            }
        }

        debug!("Road {road_id}: placed {placed} cars in {attempts} random attempts");
        Ok(placed)
    }

    /// Advance the whole network by one tick
    pub fn tick(&mut self) -> StepOutcome {
        let outcome = self.network.update_all();
        self.stats.ticks += 1;
        self.stats.total += outcome;
        self.stats.last = outcome;
        debug!("tick {}: {:?}", self.stats.ticks, outcome);
        outcome
    }

    /// Print a summary of the world state
    pub fn print_summary(&self) {
        println!("=== Traffic Automaton Summary ===");
        println!("Ticks: {}", self.stats.ticks);
        println!(
            "Crossroads: {}, Roads: {}",
            self.network.crossroad_count(),
            self.network.road_count()
        );
        println!("Cars: {}", self.network.car_count());
        println!(
            "Last tick: moved={}, blocked={}, at_end={}",
            self.stats.last.moved, self.stats.last.blocked, self.stats.last.at_end
        );

        println!("--- Roads ---");
        for road in self.network.roads() {
            let (u, v) = road.uv();
            println!(
                "  {} ({u} -> {v}): lanes={}, capacity={}, cars={}, occupancy={:.0}%",
                road.name().unwrap_or("unnamed"),
                road.n_lanes(),
                road.lane_capacity(),
                road.cars().len(),
                road.occupancy() * 100.0
            );
        }
    }

    /// Draw every road's cells in the terminal
    pub fn draw(&self) {
        println!("\n=== Road Map ===");
        println!("Legend: #=Car, .=Empty cell");
        for road in self.network.roads() {
            println!();
            println!("{}:", road.name().unwrap_or("unnamed"));
            println!("{}", road.render());
        }
        println!();
    }
}
