use anyhow::Result;
use clap::Parser;
use log::info;
use traffic_automaton::simulation;

#[derive(Parser)]
#[command(name = "traffic_automaton")]
#[command(about = "Cellular automaton road traffic simulation")]
struct Cli {
    /// Number of simulation ticks to run
    #[arg(long, default_value = "20")]
    ticks: u32,

    /// Crossroads on the test ring
    #[arg(long, default_value = "4")]
    crossroads: usize,

    /// Cells per lane
    #[arg(long, default_value = "20")]
    lane_capacity: usize,

    /// Lanes per road
    #[arg(long, default_value = "2")]
    lanes: usize,

    /// Cars placed on every road at start
    #[arg(long, default_value = "8")]
    cars_per_road: usize,

    /// Seed for reproducible car placement
    #[arg(long)]
    seed: Option<u64>,

    /// Print the road map every N ticks (0 disables)
    #[arg(long, default_value = "5")]
    render_every: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,traffic_automaton=info"),
    )
    .init();

    let cli = Cli::parse();
    let config = simulation::WorldConfig {
        crossroads: cli.crossroads,
        lane_capacity: cli.lane_capacity,
        lanes: cli.lanes,
        cars_per_road: cli.cars_per_road,
        seed: cli.seed,
    };

    run_headless(&config, cli.ticks, cli.render_every)
}

/// Run the simulation in the terminal
fn run_headless(config: &simulation::WorldConfig, ticks: u32, render_every: u32) -> Result<()> {
    info!("Running traffic automaton for {} ticks", ticks);

    let mut world = simulation::TrafficWorld::build_test_world(config)?;
    let cars_at_start = world.network.car_count();

    println!("Initial state:");
    world.print_summary();
    world.draw();

    for tick in 1..=ticks {
        let outcome = world.tick();
        if render_every > 0 && tick % render_every == 0 {
            println!("--- After tick {} ---", tick);
            world.print_summary();
            world.draw();
        }
        if outcome.moved == 0 {
            info!("Traffic settled after {} ticks", tick);
            break;
        }
    }

    println!("=== Final State ===");
    world.print_summary();
    world.draw();

    let stats = world.stats;
    info!("=== SIMULATION COMPLETE ===");
    info!("Total ticks: {}", stats.ticks);
    info!("Total crossroads: {}", world.network.crossroad_count());
    info!("Total roads: {}", world.network.road_count());
    info!("Cars at start: {}", cars_at_start);
    info!("Cars at end: {}", world.network.car_count());
    info!("Total moves: {}", stats.total.moved);
    info!("Total blocked: {}", stats.total.blocked);

    Ok(())
}
