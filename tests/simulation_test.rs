use std::process::Command;

fn run_headless(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_traffic_automaton"))
        .args(args)
        .env("RUST_LOG", "warn,traffic_automaton=info")
        .output()
        .expect("Failed to execute simulation")
}

/// Test that the simulation runs in headless mode without crashing
#[test]
fn test_headless_simulation_runs() {
    let output = run_headless(&["--ticks", "10", "--seed", "7"]);

    assert!(
        output.status.success(),
        "Simulation failed to run. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SIMULATION COMPLETE"),
        "Simulation did not complete properly. stderr: {}",
        stderr
    );
}

/// Test that simulation statistics are logged and cars are conserved
#[test]
fn test_simulation_statistics_logged() {
    let output = run_headless(&["--ticks", "5", "--seed", "7", "--crossroads", "3"]);
    assert!(output.status.success(), "Simulation failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Total roads: 3"), "Missing road count");
    assert!(stderr.contains("Total crossroads: 3"), "Missing crossroad count");

    let count_after = |label: &str| -> u32 {
        let line = stderr
            .lines()
            .find(|line| line.contains(label))
            .unwrap_or_else(|| panic!("Could not find '{}' line", label));
        line.split(label)
            .nth(1)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(|| panic!("Could not parse '{}'", line))
    };

    let start = count_after("Cars at start:");
    assert_eq!(start, 24);
    assert_eq!(count_after("Cars at end:"), start);
    assert!(count_after("Total moves:") > 0);
}

/// Test that the road map is printed
#[test]
fn test_road_map_printed() {
    let output = run_headless(&["--ticks", "1", "--seed", "1", "--render-every", "1"]);
    assert!(output.status.success(), "Simulation failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== Road Map ==="));
    assert!(stdout.contains("Ring 0:"));
}
