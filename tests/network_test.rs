//! Road network and world driver validation

use traffic_automaton::simulation::{
    Car, Crossroad, NodeId, Road, RoadNet, TrafficWorld, WorldConfig,
};

fn two_crossroads() -> (RoadNet, NodeId, NodeId) {
    let a = Crossroad::new();
    let b = Crossroad::new();
    let (a_id, b_id) = (a.id(), b.id());
    let net = RoadNet::from_crossroads([a, b]).expect("distinct crossroads");
    (net, a_id, b_id)
}

#[test]
fn test_network_rejects_duplicate_crossroad() {
    let mut net = RoadNet::new();
    net.add_crossroad(Crossroad::with_id(NodeId(7))).unwrap();
    assert!(net.add_crossroad(Crossroad::with_id(NodeId(7))).is_err());
    assert_eq!(net.crossroad_count(), 1);
}

#[test]
fn test_network_road_needs_known_endpoints() {
    let (mut net, a, _) = two_crossroads();
    let stray = Road::connecting(a, NodeId::fresh(), 5, 1, Vec::new()).unwrap();
    assert!(net.add_road(stray).is_err());
    assert_eq!(net.road_count(), 0);
}

#[test]
fn test_network_structural_queries() {
    let (mut net, a, b) = two_crossroads();
    let forward = net
        .add_road(Road::connecting(a, b, 5, 1, Vec::new()).unwrap())
        .unwrap();
    let back = net
        .add_road(Road::connecting(b, a, 5, 2, Vec::new()).unwrap())
        .unwrap();

    assert_eq!(net.road_between(a, b).unwrap(), forward);
    assert_eq!(net.road_between(b, a).unwrap(), back);
    assert_eq!(net.outgoing(a).unwrap(), vec![(forward, b)]);
    assert!(net.outgoing(NodeId::fresh()).is_none());

    let removed = net.remove_road(forward).unwrap();
    assert_eq!(removed.id(), forward);
    assert!(net.road_between(a, b).is_err());
    assert_eq!(net.road_count(), 1);
    assert!(net.get_road(back).is_some());
}

#[test]
fn test_network_update_all_advances_every_road() {
    let (mut net, a, b) = two_crossroads();
    let first = net
        .add_road(Road::connecting(a, b, 3, 1, vec![Car::at(0, 0)]).unwrap())
        .unwrap();
    let second = net
        .add_road(Road::connecting(b, a, 3, 1, vec![Car::at(0, 2)]).unwrap())
        .unwrap();

    let outcome = net.update_all();
    assert_eq!(outcome.moved, 1);
    assert_eq!(outcome.at_end, 1);
    assert_eq!(net.get_road(first).unwrap().render(), ".#.");
    assert_eq!(net.get_road(second).unwrap().render(), "..#");
}

#[test]
fn test_world_build_populates_roads() {
    let config = WorldConfig {
        crossroads: 3,
        lane_capacity: 6,
        lanes: 2,
        cars_per_road: 5,
        seed: Some(11),
    };
    let world = TrafficWorld::build_test_world(&config).unwrap();
    assert_eq!(world.network.crossroad_count(), 3);
    assert_eq!(world.network.road_count(), 3);
    assert_eq!(world.network.car_count(), 15);

    for road in world.network.roads() {
        assert_eq!(road.cells().full_count(), road.cars().len());
    }
}

#[test]
fn test_world_caps_cars_at_road_size() {
    let config = WorldConfig {
        crossroads: 2,
        lane_capacity: 2,
        lanes: 1,
        cars_per_road: 10,
        seed: Some(1),
    };
    let world = TrafficWorld::build_test_world(&config).unwrap();
    assert_eq!(world.network.car_count(), 4);
}

#[test]
fn test_world_rejects_tiny_ring() {
    let config = WorldConfig {
        crossroads: 1,
        ..WorldConfig::default()
    };
    assert!(TrafficWorld::build_test_world(&config).is_err());
}

#[test]
fn test_world_ticks_conserve_cars_and_settle() {
    let config = WorldConfig {
        seed: Some(3),
        ..WorldConfig::default()
    };
    let mut world = TrafficWorld::build_test_world(&config).unwrap();
    let cars = world.network.car_count();

    let mut settled = false;
    for _ in 0..config.lane_capacity * 4 {
        if world.tick().moved == 0 {
            settled = true;
            break;
        }
    }

    assert!(settled, "every car should pile up at its lane end");
    assert_eq!(world.network.car_count(), cars);
    for road in world.network.roads() {
        assert_eq!(road.cells().full_count(), road.cars().len());
        for lane in 0..road.n_lanes() {
            let on_lane = road.cars_in_lane(lane).count();
            let row = road.lane_cells(lane).unwrap();
            assert!(row[row.len() - on_lane..].iter().all(|c| !c.is_empty()));
        }
    }
}

#[test]
fn test_world_seed_is_reproducible() {
    let config = WorldConfig {
        seed: Some(42),
        ..WorldConfig::default()
    };
    let mut first = TrafficWorld::build_test_world(&config).unwrap();
    let mut second = TrafficWorld::build_test_world(&config).unwrap();
    first.tick();
    second.tick();

    let render = |w: &TrafficWorld| {
        w.network
            .roads()
            .map(|r| r.render())
            .collect::<Vec<_>>()
    };
    assert_eq!(render(&first), render(&second));
    assert_eq!(first.stats.total, second.stats.total);
}
