//! Road network graph
//!
//! Holds crossroads as nodes and roads as edges of a petgraph directed
//! graph. The graph only answers structural queries; the automaton state
//! lives inside each [`Road`].

use anyhow::{Context, Result};
use log::{debug, trace};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

use super::crossroad::Crossroad;
use super::grid::StepOutcome;
use super::road::Road;
use super::types::{EdgeId, NodeId};

/// Directed graph of crossroads connected by roads
#[derive(Default)]
pub struct RoadNet {
    /// The underlying petgraph directed graph (one-way roads)
    graph: DiGraph<NodeId, EdgeId>,

    /// Maps crossroad ids to their node indices in the graph
    node_index: HashMap<NodeId, NodeIndex>,

    /// Storage for crossroads
    crossroads: HashMap<NodeId, Crossroad>,

    /// Storage for roads
    roads: HashMap<EdgeId, Road>,

    /// Road ids in insertion order, which is also the update order
    road_order: Vec<EdgeId>,
}

impl RoadNet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network from a collection of crossroads
    pub fn from_crossroads(crossroads: impl IntoIterator<Item = Crossroad>) -> Result<Self> {
        let mut net = Self::new();
        for crossroad in crossroads {
            net.add_crossroad(crossroad)?;
        }
        Ok(net)
    }

    /// Adds a crossroad; its id must not already be present
    pub fn add_crossroad(&mut self, crossroad: Crossroad) -> Result<NodeId> {
        let id = crossroad.id();
        if self.node_index.contains_key(&id) {
            anyhow::bail!("Crossroad {} already in network", id);
        }

        let index = self.graph.add_node(id);
        self.node_index.insert(id, index);
        self.crossroads.insert(id, crossroad);
        trace!("added crossroad {id}");
        Ok(id)
    }

    pub fn get_crossroad(&self, id: NodeId) -> Option<&Crossroad> {
        self.crossroads.get(&id)
    }

    pub fn get_crossroad_mut(&mut self, id: NodeId) -> Option<&mut Crossroad> {
        self.crossroads.get_mut(&id)
    }

    /// Adds a road; both endpoints must already be crossroads in the network
    pub fn add_road(&mut self, road: Road) -> Result<EdgeId> {
        let (u, v) = road.uv();
        let id = road.id();
        if self.roads.contains_key(&id) {
            anyhow::bail!("Road {} already in network", id);
        }

        let start = *self
            .node_index
            .get(&u)
            .with_context(|| format!("Start crossroad {u} not found"))?;
        let end = *self
            .node_index
            .get(&v)
            .with_context(|| format!("End crossroad {v} not found"))?;

        self.graph.add_edge(start, end, id);
        debug!(
            "added road {} ({u} -> {v}, {} lane(s) x {} cells)",
            id,
            road.n_lanes(),
            road.lane_capacity()
        );
        self.roads.insert(id, road);
        self.road_order.push(id);
        Ok(id)
    }

    pub fn get_road(&self, id: EdgeId) -> Option<&Road> {
        self.roads.get(&id)
    }

    pub fn get_road_mut(&mut self, id: EdgeId) -> Option<&mut Road> {
        self.roads.get_mut(&id)
    }

    /// Finds the road leading from one crossroad to another
    pub fn road_between(&self, from: NodeId, to: NodeId) -> Result<EdgeId> {
        let from_node = self
            .node_index
            .get(&from)
            .ok_or_else(|| anyhow::anyhow!("Crossroad {} not found", from))?;
        let to_node = self
            .node_index
            .get(&to)
            .ok_or_else(|| anyhow::anyhow!("Crossroad {} not found", to))?;

        self.graph
            .edges(*from_node)
            .find(|edge| edge.target() == *to_node)
            .map(|edge| *edge.weight())
            .ok_or_else(|| anyhow::anyhow!("No road found connecting {} to {}", from, to))
    }

    /// Roads leaving a crossroad, with the crossroad each one leads to
    pub fn outgoing(&self, id: NodeId) -> Option<Vec<(EdgeId, NodeId)>> {
        let index = self.node_index.get(&id)?;
        Some(
            self.graph
                .edges(*index)
                .map(|edge| (*edge.weight(), self.graph[edge.target()]))
                .collect(),
        )
    }

    /// Remove a road and return it with its cars
    pub fn remove_road(&mut self, id: EdgeId) -> Result<Road> {
        let road = self.roads.remove(&id).context("Road not found")?;
        self.road_order.retain(|r| *r != id);

        let edge = self
            .graph
            .edge_references()
            .find(|edge| *edge.weight() == id)
            .map(|edge| edge.id());
        if let Some(edge) = edge {
            self.graph.remove_edge(edge);
        }

        Ok(road)
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    pub fn crossroad_count(&self) -> usize {
        self.crossroads.len()
    }

    pub fn car_count(&self) -> usize {
        self.roads.values().map(|r| r.cars().len()).sum()
    }

    /// Roads in insertion order
    pub fn roads(&self) -> impl Iterator<Item = &Road> {
        self.road_order.iter().filter_map(move |id| self.roads.get(id))
    }

    pub fn crossroads(&self) -> impl Iterator<Item = &Crossroad> {
        self.crossroads.values()
    }

    /// Advance every road by one tick, one road at a time
    pub fn update_all(&mut self) -> StepOutcome {
        let mut total = StepOutcome::default();
        for id in &self.road_order {
            if let Some(road) = self.roads.get_mut(id) {
                let outcome = road.update();
                trace!("road {id}: {outcome:?}");
                total += outcome;
            }
        }
        total
    }
}
