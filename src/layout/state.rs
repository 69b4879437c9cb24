//! Layout driver state: the graph, the active strategy, and drag tracking.
//!
//! A host creates one [`Simulation`] per loaded graph and calls
//! [`Simulation::tick`] from its timer or frame callback. Drag handling goes
//! through the same owner between ticks, so the borrow checker rules out a
//! step racing with a drag write.

use log::debug;

use super::config::LayoutConfig;
use super::strategy::{Layout, LayoutKind};
use super::types::Graph;
use super::vector::Vector2;

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	/// Index of the dragged node, if a drag is in progress.
	pub node_index: Option<usize>,
	/// Position the node had when the drag began.
	pub start: Vector2,
}

impl DragState {
	/// Whether a node is currently being dragged.
	pub fn is_active(&self) -> bool {
		self.node_index.is_some()
	}
}

/// Owns a graph together with the strategy that lays it out.
pub struct Simulation {
	graph: Graph,
	layout: Layout,
	config: LayoutConfig,
	drag: DragState,
	running: bool,
}

impl Simulation {
	/// Start a running simulation with the default configuration.
	pub fn new(graph: Graph, kind: LayoutKind) -> Self {
		Self::with_config(graph, kind, LayoutConfig::default())
	}

	/// Start a running simulation with `config`.
	pub fn with_config(graph: Graph, kind: LayoutKind, config: LayoutConfig) -> Self {
		Self {
			layout: kind.make_engine(&config),
			graph,
			config,
			drag: DragState::default(),
			running: true,
		}
	}

	/// The graph as of the last tick or drag.
	pub fn graph(&self) -> &Graph {
		&self.graph
	}

	/// Mutable access for hosts that edit nodes between ticks.
	pub fn graph_mut(&mut self) -> &mut Graph {
		&mut self.graph
	}

	/// Consume the simulation, returning its graph.
	pub fn into_graph(self) -> Graph {
		self.graph
	}

	/// Configuration used to build strategies.
	pub fn config(&self) -> &LayoutConfig {
		&self.config
	}

	/// Kind of the active strategy.
	pub fn kind(&self) -> LayoutKind {
		self.layout.kind()
	}

	/// Whether the active strategy builds on the previous positions.
	pub fn is_incremental(&self) -> bool {
		self.layout.is_incremental()
	}

	/// Whether [`tick`](Self::tick) currently advances the layout.
	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Pause or resume [`tick`](Self::tick). Drags still apply while paused.
	pub fn set_running(&mut self, running: bool) {
		self.running = running;
	}

	/// Current drag state.
	pub fn drag(&self) -> &DragState {
		&self.drag
	}

	/// Switch strategy. A fresh strategy is built even if `kind` is unchanged,
	/// which restarts the circular rotation. Takes effect on the next tick.
	pub fn set_layout(&mut self, kind: LayoutKind) {
		debug!("switching layout {:?} -> {:?}", self.layout.kind(), kind);
		self.layout = kind.make_engine(&self.config);
	}

	/// Swap in a different graph, cancelling any drag on the old one.
	pub fn replace_graph(&mut self, graph: Graph) -> Graph {
		debug!(
			"replacing graph: {} nodes, {} links",
			graph.nodes.len(),
			graph.links.len()
		);
		self.drag = DragState::default();
		std::mem::replace(&mut self.graph, graph)
	}

	/// Run `steps_per_tick` strategy updates. Returns `false` without touching
	/// the graph when paused.
	pub fn tick(&mut self) -> bool {
		if !self.running {
			return false;
		}
		for _ in 0..self.config.steps_per_tick {
			self.layout.update(&mut self.graph);
		}
		true
	}

	/// Start dragging the node at `index`, pinning it at `position`. Any
	/// previous drag is released first. Returns `false` if `index` is out of
	/// range.
	pub fn begin_drag(&mut self, index: usize, position: Vector2) -> bool {
		self.end_drag();
		let Some(node) = self.graph.nodes.get(index) else {
			return false;
		};
		self.drag = DragState {
			node_index: Some(index),
			start: node.position,
		};
		self.graph.set_pinned(index, position)
	}

	/// Move the dragged node. Returns `false` when no drag is active.
	pub fn drag_to(&mut self, position: Vector2) -> bool {
		match self.drag.node_index {
			Some(index) => self.graph.set_pinned(index, position),
			None => false,
		}
	}

	/// Release the dragged node back to the simulation.
	pub fn end_drag(&mut self) {
		if let Some(index) = self.drag.node_index.take() {
			self.graph.clear_pinned(index);
		}
	}

	/// Abort the drag: the node returns to where it was when the drag began,
	/// at rest and unpinned. Returns `false` when no drag is active.
	pub fn cancel_drag(&mut self) -> bool {
		let Some(index) = self.drag.node_index.take() else {
			return false;
		};
		debug!("cancelling drag of node {}", index);
		self.graph.set_pinned(index, self.drag.start) && self.graph.clear_pinned(index)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::layout::types::{Link, Node};

	fn triangle() -> Graph {
		Graph::new(
			vec![
				Node::new("a", 0).with_position(Vector2::new(0.3, 0.3)),
				Node::new("b", 1).with_position(Vector2::new(0.7, 0.3)),
				Node::new("c", 2).with_position(Vector2::new(0.5, 0.7)),
			],
			vec![
				Link::new("a", "b", 1),
				Link::new("b", "c", 1),
				Link::new("c", "a", 1),
			],
		)
	}

	#[test]
	fn test_paused_tick_leaves_graph() {
		let mut sim = Simulation::new(triangle(), LayoutKind::ForceDirected);
		sim.set_running(false);
		assert!(!sim.tick());
		assert_eq!(sim.graph(), &triangle());

		sim.set_running(true);
		assert!(sim.tick());
		assert_ne!(sim.graph(), &triangle());
	}

	#[test]
	fn test_switch_takes_effect_next_tick() {
		let mut sim = Simulation::new(triangle(), LayoutKind::ForceDirected);
		assert!(sim.is_incremental());
		sim.set_layout(LayoutKind::Circular);
		assert_eq!(sim.kind(), LayoutKind::Circular);
		assert_eq!(sim.graph(), &triangle());

		sim.tick();
		for node in &sim.graph().nodes {
			let r = (node.position - Vector2::CENTER).distance();
			assert!((r - 0.4).abs() < 1e-12);
		}
	}

	#[test]
	fn test_steps_per_tick() {
		let config = LayoutConfig {
			steps_per_tick: 3,
			..LayoutConfig::default()
		};
		let mut sim = Simulation::with_config(triangle(), LayoutKind::ForceDirected, config);
		sim.tick();

		let mut expected = triangle();
		let mut layout = LayoutKind::ForceDirected.make_engine(&LayoutConfig::default());
		for _ in 0..3 {
			layout.update(&mut expected);
		}
		assert_eq!(sim.graph(), &expected);
	}

	#[test]
	fn test_drag_pins_until_release() {
		let mut sim = Simulation::new(triangle(), LayoutKind::ForceDirected);
		assert!(sim.begin_drag(1, Vector2::new(0.9, 0.9)));
		assert!(sim.drag().is_active());
		assert_eq!(sim.drag().start, Vector2::new(0.7, 0.3));

		sim.tick();
		assert_eq!(sim.graph().nodes[1].position, Vector2::new(0.9, 0.9));

		assert!(sim.drag_to(Vector2::new(0.8, 0.2)));
		sim.tick();
		assert_eq!(sim.graph().nodes[1].position, Vector2::new(0.8, 0.2));
		assert_eq!(sim.graph().nodes[1].velocity, Vector2::ZERO);

		sim.end_drag();
		assert!(!sim.drag().is_active());
		assert!(!sim.graph().nodes[1].pinned);
		sim.tick();
		assert_ne!(sim.graph().nodes[1].position, Vector2::new(0.8, 0.2));
		assert!(!sim.drag_to(Vector2::ZERO));
	}

	#[test]
	fn test_cancel_drag_restores_start() {
		let mut sim = Simulation::new(triangle(), LayoutKind::ForceDirected);
		assert!(!sim.cancel_drag());

		assert!(sim.begin_drag(2, Vector2::new(0.1, 0.9)));
		sim.tick();
		assert!(sim.drag_to(Vector2::new(0.2, 0.8)));
		assert!(sim.cancel_drag());

		let node = &sim.graph().nodes[2];
		assert_eq!(node.position, Vector2::new(0.5, 0.7));
		assert_eq!(node.velocity, Vector2::ZERO);
		assert!(!node.pinned);
		assert!(!sim.drag().is_active());
	}

	#[test]
	fn test_begin_drag_out_of_range() {
		let mut sim = Simulation::new(triangle(), LayoutKind::Circular);
		assert!(!sim.begin_drag(7, Vector2::ZERO));
		assert!(!sim.drag().is_active());
	}

	#[test]
	fn test_replace_graph_cancels_drag() {
		let mut sim = Simulation::new(triangle(), LayoutKind::ForceDirected);
		sim.begin_drag(0, Vector2::new(0.1, 0.1));
		let old = sim.replace_graph(Graph::new(vec![Node::new("solo", 0)], Vec::new()));
		assert_eq!(old.nodes.len(), 3);
		assert!(!sim.drag().is_active());
		assert!(sim.tick());
		assert_eq!(sim.into_graph().nodes[0].position, Vector2::CENTER);
	}
}
