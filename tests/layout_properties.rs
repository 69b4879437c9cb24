//! Long-running and property-based checks of the layout strategies.

use std::f64::consts::TAU;

use float_cmp::assert_approx_eq;
use force_layout::{
	CircularLayout, ForceConfig, ForceDirectedLayout, Graph, Layout, LayoutKind, Link, Node,
	Simulation, Vector2,
};
use proptest::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
use env_logger as _;
use log as _;
use serde as _;
use serde_json as _;
use thiserror as _;

fn node_at(id: &str, x: f64, y: f64) -> Node {
	Node::new(id, 0).with_position(Vector2::new(x, y))
}

fn mean_pairwise_squared_distance(graph: &Graph) -> f64 {
	let positions: Vec<Vector2> = graph.positions().collect();
	let mut total = 0.0;
	let mut pairs = 0usize;
	for (i, &a) in positions.iter().enumerate() {
		for &b in &positions[i + 1..] {
			total += (a - b).squared_distance();
			pairs += 1;
		}
	}
	total / pairs as f64
}

fn separation(graph: &Graph) -> f64 {
	(graph.nodes[0].position - graph.nodes[1].position).distance()
}

fn run(layout: &ForceDirectedLayout, graph: &mut Graph, steps: usize) {
	for _ in 0..steps {
		layout.update(graph);
	}
}

#[test]
fn unlinked_nodes_spread_and_stay_finite() {
	force_layout::init_logging();

	let mut graph = Graph::new(
		vec![
			node_at("a", 0.45, 0.5),
			node_at("b", 0.55, 0.5),
			node_at("c", 0.5, 0.42),
			node_at("d", 0.5, 0.58),
			node_at("e", 0.48, 0.47),
		],
		Vec::new(),
	);
	let layout = ForceDirectedLayout::default();
	let initial = mean_pairwise_squared_distance(&graph);

	run(&layout, &mut graph, 100);
	let early = mean_pairwise_squared_distance(&graph);
	assert!(early > initial);

	for _ in 0..99 {
		run(&layout, &mut graph, 100);
		for node in &graph.nodes {
			assert!(node.position.is_finite(), "{} diverged", node.id);
			assert!(node.velocity.is_finite(), "{} diverged", node.id);
		}
	}
	assert!(mean_pairwise_squared_distance(&graph) >= early);

	let centroid = graph.centroid().unwrap();
	assert_approx_eq!(f64, centroid.x, 0.5, epsilon = 1e-6);
	assert_approx_eq!(f64, centroid.y, 0.5, epsilon = 1e-6);
}

#[test]
fn linked_pair_settles_near_spring_length() {
	let config = ForceConfig::default();
	// Spring and repulsion balance where k (d - L) = q / d.
	let (k, l, q) = (
		config.spring_constant,
		config.spring_length,
		config.charge_constant,
	);
	let equilibrium = (k * l + (k * k * l * l + 4.0 * k * q).sqrt()) / (2.0 * k);
	let layout = ForceDirectedLayout::new(config);

	for (a, b) in [((0.05, 0.5), (0.95, 0.5)), ((0.5, 0.5), (0.501, 0.5))] {
		let mut graph = Graph::new(
			vec![node_at("a", a.0, a.1), node_at("b", b.0, b.1)],
			vec![Link::new("a", "b", 1)],
		);
		run(&layout, &mut graph, 2_000);
		let d = separation(&graph);
		assert_approx_eq!(f64, d, equilibrium, epsilon = 1e-4);
		assert!((d - l).abs() < 0.02, "separation {d} far from rest length");
	}
}

#[test]
fn exactly_coincident_pair_stays_put() {
	let mut graph = Graph::new(
		vec![node_at("a", 0.3, 0.3), node_at("b", 0.3, 0.3)],
		vec![Link::new("a", "b", 1)],
	);
	run(&ForceDirectedLayout::default(), &mut graph, 10);
	for node in &graph.nodes {
		assert_approx_eq!(f64, node.position.x, 0.5, epsilon = 1e-12);
		assert_approx_eq!(f64, node.position.y, 0.5, epsilon = 1e-12);
	}
}

#[test]
fn single_node_converges_to_center() {
	let mut graph = Graph::new(
		vec![node_at("solo", 0.95, 0.05).with_velocity(Vector2::new(0.3, 0.3))],
		Vec::new(),
	);
	let layout = ForceDirectedLayout::default();
	let mut previous = (graph.nodes[0].position - Vector2::CENTER).distance();
	for _ in 0..4 {
		layout.update(&mut graph);
		let distance = (graph.nodes[0].position - Vector2::CENTER).distance();
		assert!(distance < previous);
		previous = distance;
	}
	assert!(previous < 1e-6);
}

#[test]
fn dangling_link_contributes_nothing() {
	let nodes = vec![node_at("a", 0.3, 0.4), node_at("b", 0.6, 0.55)];
	let mut with_dangling = Graph::new(
		nodes.clone(),
		vec![Link::new("a", "b", 1), Link::new("b", "missing", 3)],
	);
	let mut clean = Graph::new(nodes, vec![Link::new("a", "b", 1)]);

	let layout = ForceDirectedLayout::default();
	run(&layout, &mut with_dangling, 25);
	run(&layout, &mut clean, 25);
	assert_eq!(with_dangling.nodes, clean.nodes);
}

#[test]
fn three_node_ring_example() {
	let mut graph = Graph::new(
		vec![Node::new("A", 0), Node::new("B", 1), Node::new("C", 2)],
		Vec::new(),
	);
	let mut layout = CircularLayout::default();
	layout.update(&mut graph);
	layout.update(&mut graph);

	let offset = 0.005;
	for (i, node) in graph.nodes.iter().enumerate() {
		let expected = Vector2::CENTER + Vector2::from_angle(offset + TAU * i as f64 / 3.0) * 0.4;
		assert_approx_eq!(f64, node.position.x, expected.x, epsilon = 1e-12);
		assert_approx_eq!(f64, node.position.y, expected.y, epsilon = 1e-12);
	}
}

#[test]
fn strategy_switch_mid_run() {
	let graph = Graph::from_json(
		r#"{
			"nodes": [
				{ "id": "hub", "group": 0 },
				{ "id": "x", "group": 1 },
				{ "id": "y", "group": 1 },
				{ "id": "z", "group": 2 }
			],
			"links": [
				{ "source": "hub", "target": "x", "value": 1 },
				{ "source": "hub", "target": "y", "value": 1 },
				{ "source": "hub", "target": "z", "value": 1 }
			]
		}"#,
	)
	.unwrap();

	let mut sim = Simulation::new(graph, LayoutKind::Circular);
	sim.tick();
	sim.set_layout(LayoutKind::ForceDirected);
	for _ in 0..500 {
		sim.tick();
	}
	let graph = sim.into_graph();
	let hub = graph.nodes[0].position;
	for leaf in &graph.nodes[1..] {
		let d = (leaf.position - hub).distance();
		assert!(d > 0.05 && d < 0.4, "leaf {} at distance {d}", leaf.id);
	}
}

fn arb_graph() -> impl Strategy<Value = Graph> {
	(1usize..12)
		.prop_flat_map(|n| {
			(
				prop::collection::vec(((0.0f64..1.0), (0.0f64..1.0), any::<bool>()), n),
				prop::collection::vec(((0..n + 2), (0..n + 2)), 0..2 * n),
			)
		})
		.prop_map(|(nodes, links)| {
			Graph::new(
				nodes
					.into_iter()
					.enumerate()
					.map(|(i, (x, y, pinned))| {
						let mut node = node_at(&format!("n{i}"), x, y);
						node.pinned = pinned;
						node
					})
					.collect(),
				// Indices past the node count produce dangling links.
				links
					.into_iter()
					.map(|(s, t)| Link::new(format!("n{s}"), format!("n{t}"), 1))
					.collect(),
			)
		})
}

proptest! {
	#[test]
	fn force_step_is_total(mut graph in arb_graph(), steps in 1usize..50) {
		let mut layout = Layout::from(ForceDirectedLayout::default());
		for _ in 0..steps {
			layout.update(&mut graph);
		}
		for node in &graph.nodes {
			prop_assert!(node.position.is_finite());
			prop_assert!(node.velocity.is_finite());
		}
	}

	#[test]
	fn pinned_nodes_never_move(graph in arb_graph()) {
		for kind in [LayoutKind::Circular, LayoutKind::ForceDirected] {
			let mut stepped = graph.clone();
			let mut layout = kind.make_engine(&Default::default());
			layout.update(&mut stepped);
			for (before, after) in graph.nodes.iter().zip(&stepped.nodes) {
				if before.pinned {
					prop_assert_eq!(after.position, before.position);
					if kind == LayoutKind::ForceDirected {
						prop_assert_eq!(after.velocity, Vector2::ZERO);
					}
				}
			}
		}
	}

	#[test]
	fn ring_spacing_is_uniform(count in 1usize..40, calls in 1usize..20) {
		let mut graph = Graph::new(
			(0..count).map(|i| Node::new(format!("n{i}"), 0)).collect(),
			Vec::new(),
		);
		let mut layout = CircularLayout::default();
		for _ in 0..calls {
			layout.update(&mut graph);
		}
		let step = TAU / count as f64;
		for pair in graph.nodes.windows(2) {
			let a = pair[0].position - Vector2::CENTER;
			let b = pair[1].position - Vector2::CENTER;
			prop_assert!((a.distance() - 0.4).abs() < 1e-12);
			prop_assert!((b.distance() - 0.4).abs() < 1e-12);
			let turn = (b.y.atan2(b.x) - a.y.atan2(a.x)).rem_euclid(TAU);
			prop_assert!((turn - step).abs() < 1e-9);
		}
	}
}
