//! Force-directed layout: one damped physics step per update.
//!
//! Each step sums, per node, an inverse-square repulsion from every other node
//! and a Hookean spring along every incident link. Velocities are integrated
//! with a heavy friction multiplier, then positions are integrated and the
//! whole layout is shifted so its centroid drifts back to the configured
//! centre. All new state is computed into scratch buffers and written back in
//! one pass, so callers never observe a half-applied step.

use super::config::ForceConfig;
use super::types::Graph;
use super::vector::Vector2;

/// Iterative force-directed strategy. Stateless between calls.
#[derive(Clone, Debug, Default)]
pub struct ForceDirectedLayout {
	config: ForceConfig,
}

impl ForceDirectedLayout {
	/// Build a strategy from the given constants.
	pub fn new(config: ForceConfig) -> Self {
		Self { config }
	}

	/// Constants used by every step.
	pub fn config(&self) -> &ForceConfig {
		&self.config
	}

	/// Advance the simulation by exactly one step.
	pub fn update(&self, graph: &mut Graph) {
		let positions: Vec<Vector2> = graph.positions().collect();
		let neighbors = graph.adjacency();

		let forces: Vec<Vector2> = positions
			.iter()
			.zip(&neighbors)
			.enumerate()
			.map(|(index, (&position, targets))| {
				let force = self.repulsion(position, &positions, index)
					+ self.spring_force(position, targets);
				force.finite_or_zero()
			})
			.collect();

		let centering = self.centering(&positions);

		for ((node, &position), force) in graph.nodes.iter_mut().zip(&positions).zip(forces) {
			if node.pinned {
				node.velocity = Vector2::ZERO;
				node.position = position;
				continue;
			}
			let velocity = ((node.velocity + force) * self.config.friction).finite_or_zero();
			node.velocity = velocity;
			node.position = position + velocity + centering;
		}
	}

	/// Inverse-square push away from every other node. Coincident pairs are
	/// skipped.
	fn repulsion(&self, reference: Vector2, others: &[Vector2], skip: usize) -> Vector2 {
		let mut accum = Vector2::ZERO;
		for (offset, &other) in others.iter().enumerate() {
			if offset == skip {
				continue;
			}
			let diff = reference - other;
			let squared = diff.squared_distance();
			if squared <= self.config.epsilon {
				continue;
			}
			if let Some(push) = diff.checked_div(squared) {
				accum += push * self.config.charge_constant;
			}
		}
		accum
	}

	/// Hookean pull (or push) toward `spring_length` along each link.
	fn spring_force(&self, source: Vector2, targets: &[Vector2]) -> Vector2 {
		let mut accum = Vector2::ZERO;
		for &target in targets {
			let delta = target - source;
			let length = delta.distance();
			if length <= 0.0 {
				continue;
			}
			let Some(unit) = delta.checked_div(length) else {
				continue;
			};
			accum += unit * ((length - self.config.spring_length) * self.config.spring_constant);
		}
		accum
	}

	/// Global offset that moves the step-start centroid onto the centre.
	/// Non-finite positions are left out of the centroid.
	fn centering(&self, positions: &[Vector2]) -> Vector2 {
		let centroid = Vector2::average(positions.iter().copied().filter(|p| p.is_finite()))
			.unwrap_or(self.config.center);
		(self.config.center - centroid).finite_or_zero()
	}
}
