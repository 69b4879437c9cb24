//! Deterministic ring placement with a slow idle rotation.

use std::f64::consts::TAU;

use super::config::CircularConfig;
use super::types::Graph;
use super::vector::Vector2;

/// Places nodes evenly on a circle in node order.
///
/// The only state is the rolling start angle, which advances after every call
/// so repeated updates spin the ring slowly.
#[derive(Clone, Debug)]
pub struct CircularLayout {
	config: CircularConfig,
	start_angle: f64,
}

impl Default for CircularLayout {
	fn default() -> Self {
		Self::new(CircularConfig::default())
	}
}

impl CircularLayout {
	/// Build a ring layout starting at `config.start_angle`.
	pub fn new(config: CircularConfig) -> Self {
		Self {
			start_angle: config.start_angle.rem_euclid(TAU),
			config,
		}
	}

	/// Constants this layout was built from.
	pub fn config(&self) -> &CircularConfig {
		&self.config
	}

	/// Angle of the first node on the next call, in `[0, 2π)`.
	pub fn start_angle(&self) -> f64 {
		self.start_angle
	}

	/// Place every unpinned node on the ring, then advance the rotation.
	pub fn update(&mut self, graph: &mut Graph) {
		let count = graph.nodes.len();
		if count > 0 {
			let delta = TAU / count as f64;
			for (index, node) in graph.nodes.iter_mut().enumerate() {
				// Pinned nodes keep their slot so the ring does not reshuffle mid-drag.
				if node.pinned {
					continue;
				}
				let angle = self.start_angle + delta * index as f64;
				node.position = self.config.center + Vector2::from_angle(angle) * self.config.radius;
				node.velocity = Vector2::ZERO;
			}
		}
		self.start_angle = (self.start_angle + self.config.angle_increment).rem_euclid(TAU);
	}
}
