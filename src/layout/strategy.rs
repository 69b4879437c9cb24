//! Strategy selection and dispatch.

use serde::{Deserialize, Serialize};

use super::circular::CircularLayout;
use super::config::LayoutConfig;
use super::force::ForceDirectedLayout;
use super::types::Graph;

/// Which strategy a driver has selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
	/// Nodes evenly spaced on a slowly rotating ring.
	#[default]
	Circular,
	/// Damped spring-and-charge simulation.
	ForceDirected,
}

impl LayoutKind {
	/// Build a fresh strategy of this kind from `config`.
	pub fn make_engine(self, config: &LayoutConfig) -> Layout {
		match self {
			Self::Circular => Layout::Circular(CircularLayout::new(config.circular.clone())),
			Self::ForceDirected => {
				Layout::ForceDirected(ForceDirectedLayout::new(config.force.clone()))
			}
		}
	}
}

/// A layout strategy. `update` mutates the graph in place and keeps no
/// reference to it afterwards.
#[derive(Clone, Debug)]
pub enum Layout {
	/// Ring placement.
	Circular(CircularLayout),
	/// Force-directed stepping.
	ForceDirected(ForceDirectedLayout),
}

impl Layout {
	/// Run one update of the wrapped strategy.
	pub fn update(&mut self, graph: &mut Graph) {
		match self {
			Self::Circular(layout) => layout.update(graph),
			Self::ForceDirected(layout) => layout.update(graph),
		}
	}

	/// Whether repeated updates refine the previous result rather than
	/// recomputing it from scratch.
	pub fn is_incremental(&self) -> bool {
		match self {
			Self::Circular(_) => false,
			Self::ForceDirected(_) => true,
		}
	}

	/// Kind of the wrapped strategy.
	pub fn kind(&self) -> LayoutKind {
		match self {
			Self::Circular(_) => LayoutKind::Circular,
			Self::ForceDirected(_) => LayoutKind::ForceDirected,
		}
	}
}

impl Default for Layout {
	fn default() -> Self {
		LayoutKind::default().make_engine(&LayoutConfig::default())
	}
}

impl From<CircularLayout> for Layout {
	fn from(layout: CircularLayout) -> Self {
		Self::Circular(layout)
	}
}

impl From<ForceDirectedLayout> for Layout {
	fn from(layout: ForceDirectedLayout) -> Self {
		Self::ForceDirected(layout)
	}
}
