//! Graph data structures consumed and updated by the layout strategies.

use std::collections::{HashMap, HashSet};

use log::{info, trace, warn};
use serde::{Deserialize, Serialize};

use super::vector::{Bounds, Vector2};
use crate::error::LoadError;

/// A node in the graph.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Node {
	/// Unique identifier for this node. Used to reference nodes in links.
	pub id: String,
	/// Palette index used by renderers to colour the node.
	pub group: u32,
	/// Position in normalized space. Nominally inside the unit square, never clamped.
	#[serde(default)]
	pub position: Vector2,
	/// Per-step displacement carried between force steps.
	#[serde(default)]
	pub velocity: Vector2,
	/// Set while the node is held by an interactive drag. Pinned nodes are
	/// left alone by every layout strategy.
	#[serde(skip)]
	pub pinned: bool,
}

impl Node {
	/// Unpinned node at the origin with zero velocity.
	pub fn new(id: impl Into<String>, group: u32) -> Self {
		Self {
			id: id.into(),
			group,
			position: Vector2::ZERO,
			velocity: Vector2::ZERO,
			pinned: false,
		}
	}

	/// Set the starting position.
	pub fn with_position(mut self, position: Vector2) -> Self {
		self.position = position;
		self
	}

	/// Set the starting velocity.
	pub fn with_velocity(mut self, velocity: Vector2) -> Self {
		self.velocity = velocity;
		self
	}
}

/// An undirected, weighted relation between two nodes, referenced by id.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Link {
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
	/// Link strength from the input. Not used by the force model.
	#[serde(rename = "value")]
	pub weight: i64,
}

impl Link {
	/// Link between two node ids.
	pub fn new(source: impl Into<String>, target: impl Into<String>, weight: i64) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			weight,
		}
	}
}

/// Complete graph data: nodes and links.
///
/// Node order fixes the index each node is addressed by during a layout pass
/// and through [`Graph::set_pinned`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Graph {
	/// Nodes in input order. Indices into this list identify nodes.
	pub nodes: Vec<Node>,
	/// Undirected links by node id.
	#[serde(default)]
	pub links: Vec<Link>,
}

impl Graph {
	/// Graph from already built parts. Duplicate ids are not checked.
	pub fn new(nodes: Vec<Node>, links: Vec<Link>) -> Self {
		Self { nodes, links }
	}

	/// Decode a graph from JSON of the form
	/// `{ "nodes": [{ "id", "group" }], "links": [{ "source", "target", "value" }] }`.
	///
	/// Missing positions and velocities default to zero. Duplicate node ids
	/// are rejected.
	pub fn from_json(json: &str) -> Result<Self, LoadError> {
		let graph = serde_json::from_str::<Self>(json)
			.inspect_err(|e| warn!("failed to parse graph: {}", e))?;
		graph.checked()
	}

	/// Byte-slice variant of [`Graph::from_json`].
	pub fn from_slice(bytes: &[u8]) -> Result<Self, LoadError> {
		let graph = serde_json::from_slice::<Self>(bytes)
			.inspect_err(|e| warn!("failed to parse graph: {}", e))?;
		graph.checked()
	}

	fn checked(self) -> Result<Self, LoadError> {
		let mut seen = HashSet::with_capacity(self.nodes.len());
		for node in &self.nodes {
			if !seen.insert(node.id.as_str()) {
				warn!("duplicate node id {:?}", node.id);
				return Err(LoadError::DuplicateNodeId(node.id.clone()));
			}
		}
		info!(
			"loaded {} nodes, {} links",
			self.nodes.len(),
			self.links.len()
		);
		Ok(self)
	}

	/// Whether the graph has no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Index of the node with `id`. The first match wins if ids repeat.
	pub fn node_index(&self, id: &str) -> Option<usize> {
		self.nodes.iter().position(|n| n.id == id)
	}

	/// Map from node id to node index, built once per layout pass.
	pub(crate) fn index_lookup(&self) -> HashMap<&str, usize> {
		let mut lookup = HashMap::with_capacity(self.nodes.len());
		for (index, node) in self.nodes.iter().enumerate() {
			lookup.entry(node.id.as_str()).or_insert(index);
		}
		lookup
	}

	/// Resolve a link to its endpoint indices, `None` for a dangling link.
	fn resolve(lookup: &HashMap<&str, usize>, link: &Link) -> Option<(usize, usize)> {
		match (
			lookup.get(link.source.as_str()),
			lookup.get(link.target.as_str()),
		) {
			(Some(&source), Some(&target)) => Some((source, target)),
			_ => {
				trace!("skipping dangling link {} -> {}", link.source, link.target);
				None
			}
		}
	}

	/// Neighbour positions per node index: one entry per incident link, in
	/// both directions, duplicated for multi-edges.
	pub(crate) fn adjacency(&self) -> Vec<Vec<Vector2>> {
		let lookup = self.index_lookup();
		let mut targets = vec![Vec::new(); self.nodes.len()];
		for link in &self.links {
			let Some((source, target)) = Self::resolve(&lookup, link) else {
				continue;
			};
			targets[source].push(self.nodes[target].position);
			targets[target].push(self.nodes[source].position);
		}
		targets
	}

	/// Endpoint positions of every resolvable link, in link order.
	pub fn link_segments(&self) -> Vec<(Vector2, Vector2)> {
		let lookup = self.index_lookup();
		self.links
			.iter()
			.filter_map(|link| Self::resolve(&lookup, link))
			.map(|(s, t)| (self.nodes[s].position, self.nodes[t].position))
			.collect()
	}

	/// Node positions in index order.
	pub fn positions(&self) -> impl Iterator<Item = Vector2> + '_ {
		self.nodes.iter().map(|n| n.position)
	}

	/// Mean node position, `None` for an empty graph.
	pub fn centroid(&self) -> Option<Vector2> {
		Vector2::average(self.positions())
	}

	/// Smallest box holding every node, or `None` for an empty graph.
	pub fn bounding_box(&self) -> Option<Bounds> {
		Bounds::enclosing(self.positions())
	}

	/// Hand the node at `index` to an interactive drag: pin it, stop it, and
	/// move it to `position`. Returns `false` if `index` is out of range.
	pub fn set_pinned(&mut self, index: usize, position: Vector2) -> bool {
		let Some(node) = self.nodes.get_mut(index) else {
			return false;
		};
		node.pinned = true;
		node.velocity = Vector2::ZERO;
		node.position = position;
		trace!("pinned node {} at ({}, {})", node.id, position.x, position.y);
		true
	}

	/// Release a drag, returning the node to the simulation. Returns `false`
	/// if `index` is out of range.
	pub fn clear_pinned(&mut self, index: usize) -> bool {
		let Some(node) = self.nodes.get_mut(index) else {
			return false;
		};
		node.pinned = false;
		trace!("released node {}", node.id);
		true
	}
}
