//! Force-directed and circular graph layout in normalized space.
//!
//! Provides the layout engine behind an interactive graph view:
//! - Inverse-square repulsion, Hookean springs and a global centering shift
//! - Heavily damped velocity integration that stays bounded as graphs grow
//! - A circular placement with a slow idle rotation
//! - Pinning for nodes held by a drag
//!
//! # Example
//!
//! ```
//! use force_layout::{Graph, LayoutKind, Simulation};
//!
//! let graph = Graph::from_json(r#"{
//!     "nodes": [{ "id": "a", "group": 0 }, { "id": "b", "group": 1 }],
//!     "links": [{ "source": "a", "target": "b", "value": 1 }]
//! }"#)?;
//!
//! let mut sim = Simulation::new(graph, LayoutKind::Circular);
//! sim.tick();
//! sim.set_layout(LayoutKind::ForceDirected);
//! for _ in 0..100 {
//!     sim.tick();
//! }
//! assert!(sim.graph().positions().all(|p| p.is_finite()));
//! # Ok::<(), force_layout::LoadError>(())
//! ```

mod circular;
/// Tunable constants for both strategies.
pub mod config;
mod force;
/// Group colours for hosts that draw nodes.
pub mod palette;
mod state;
mod strategy;
mod types;
mod vector;

pub use circular::CircularLayout;
pub use config::{CircularConfig, ForceConfig, LayoutConfig};
pub use force::ForceDirectedLayout;
pub use palette::{Color, Palette};
pub use state::{DragState, Simulation};
pub use strategy::{Layout, LayoutKind};
pub use types::{Graph, Link, Node};
pub use vector::{Bounds, Vector2};
