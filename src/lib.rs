//! force-layout: headless force-directed graph layout.
//!
//! This crate computes node positions for graph visualizations in a
//! normalized `[0, 1] x [0, 1]` space. Rendering, input handling and screen
//! transforms belong to the host; it owns a [`Simulation`] (or a bare
//! [`Graph`] plus a [`Layout`]) and steps it once per frame.

use log::info;
#[cfg(test)]
use proptest as _;

mod error;
pub mod layout;

pub use error::LoadError;
pub use layout::{
	Bounds, CircularConfig, CircularLayout, Color, DragState, ForceConfig, ForceDirectedLayout,
	Graph, Layout, LayoutConfig, LayoutKind, Link, Node, Palette, Simulation, Vector2,
};

/// Initialize logging and panic hooks for the WASM target.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
	let _ = console_log::init_with_level(log::Level::Debug);
	console_error_panic_hook::set_once();
	info!("force-layout: logging initialized");
}

/// Initialize an `env_logger` backend honouring `RUST_LOG`. Safe to call
/// more than once.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
	if env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
		.is_test(cfg!(test))
		.try_init()
		.is_ok()
	{
		info!("force-layout: logging initialized");
	}
}
