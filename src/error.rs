//! Errors raised while loading graphs and layout configuration.
//!
//! The layout engine itself never fails; only decoding external input does.

/// Failure to decode a graph or layout configuration.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
	/// The input was not valid JSON or did not match the expected shape.
	#[error("failed to parse JSON: {0}")]
	Parse(#[from] serde_json::Error),
	/// Two nodes share the same id.
	#[error("graph contains more than one node with id {0:?}")]
	DuplicateNodeId(String),
	/// A configuration value would break the damping or finiteness of the layout.
	#[error("invalid layout config: {0}")]
	InvalidConfig(String),
}
