//! Tunable constants for the layout strategies.
//!
//! Every value lives in normalized space, so the defaults hold for any canvas
//! size. All structs deserialize with `#[serde(default)]`: a JSON document only
//! needs the fields it overrides.

use log::warn;
use serde::{Deserialize, Serialize};

use super::vector::Vector2;
use crate::error::LoadError;

/// Parameters for [`CircularLayout`](super::CircularLayout).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CircularConfig {
	/// Centre of the ring.
	pub center: Vector2,
	/// Ring radius as a fraction of the unit square.
	pub radius: f64,
	/// Angle of the first node on the first call, in radians.
	pub start_angle: f64,
	/// Rotation added after every call, in radians. Produces the slow idle spin.
	pub angle_increment: f64,
}

impl Default for CircularConfig {
	fn default() -> Self {
		Self {
			center: Vector2::CENTER,
			radius: 0.4,
			start_angle: 0.0,
			angle_increment: 0.005,
		}
	}
}

/// Parameters for [`ForceDirectedLayout`](super::ForceDirectedLayout).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ForceConfig {
	/// Point the layout centroid is pulled back to every step.
	pub center: Vector2,
	/// Velocity multiplier applied every step. Must be below 1.
	pub friction: f64,
	/// Rest length of every link.
	pub spring_length: f64,
	/// Link stiffness.
	pub spring_constant: f64,
	/// Strength of the inverse-square repulsion between every node pair.
	pub charge_constant: f64,
	/// Pairs closer than this squared distance exert no repulsion.
	pub epsilon: f64,
}

impl Default for ForceConfig {
	fn default() -> Self {
		Self {
			center: Vector2::CENTER,
			friction: 0.001,
			spring_length: 0.15,
			spring_constant: 40.0,
			charge_constant: 0.05875,
			epsilon: 1e-8,
		}
	}
}

/// Complete layout configuration for both strategies and the driver.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
	/// Settings for the ring layout.
	pub circular: CircularConfig,
	/// Settings for the force-directed step.
	pub force: ForceConfig,
	/// Strategy updates per [`Simulation::tick`](super::Simulation::tick).
	pub steps_per_tick: usize,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			circular: CircularConfig::default(),
			force: ForceConfig::default(),
			steps_per_tick: 1,
		}
	}
}

impl CircularConfig {
	/// Reject values that would place nodes at non-finite positions.
	pub fn validate(&self) -> Result<(), LoadError> {
		ensure(self.center.is_finite(), "circular.center must be finite")?;
		ensure(
			self.radius.is_finite() && self.radius >= 0.0,
			"circular.radius must be finite and non-negative",
		)?;
		ensure(self.start_angle.is_finite(), "circular.start_angle must be finite")?;
		ensure(
			self.angle_increment.is_finite(),
			"circular.angle_increment must be finite",
		)
	}
}

impl ForceConfig {
	/// Reject values that would undo the damping or the coincidence guards.
	pub fn validate(&self) -> Result<(), LoadError> {
		ensure(self.center.is_finite(), "force.center must be finite")?;
		ensure(
			(0.0..1.0).contains(&self.friction),
			"force.friction must be in [0, 1)",
		)?;
		ensure(
			self.spring_length.is_finite() && self.spring_length >= 0.0,
			"force.spring_length must be finite and non-negative",
		)?;
		ensure(
			self.spring_constant.is_finite(),
			"force.spring_constant must be finite",
		)?;
		ensure(
			self.charge_constant.is_finite(),
			"force.charge_constant must be finite",
		)?;
		ensure(
			self.epsilon.is_finite() && self.epsilon > 0.0,
			"force.epsilon must be finite and positive",
		)
	}
}

impl LayoutConfig {
	/// Decode a configuration, filling unspecified fields with defaults, and
	/// validate the result.
	pub fn from_json(json: &str) -> Result<Self, LoadError> {
		let config: Self = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	/// Validate both sub-configurations.
	pub fn validate(&self) -> Result<(), LoadError> {
		self.circular.validate()?;
		self.force.validate()
	}
}

fn ensure(ok: bool, reason: &str) -> Result<(), LoadError> {
	if ok {
		Ok(())
	} else {
		warn!("rejecting layout config: {}", reason);
		Err(LoadError::InvalidConfig(reason.to_string()))
	}
}
