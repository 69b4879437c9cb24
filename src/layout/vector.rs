//! 2D vector arithmetic in normalized layout space.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A point or displacement in normalized `[0, 1] x [0, 1]` space.
///
/// Plain value type: every operation returns a new vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Vector2 {
	/// Horizontal component.
	pub x: f64,
	/// Vertical component.
	pub y: f64,
}

impl Vector2 {
	/// The origin.
	pub const ZERO: Self = Self::new(0.0, 0.0);

	/// Centre of the normalized unit square.
	pub const CENTER: Self = Self::new(0.5, 0.5);

	/// Vector from its components.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Unit vector at `angle` radians from the positive x axis.
	pub fn from_angle(angle: f64) -> Self {
		let (sin, cos) = angle.sin_cos();
		Self::new(cos, sin)
	}

	/// Both components negated.
	pub fn negate(self) -> Self {
		Self::new(-self.x, -self.y)
	}

	/// `self - other`.
	pub fn subtract(self, other: Self) -> Self {
		self + other.negate()
	}

	/// Both components multiplied by `k`.
	pub fn scale(self, k: f64) -> Self {
		Self::new(self.x * k, self.y * k)
	}

	/// Divides both components by `k`.
	///
	/// Returns `None` when `k` is zero or the quotient is not finite, so callers
	/// can drop the contribution instead of carrying NaN or infinity forward.
	pub fn checked_div(self, k: f64) -> Option<Self> {
		if k == 0.0 {
			return None;
		}
		let quotient = Self::new(self.x / k, self.y / k);
		quotient.is_finite().then_some(quotient)
	}

	/// `x² + y²`, the squared length of this vector.
	pub fn squared_distance(self) -> f64 {
		self.x * self.x + self.y * self.y
	}

	/// Euclidean length of this vector.
	pub fn distance(self) -> f64 {
		self.squared_distance().sqrt()
	}

	/// Unit vector in the same direction, `None` for a zero-length vector.
	pub fn normalized(self) -> Option<Self> {
		self.checked_div(self.distance())
	}

	/// Whether neither component is NaN or infinite.
	pub fn is_finite(self) -> bool {
		self.x.is_finite() && self.y.is_finite()
	}

	/// Returns `self` if both components are finite, the zero vector otherwise.
	pub fn finite_or_zero(self) -> Self {
		if self.is_finite() { self } else { Self::ZERO }
	}

	/// Mean of `points`, `None` for an empty sequence.
	pub fn average<I>(points: I) -> Option<Self>
	where
		I: IntoIterator<Item = Self>,
	{
		let (sum, count) = points
			.into_iter()
			.fold((Self::ZERO, 0usize), |(sum, count), p| (sum + p, count + 1));
		if count == 0 {
			return None;
		}
		sum.checked_div(count as f64)
	}
}

impl Add for Vector2 {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		Self::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl AddAssign for Vector2 {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl Neg for Vector2 {
	type Output = Self;

	fn neg(self) -> Self {
		self.negate()
	}
}

impl Sub for Vector2 {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		self.subtract(rhs)
	}
}

impl Mul<f64> for Vector2 {
	type Output = Self;

	fn mul(self, rhs: f64) -> Self {
		self.scale(rhs)
	}
}

/// Axis-aligned extent of a set of points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Lower-left corner.
	pub min: Vector2,
	/// Upper-right corner.
	pub max: Vector2,
}

impl Bounds {
	/// Smallest box containing every point, `None` for an empty sequence.
	pub fn enclosing<I>(points: I) -> Option<Self>
	where
		I: IntoIterator<Item = Vector2>,
	{
		let mut points = points.into_iter();
		let first = points.next()?;
		Some(points.fold(
			Self {
				min: first,
				max: first,
			},
			|b, p| Self {
				min: Vector2::new(b.min.x.min(p.x), b.min.y.min(p.y)),
				max: Vector2::new(b.max.x.max(p.x), b.max.y.max(p.y)),
			},
		))
	}

	/// Horizontal extent.
	pub fn width(&self) -> f64 {
		self.max.x - self.min.x
	}

	/// Vertical extent.
	pub fn height(&self) -> f64 {
		self.max.y - self.min.y
	}
}
