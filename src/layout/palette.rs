//! Fixed colour lookup for node groups.
//!
//! Renderers are out of scope for this crate, but they all need the same
//! deterministic group -> colour mapping, so it lives next to the model.

use super::types::Node;

/// RGB color representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
}

impl Color {
	/// Colour from its channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Format as a CSS `rgb(r, g, b)` string.
	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

const PRIMARY: [Color; 8] = [
	Color::rgb(255, 59, 48),  // Red
	Color::rgb(52, 199, 89),  // Green
	Color::rgb(0, 122, 255),  // Blue
	Color::rgb(255, 149, 0),  // Orange
	Color::rgb(255, 204, 0),  // Yellow
	Color::rgb(175, 82, 222), // Purple
	Color::rgb(255, 45, 85),  // Pink
	Color::rgb(0, 0, 0),      // Black
];

/// A cyclic color table indexed by node group.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
	colors: &'static [Color],
}

impl Palette {
	/// Red, green, blue, orange, yellow, purple, pink, black.
	pub const fn primary() -> Self {
		Self { colors: &PRIMARY }
	}

	/// Build a palette from a custom table. Returns `None` for an empty table.
	pub const fn from_colors(colors: &'static [Color]) -> Option<Self> {
		if colors.is_empty() {
			None
		} else {
			Some(Self { colors })
		}
	}

	/// Colour at `index`, wrapping around the table.
	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}

	/// Colour for `node`'s group.
	pub fn color_for(&self, node: &Node) -> Color {
		self.get(node.group as usize)
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self::primary()
	}
}
