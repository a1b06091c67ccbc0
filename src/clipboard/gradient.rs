use serde::{Deserialize, Serialize};

use crate::clipboard::types::Color;
use crate::clipboard::{ClipboardError, Result};

const GRADIENT_PREFIX: &str = "Gradient:";

/// Maximum number of keys per gradient stop list.
pub const MAX_GRADIENT_KEYS: usize = 8;

/// Interpolation mode between gradient keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientMode {
	/// Smooth interpolation between keys.
	Blend,
	/// Hold each key value until the next key time.
	Fixed,
	/// Blend in a perceptually uniform space.
	PerceptualBlend,
}

impl GradientMode {
	/// Host ordinal for the mode.
	pub fn index(self) -> usize {
		match self {
			Self::Blend => 0,
			Self::Fixed => 1,
			Self::PerceptualBlend => 2,
		}
	}

	/// Resolve a host ordinal back to a mode.
	pub fn from_index(index: usize) -> Option<Self> {
		match index {
			0 => Some(Self::Blend),
			1 => Some(Self::Fixed),
			2 => Some(Self::PerceptualBlend),
			_ => None,
		}
	}
}

impl Default for GradientMode {
	fn default() -> Self {
		Self::Blend
	}
}

/// One color stop.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GradientColorKey {
	/// Stop position in `[0, 1]`.
	pub time: f32,
	/// Stop color.
	pub color: Color,
}

/// One alpha stop.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GradientAlphaKey {
	/// Stop position in `[0, 1]`.
	pub time: f32,
	/// Stop alpha.
	pub alpha: f32,
}

/// Gradient value: interpolation mode plus ordered color and alpha stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
	/// Interpolation mode between keys.
	pub mode: GradientMode,
	/// Color stops in stored order.
	pub color_keys: Vec<GradientColorKey>,
	/// Alpha stops in stored order.
	pub alpha_keys: Vec<GradientAlphaKey>,
}

impl Default for Gradient {
	/// The host's default gradient: opaque white across the full range.
	fn default() -> Self {
		let white = Color {
			r: 1.0,
			g: 1.0,
			b: 1.0,
			a: 1.0,
		};
		Self {
			mode: GradientMode::Blend,
			color_keys: vec![
				GradientColorKey { time: 0.0, color: white },
				GradientColorKey { time: 1.0, color: white },
			],
			alpha_keys: vec![
				GradientAlphaKey { time: 0.0, alpha: 1.0 },
				GradientAlphaKey { time: 1.0, alpha: 1.0 },
			],
		}
	}
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct GradientWire {
	mode: u32,
	#[serde(rename = "colorKeys")]
	color_keys: Vec<ColorKeyWire>,
	#[serde(rename = "alphaKeys")]
	alpha_keys: Vec<AlphaKeyWire>,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ColorKeyWire {
	time: f32,
	color: [f32; 4],
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct AlphaKeyWire {
	time: f32,
	alpha: f32,
}

/// Render a gradient as `Gradient:` followed by its canonical JSON document.
///
/// Field order is fixed, so equal gradients always produce identical text.
pub fn write_gradient(value: &Gradient) -> String {
	let wire = GradientWire {
		mode: value.mode.index() as u32,
		color_keys: value
			.color_keys
			.iter()
			.map(|key| ColorKeyWire {
				time: key.time,
				color: [key.color.r, key.color.g, key.color.b, key.color.a],
			})
			.collect(),
		alpha_keys: value
			.alpha_keys
			.iter()
			.map(|key| AlphaKeyWire {
				time: key.time,
				alpha: key.alpha,
			})
			.collect(),
	};
	let json = serde_json::to_string(&wire).unwrap_or_default();
	format!("{GRADIENT_PREFIX}{json}")
}

/// Parse gradient text produced by [`write_gradient`].
///
/// Requires the exact prefix, a wire document with no unknown fields, a known
/// mode ordinal, 1 to [`MAX_GRADIENT_KEYS`] keys per list, and finite key
/// times within `[0, 1]`.
pub fn parse_gradient(text: &str) -> Result<Gradient> {
	if text.is_empty() {
		return Err(ClipboardError::EmptyInput);
	}
	let Some(json) = text.strip_prefix(GRADIENT_PREFIX) else {
		return Err(ClipboardError::InvalidFormat { detail: "expected Gradient: prefix".to_owned() });
	};

	let wire: GradientWire = serde_json::from_str(json)
		.map_err(|err| ClipboardError::InvalidFormat { detail: format!("gradient payload: {err}") })?;

	let mode = GradientMode::from_index(wire.mode as usize)
		.ok_or_else(|| ClipboardError::UnknownMember { token: wire.mode.to_string() })?;

	check_key_count("color", wire.color_keys.len())?;
	check_key_count("alpha", wire.alpha_keys.len())?;

	let mut color_keys = Vec::with_capacity(wire.color_keys.len());
	for key in &wire.color_keys {
		check_key_time(key.time)?;
		color_keys.push(GradientColorKey {
			time: key.time,
			color: Color {
				r: key.color[0],
				g: key.color[1],
				b: key.color[2],
				a: key.color[3],
			},
		});
	}

	let mut alpha_keys = Vec::with_capacity(wire.alpha_keys.len());
	for key in &wire.alpha_keys {
		check_key_time(key.time)?;
		alpha_keys.push(GradientAlphaKey {
			time: key.time,
			alpha: key.alpha,
		});
	}

	Ok(Gradient {
		mode,
		color_keys,
		alpha_keys,
	})
}

fn check_key_count(list: &str, count: usize) -> Result<()> {
	if count == 0 || count > MAX_GRADIENT_KEYS {
		return Err(ClipboardError::InvalidFormat {
			detail: format!("gradient {list} key count {count} outside 1..={MAX_GRADIENT_KEYS}"),
		});
	}
	Ok(())
}

fn check_key_time(time: f32) -> Result<()> {
	if !time.is_finite() || !(0.0..=1.0).contains(&time) {
		return Err(ClipboardError::InvalidFormat { detail: format!("gradient key time {time} outside [0,1]") });
	}
	Ok(())
}
