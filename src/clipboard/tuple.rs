use crate::clipboard::float::{parse_float, write_float};
use crate::clipboard::types::{Bounds, Color, Quaternion, Rect, Vector2, Vector3, Vector4};
use crate::clipboard::{ClipboardError, Result};

/// Render `<tag>(c1,...,cN)` using the float writer for each component.
pub fn write_floats(tag: &str, components: &[f32]) -> String {
	let mut out = String::with_capacity(tag.len() + 2 + components.len() * 8);
	out.push_str(tag);
	out.push('(');
	for (idx, component) in components.iter().enumerate() {
		if idx > 0 {
			out.push(',');
		}
		out.push_str(&write_float(*component));
	}
	out.push(')');
	out
}

/// Parse `<tag>(c1,...,cN)` with exactly `N` float components.
///
/// The tag is case-sensitive and no whitespace is tolerated anywhere.
pub fn parse_floats<const N: usize>(tag: &str, text: &str) -> Result<[f32; N]> {
	if text.is_empty() {
		return Err(ClipboardError::EmptyInput);
	}

	let body = text
		.strip_prefix(tag)
		.and_then(|rest| rest.strip_prefix('('))
		.and_then(|rest| rest.strip_suffix(')'))
		.ok_or_else(|| ClipboardError::InvalidFormat { detail: format!("expected {tag}(..) constructor") })?;

	let mut components = [0.0_f32; N];
	let mut count = 0_usize;
	for part in body.split(',') {
		if count == N {
			return Err(arity_error(tag, N));
		}
		components[count] = parse_float(part)?;
		count += 1;
	}
	if count != N {
		return Err(arity_error(tag, N));
	}

	Ok(components)
}

/// Render a 2D vector in constructor syntax.
pub fn write_vector2(value: Vector2) -> String {
	write_floats("Vector2", &[value.x, value.y])
}

/// Parse `Vector2(x,y)`.
pub fn parse_vector2(text: &str) -> Result<Vector2> {
	let [x, y] = parse_floats::<2>("Vector2", text)?;
	Ok(Vector2 { x, y })
}

/// Render a 3D vector in constructor syntax.
pub fn write_vector3(value: Vector3) -> String {
	write_floats("Vector3", &[value.x, value.y, value.z])
}

/// Parse `Vector3(x,y,z)`.
pub fn parse_vector3(text: &str) -> Result<Vector3> {
	let [x, y, z] = parse_floats::<3>("Vector3", text)?;
	Ok(Vector3 { x, y, z })
}

/// Render a 4D vector in constructor syntax.
pub fn write_vector4(value: Vector4) -> String {
	write_floats("Vector4", &[value.x, value.y, value.z, value.w])
}

/// Parse `Vector4(x,y,z,w)`.
pub fn parse_vector4(text: &str) -> Result<Vector4> {
	let [x, y, z, w] = parse_floats::<4>("Vector4", text)?;
	Ok(Vector4 { x, y, z, w })
}

/// Render a quaternion in constructor syntax.
pub fn write_quaternion(value: Quaternion) -> String {
	write_floats("Quaternion", &[value.x, value.y, value.z, value.w])
}

/// Parse `Quaternion(x,y,z,w)`.
pub fn parse_quaternion(text: &str) -> Result<Quaternion> {
	let [x, y, z, w] = parse_floats::<4>("Quaternion", text)?;
	Ok(Quaternion { x, y, z, w })
}

/// Render a color in constructor syntax.
pub fn write_color(value: Color) -> String {
	write_floats("Color", &[value.r, value.g, value.b, value.a])
}

/// Parse `Color(r,g,b,a)`.
pub fn parse_color(text: &str) -> Result<Color> {
	let [r, g, b, a] = parse_floats::<4>("Color", text)?;
	Ok(Color { r, g, b, a })
}

/// Render a rectangle as position then size components.
pub fn write_rect(value: Rect) -> String {
	write_floats("Rect", &[value.x, value.y, value.width, value.height])
}

/// Parse `Rect(x,y,width,height)`.
pub fn parse_rect(text: &str) -> Result<Rect> {
	let [x, y, width, height] = parse_floats::<4>("Rect", text)?;
	Ok(Rect { x, y, width, height })
}

/// Render bounds as center then extents components.
pub fn write_bounds(value: Bounds) -> String {
	write_floats(
		"Bounds",
		&[
			value.center.x,
			value.center.y,
			value.center.z,
			value.extents.x,
			value.extents.y,
			value.extents.z,
		],
	)
}

/// Parse `Bounds(cx,cy,cz,ex,ey,ez)`.
pub fn parse_bounds(text: &str) -> Result<Bounds> {
	let [cx, cy, cz, ex, ey, ez] = parse_floats::<6>("Bounds", text)?;
	Ok(Bounds {
		center: Vector3 { x: cx, y: cy, z: cz },
		extents: Vector3 { x: ex, y: ey, z: ez },
	})
}

fn arity_error(tag: &str, expected: usize) -> ClipboardError {
	ClipboardError::InvalidFormat { detail: format!("expected {expected} components for {tag}") }
}
