use crate::clipboard::types::{Bounds, BoundsInt, Rect, RectInt, Vector2, Vector2Int, Vector3, Vector3Int};

/// Truncate each component toward zero.
pub fn vector2_to_int(value: Vector2) -> Vector2Int {
	Vector2Int {
		x: value.x as i32,
		y: value.y as i32,
	}
}

/// Truncate each component toward zero.
pub fn vector3_to_int(value: Vector3) -> Vector3Int {
	Vector3Int {
		x: value.x as i32,
		y: value.y as i32,
		z: value.z as i32,
	}
}

/// Truncate position and size components toward zero.
pub fn rect_to_int(value: Rect) -> RectInt {
	RectInt {
		x: value.x as i32,
		y: value.y as i32,
		width: value.width as i32,
		height: value.height as i32,
	}
}

/// Convert bounds to integer bounds while preserving the value's look.
///
/// Both endpoints are rounded and the size derived by subtraction, so the
/// rounded position plus size still lands on the rounded max endpoint instead
/// of drifting the way a directly rounded size would.
pub fn bounds_to_int_keep_value_look(value: Bounds) -> BoundsInt {
	let position = Vector3Int {
		x: round_to_int(value.center.x - value.extents.x),
		y: round_to_int(value.center.y - value.extents.y),
		z: round_to_int(value.center.z - value.extents.z),
	};
	let size = Vector3Int {
		x: round_to_int(value.center.x + value.extents.x) - position.x,
		y: round_to_int(value.center.y + value.extents.y) - position.y,
		z: round_to_int(value.center.z + value.extents.z) - position.z,
	};
	BoundsInt { position, size }
}

/// Widen each component exactly.
pub fn vector2_from_int(value: Vector2Int) -> Vector2 {
	Vector2 {
		x: value.x as f32,
		y: value.y as f32,
	}
}

/// Widen each component exactly.
pub fn vector3_from_int(value: Vector3Int) -> Vector3 {
	Vector3 {
		x: value.x as f32,
		y: value.y as f32,
		z: value.z as f32,
	}
}

/// Widen position and size components exactly.
pub fn rect_from_int(value: RectInt) -> Rect {
	Rect {
		x: value.x as f32,
		y: value.y as f32,
		width: value.width as f32,
		height: value.height as f32,
	}
}

/// Map min position and size back to the float center/extents shape.
pub fn bounds_from_int(value: BoundsInt) -> Bounds {
	let extents = Vector3 {
		x: value.size.x as f32 / 2.0,
		y: value.size.y as f32 / 2.0,
		z: value.size.z as f32 / 2.0,
	};
	let center = Vector3 {
		x: value.position.x as f32 + extents.x,
		y: value.position.y as f32 + extents.y,
		z: value.position.z as f32 + extents.z,
	};
	Bounds { center, extents }
}

/// Round to nearest, ties to even, matching the host's rounding.
fn round_to_int(value: f32) -> i32 {
	let floor = value.floor();
	let fraction = value - floor;
	let base = floor as i32;

	if fraction > 0.5 {
		base + 1
	} else if fraction < 0.5 {
		base
	} else if base % 2 == 0 {
		base
	} else {
		base + 1
	}
}
