use crate::clipboard::enums::EnumDescriptor;
use crate::clipboard::gradient::{Gradient, GradientMode};
use crate::clipboard::types::{
	Bounds, BoundsInt, Color, Quaternion, Rect, RectInt, Vector2, Vector2Int, Vector3, Vector3Int, Vector4,
};
use crate::clipboard::{ClipboardError, Result, convert, enums, float, gradient, scalar, tuple};

/// Write/parse capability pair for one clipboard value type.
///
/// The codec for a type is selected statically; an unsupported type is a
/// build-time error, never a runtime one.
pub trait ClipboardCodec: Sized {
	/// Render the value as canonical clipboard text.
	fn write(&self) -> String;
	/// Parse canonical clipboard text into a value.
	fn parse(text: &str) -> Result<Self>;
}

/// Host-shaped parse result: success flag plus value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParseOutcome<T> {
	/// Whether parsing succeeded.
	pub success: bool,
	/// Parsed value, or the type default when `success` is false.
	pub value: T,
}

/// Render a value through its statically selected codec.
pub fn serialize<T: ClipboardCodec>(value: &T) -> String {
	value.write()
}

/// Parse text through the statically selected codec.
///
/// Any parse failure folds into `(success: false, default)`; callers decide
/// whether to retain their previous value.
pub fn deserialize<T: ClipboardCodec + Default>(text: &str) -> ParseOutcome<T> {
	match T::parse(text) {
		Ok(value) => ParseOutcome { success: true, value },
		Err(_) => ParseOutcome {
			success: false,
			value: T::default(),
		},
	}
}

impl ClipboardCodec for bool {
	fn write(&self) -> String {
		scalar::write_bool(*self)
	}

	fn parse(text: &str) -> Result<Self> {
		scalar::parse_bool(text)
	}
}

impl ClipboardCodec for i32 {
	fn write(&self) -> String {
		scalar::write_int(*self)
	}

	fn parse(text: &str) -> Result<Self> {
		scalar::parse_int(text)
	}
}

impl ClipboardCodec for u32 {
	fn write(&self) -> String {
		scalar::write_uint(*self)
	}

	fn parse(text: &str) -> Result<Self> {
		scalar::parse_uint(text)
	}
}

impl ClipboardCodec for f32 {
	fn write(&self) -> String {
		float::write_float(*self)
	}

	fn parse(text: &str) -> Result<Self> {
		float::parse_float(text)
	}
}

impl ClipboardCodec for String {
	fn write(&self) -> String {
		scalar::write_string(self)
	}

	fn parse(text: &str) -> Result<Self> {
		scalar::parse_string(text)
	}
}

impl ClipboardCodec for Vector2 {
	fn write(&self) -> String {
		tuple::write_vector2(*self)
	}

	fn parse(text: &str) -> Result<Self> {
		tuple::parse_vector2(text)
	}
}

impl ClipboardCodec for Vector3 {
	fn write(&self) -> String {
		tuple::write_vector3(*self)
	}

	fn parse(text: &str) -> Result<Self> {
		tuple::parse_vector3(text)
	}
}

impl ClipboardCodec for Vector4 {
	fn write(&self) -> String {
		tuple::write_vector4(*self)
	}

	fn parse(text: &str) -> Result<Self> {
		tuple::parse_vector4(text)
	}
}

impl ClipboardCodec for Rect {
	fn write(&self) -> String {
		tuple::write_rect(*self)
	}

	fn parse(text: &str) -> Result<Self> {
		tuple::parse_rect(text)
	}
}

impl ClipboardCodec for Quaternion {
	fn write(&self) -> String {
		tuple::write_quaternion(*self)
	}

	fn parse(text: &str) -> Result<Self> {
		tuple::parse_quaternion(text)
	}
}

impl ClipboardCodec for Bounds {
	fn write(&self) -> String {
		tuple::write_bounds(*self)
	}

	fn parse(text: &str) -> Result<Self> {
		tuple::parse_bounds(text)
	}
}

impl ClipboardCodec for Color {
	fn write(&self) -> String {
		tuple::write_color(*self)
	}

	fn parse(text: &str) -> Result<Self> {
		tuple::parse_color(text)
	}
}

impl ClipboardCodec for Vector2Int {
	fn write(&self) -> String {
		tuple::write_vector2(convert::vector2_from_int(*self))
	}

	fn parse(text: &str) -> Result<Self> {
		Ok(convert::vector2_to_int(tuple::parse_vector2(text)?))
	}
}

impl ClipboardCodec for Vector3Int {
	fn write(&self) -> String {
		tuple::write_vector3(convert::vector3_from_int(*self))
	}

	fn parse(text: &str) -> Result<Self> {
		Ok(convert::vector3_to_int(tuple::parse_vector3(text)?))
	}
}

impl ClipboardCodec for RectInt {
	fn write(&self) -> String {
		tuple::write_rect(convert::rect_from_int(*self))
	}

	fn parse(text: &str) -> Result<Self> {
		Ok(convert::rect_to_int(tuple::parse_rect(text)?))
	}
}

impl ClipboardCodec for BoundsInt {
	fn write(&self) -> String {
		tuple::write_bounds(convert::bounds_from_int(*self))
	}

	fn parse(text: &str) -> Result<Self> {
		Ok(convert::bounds_to_int_keep_value_look(tuple::parse_bounds(text)?))
	}
}

impl ClipboardCodec for Gradient {
	fn write(&self) -> String {
		gradient::write_gradient(self)
	}

	fn parse(text: &str) -> Result<Self> {
		gradient::parse_gradient(text)
	}
}

impl ClipboardCodec for GradientMode {
	fn write(&self) -> String {
		enums::write_enum(&gradient_mode_descriptor(), self.index()).unwrap_or_default()
	}

	fn parse(text: &str) -> Result<Self> {
		let ordinal = enums::parse_enum(&gradient_mode_descriptor(), text)?;
		Self::from_index(ordinal).ok_or_else(|| ClipboardError::UnknownMember { token: ordinal.to_string() })
	}
}

fn gradient_mode_descriptor() -> EnumDescriptor {
	EnumDescriptor::new(&["Blend", "Fixed", "PerceptualBlend"])
}
