/// Discriminant identifying which codec a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	/// Boolean value.
	Bool,
	/// Signed 32-bit integer value.
	Int32,
	/// Unsigned 32-bit integer value.
	UInt32,
	/// 32-bit float value.
	Float32,
	/// Raw string value.
	String,
	/// Enumeration value.
	Enum,
	/// 2D float vector.
	Vector2,
	/// 3D float vector.
	Vector3,
	/// 4D float vector.
	Vector4,
	/// Position and size rectangle.
	Rect,
	/// Rotation quaternion.
	Quaternion,
	/// Center and extents box.
	Bounds,
	/// RGBA color.
	Color,
	/// Interpolation gradient.
	Gradient,
	/// Schema-driven composite object.
	Composite,
}

impl ValueKind {
	/// Wire tag used by the composite encoding.
	///
	/// Tags follow the host's serialized-property numbering where a host
	/// counterpart exists; `UInt32` takes the first unassigned slot and
	/// `Composite` matches the host's generic marker.
	pub fn tag(self) -> i32 {
		match self {
			Self::Int32 => 0,
			Self::Bool => 1,
			Self::Float32 => 2,
			Self::String => 3,
			Self::Color => 4,
			Self::Enum => 7,
			Self::Vector2 => 8,
			Self::Vector3 => 9,
			Self::Vector4 => 10,
			Self::Rect => 11,
			Self::Bounds => 15,
			Self::Gradient => 16,
			Self::Quaternion => 17,
			Self::UInt32 => 26,
			Self::Composite => -1,
		}
	}

	/// Resolve a wire tag back to a kind.
	pub fn from_tag(tag: i32) -> Option<Self> {
		match tag {
			0 => Some(Self::Int32),
			1 => Some(Self::Bool),
			2 => Some(Self::Float32),
			3 => Some(Self::String),
			4 => Some(Self::Color),
			7 => Some(Self::Enum),
			8 => Some(Self::Vector2),
			9 => Some(Self::Vector3),
			10 => Some(Self::Vector4),
			11 => Some(Self::Rect),
			15 => Some(Self::Bounds),
			16 => Some(Self::Gradient),
			17 => Some(Self::Quaternion),
			26 => Some(Self::UInt32),
			-1 => Some(Self::Composite),
			_ => None,
		}
	}
}

/// 2D float vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
	/// X component.
	pub x: f32,
	/// Y component.
	pub y: f32,
}

/// 3D float vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
	/// X component.
	pub x: f32,
	/// Y component.
	pub y: f32,
	/// Z component.
	pub z: f32,
}

/// 4D float vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector4 {
	/// X component.
	pub x: f32,
	/// Y component.
	pub y: f32,
	/// Z component.
	pub z: f32,
	/// W component.
	pub w: f32,
}

/// Rotation quaternion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quaternion {
	/// X component.
	pub x: f32,
	/// Y component.
	pub y: f32,
	/// Z component.
	pub z: f32,
	/// W component.
	pub w: f32,
}

/// RGBA color with unclamped float channels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
	/// Red channel.
	pub r: f32,
	/// Green channel.
	pub g: f32,
	/// Blue channel.
	pub b: f32,
	/// Alpha channel.
	pub a: f32,
}

/// Position and size rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
	/// Position x.
	pub x: f32,
	/// Position y.
	pub y: f32,
	/// Horizontal size.
	pub width: f32,
	/// Vertical size.
	pub height: f32,
}

/// Axis-aligned box stored as center and extents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
	/// Box center.
	pub center: Vector3,
	/// Half-size along each axis.
	pub extents: Vector3,
}

/// 2D integer vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vector2Int {
	/// X component.
	pub x: i32,
	/// Y component.
	pub y: i32,
}

/// 3D integer vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vector3Int {
	/// X component.
	pub x: i32,
	/// Y component.
	pub y: i32,
	/// Z component.
	pub z: i32,
}

/// Position and size rectangle with integer components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectInt {
	/// Position x.
	pub x: i32,
	/// Position y.
	pub y: i32,
	/// Horizontal size.
	pub width: i32,
	/// Vertical size.
	pub height: i32,
}

/// Axis-aligned integer box stored as min position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundsInt {
	/// Minimum corner.
	pub position: Vector3Int,
	/// Size along each axis.
	pub size: Vector3Int,
}
