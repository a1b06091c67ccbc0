mod composite;
mod convert;
mod dispatch;
mod enums;
mod error;
mod float;
mod gradient;
mod scalar;
mod tuple;
mod types;

/// Composite schema, dynamic values, and codec entry points.
pub use composite::{CompositeSchema, CompositeValue, FieldKind, FieldSchema, FieldValue, Value, parse_composite, write_composite};
/// Field-wise conversions between float shapes and integer shapes.
pub use convert::{bounds_from_int, bounds_to_int_keep_value_look, rect_from_int, rect_to_int, vector2_from_int, vector2_to_int, vector3_from_int, vector3_to_int};
/// Static dispatch trait and host-shaped entry points.
pub use dispatch::{ClipboardCodec, ParseOutcome, deserialize, serialize};
/// Enum descriptor types and codec entry points.
pub use enums::{EnumDescriptor, EnumMember, parse_enum, write_enum};
/// Error and result aliases.
pub use error::{ClipboardError, Result};
/// Float writer/parser entry points.
pub use float::{parse_float, write_float};
/// Gradient value types and codec entry points.
pub use gradient::{Gradient, GradientAlphaKey, GradientColorKey, GradientMode, MAX_GRADIENT_KEYS, parse_gradient, write_gradient};
/// Scalar writer/parser entry points.
pub use scalar::{parse_bool, parse_int, parse_string, parse_uint, write_bool, write_int, write_string, write_uint};
/// Generic and per-kind tuple writer/parser entry points.
pub use tuple::{parse_bounds, parse_color, parse_floats, parse_quaternion, parse_rect, parse_vector2, parse_vector3, parse_vector4, write_bounds, write_color, write_floats, write_quaternion, write_rect, write_vector2, write_vector3, write_vector4};
/// Clipboard value types and kind tags.
pub use types::{Bounds, BoundsInt, Color, Quaternion, Rect, RectInt, ValueKind, Vector2, Vector2Int, Vector3, Vector3Int, Vector4};
