use serde::{Deserialize, Serialize};

use crate::clipboard::enums::{self, EnumDescriptor};
use crate::clipboard::gradient::{self, Gradient};
use crate::clipboard::types::{Bounds, Color, Quaternion, Rect, ValueKind, Vector2, Vector3, Vector4};
use crate::clipboard::{ClipboardError, Result, float, scalar, tuple};

const COMPOSITE_PREFIX: &str = "GenericPropertyJSON:";

/// Expected kind for one composite field.
///
/// Enumeration fields carry their declared members inline, since the schema
/// is the caller's supply point for descriptor data.
#[derive(Debug, Clone)]
pub enum FieldKind {
	/// Boolean field.
	Bool,
	/// Signed 32-bit integer field.
	Int,
	/// Unsigned 32-bit integer field.
	UInt,
	/// 32-bit float field.
	Float,
	/// Raw string field.
	String,
	/// Enumeration field with its declared members.
	Enum(EnumDescriptor),
	/// 2D vector field.
	Vector2,
	/// 3D vector field.
	Vector3,
	/// 4D vector field.
	Vector4,
	/// Rectangle field.
	Rect,
	/// Quaternion field.
	Quaternion,
	/// Bounds field.
	Bounds,
	/// Color field.
	Color,
	/// Gradient field.
	Gradient,
}

impl FieldKind {
	/// Kind tag this field encodes as.
	pub fn kind(&self) -> ValueKind {
		match self {
			Self::Bool => ValueKind::Bool,
			Self::Int => ValueKind::Int32,
			Self::UInt => ValueKind::UInt32,
			Self::Float => ValueKind::Float32,
			Self::String => ValueKind::String,
			Self::Enum(_) => ValueKind::Enum,
			Self::Vector2 => ValueKind::Vector2,
			Self::Vector3 => ValueKind::Vector3,
			Self::Vector4 => ValueKind::Vector4,
			Self::Rect => ValueKind::Rect,
			Self::Quaternion => ValueKind::Quaternion,
			Self::Bounds => ValueKind::Bounds,
			Self::Color => ValueKind::Color,
			Self::Gradient => ValueKind::Gradient,
		}
	}
}

/// Dynamic field payload for composite values.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Boolean payload.
	Bool(bool),
	/// Signed 32-bit integer payload.
	Int(i32),
	/// Unsigned 32-bit integer payload.
	UInt(u32),
	/// 32-bit float payload.
	Float(f32),
	/// Raw string payload.
	String(String),
	/// Enumeration payload as a declared ordinal.
	Enum(usize),
	/// 2D vector payload.
	Vector2(Vector2),
	/// 3D vector payload.
	Vector3(Vector3),
	/// 4D vector payload.
	Vector4(Vector4),
	/// Rectangle payload.
	Rect(Rect),
	/// Quaternion payload.
	Quaternion(Quaternion),
	/// Bounds payload.
	Bounds(Bounds),
	/// Color payload.
	Color(Color),
	/// Gradient payload.
	Gradient(Gradient),
}

impl Value {
	/// Kind tag of the held payload.
	pub fn kind(&self) -> ValueKind {
		match self {
			Self::Bool(_) => ValueKind::Bool,
			Self::Int(_) => ValueKind::Int32,
			Self::UInt(_) => ValueKind::UInt32,
			Self::Float(_) => ValueKind::Float32,
			Self::String(_) => ValueKind::String,
			Self::Enum(_) => ValueKind::Enum,
			Self::Vector2(_) => ValueKind::Vector2,
			Self::Vector3(_) => ValueKind::Vector3,
			Self::Vector4(_) => ValueKind::Vector4,
			Self::Rect(_) => ValueKind::Rect,
			Self::Quaternion(_) => ValueKind::Quaternion,
			Self::Bounds(_) => ValueKind::Bounds,
			Self::Color(_) => ValueKind::Color,
			Self::Gradient(_) => ValueKind::Gradient,
		}
	}
}

/// One named field inside a composite value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field name.
	pub name: String,
	/// Field payload.
	pub value: Value,
}

/// Ordered field values for one composite object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompositeValue {
	/// Fields in stored order.
	pub fields: Vec<FieldValue>,
}

impl CompositeValue {
	/// Find a field payload by name.
	pub fn field(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|field| field.name == name).map(|field| &field.value)
	}
}

/// One schema entry.
#[derive(Debug, Clone)]
pub struct FieldSchema {
	/// Unique field name.
	pub name: String,
	/// Expected field kind.
	pub kind: FieldKind,
}

/// Field name to expected kind mapping for one composite type.
///
/// Insertion order is the write order; it must be stable across a
/// write/parse cycle.
#[derive(Debug, Clone)]
pub struct CompositeSchema {
	name: String,
	fields: Vec<FieldSchema>,
}

impl CompositeSchema {
	/// Create an empty schema for the named composite type.
	pub fn new(name: &str) -> Self {
		Self {
			name: name.to_owned(),
			fields: Vec::new(),
		}
	}

	/// Append a field, preserving insertion order.
	pub fn with_field(mut self, name: &str, kind: FieldKind) -> Self {
		self.fields.push(FieldSchema {
			name: name.to_owned(),
			kind,
		});
		self
	}

	/// Schema name, written as the root object name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Declared fields in insertion order.
	pub fn fields(&self) -> &[FieldSchema] {
		&self.fields
	}
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CompositeWire {
	name: String,
	#[serde(rename = "type")]
	tag: i32,
	children: Vec<FieldWire>,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldWire {
	name: String,
	#[serde(rename = "type")]
	tag: i32,
	val: String,
}

/// Render a composite value against its schema.
///
/// Fields are written in schema insertion order; each payload is the text the
/// matching kind codec produces. A value missing a schema field, or holding a
/// different kind than the schema declares, fails with `SchemaMismatch`.
pub fn write_composite(schema: &CompositeSchema, value: &CompositeValue) -> Result<String> {
	let mut children = Vec::with_capacity(schema.fields.len());
	for field in &schema.fields {
		let Some(payload) = value.field(&field.name) else {
			return Err(ClipboardError::SchemaMismatch {
				field: field.name.clone(),
				expected: field.kind.kind(),
				got: None,
			});
		};
		children.push(FieldWire {
			name: field.name.clone(),
			tag: field.kind.kind().tag(),
			val: write_field_payload(field, payload)?,
		});
	}

	let wire = CompositeWire {
		name: schema.name.clone(),
		tag: ValueKind::Composite.tag(),
		children,
	};
	let json = serde_json::to_string(&wire).unwrap_or_default();
	Ok(format!("{COMPOSITE_PREFIX}{json}"))
}

/// Parse composite text produced by [`write_composite`] against a schema.
///
/// The encoded fields must match the schema exactly: same names in the same
/// order, every kind tag equal to the schema's expected tag. Kind
/// disagreement fails with `SchemaMismatch` and nothing is coerced; any
/// failure leaves the caller's value untouched.
pub fn parse_composite(schema: &CompositeSchema, text: &str) -> Result<CompositeValue> {
	if text.is_empty() {
		return Err(ClipboardError::EmptyInput);
	}
	let Some(json) = text.strip_prefix(COMPOSITE_PREFIX) else {
		return Err(ClipboardError::InvalidFormat { detail: "expected GenericPropertyJSON: prefix".to_owned() });
	};

	let wire: CompositeWire = serde_json::from_str(json)
		.map_err(|err| ClipboardError::InvalidFormat { detail: format!("composite payload: {err}") })?;

	if wire.tag != ValueKind::Composite.tag() {
		return Err(ClipboardError::InvalidFormat { detail: format!("root tag {} is not a composite", wire.tag) });
	}
	if wire.name != schema.name {
		return Err(ClipboardError::InvalidFormat {
			detail: format!("root name {} does not match schema {}", wire.name, schema.name),
		});
	}
	if wire.children.len() != schema.fields.len() {
		return Err(ClipboardError::InvalidFormat {
			detail: format!("expected {} fields, got {}", schema.fields.len(), wire.children.len()),
		});
	}

	let mut fields = Vec::with_capacity(schema.fields.len());
	for (child, field) in wire.children.iter().zip(&schema.fields) {
		if child.name != field.name {
			return Err(ClipboardError::InvalidFormat {
				detail: format!("unexpected field {}, expected {}", child.name, field.name),
			});
		}
		if child.tag != field.kind.kind().tag() {
			return Err(ClipboardError::SchemaMismatch {
				field: field.name.clone(),
				expected: field.kind.kind(),
				got: ValueKind::from_tag(child.tag),
			});
		}
		fields.push(FieldValue {
			name: field.name.clone(),
			value: parse_field_payload(&field.kind, &child.val)?,
		});
	}

	Ok(CompositeValue { fields })
}

fn write_field_payload(field: &FieldSchema, value: &Value) -> Result<String> {
	match (&field.kind, value) {
		(FieldKind::Bool, Value::Bool(payload)) => Ok(scalar::write_bool(*payload)),
		(FieldKind::Int, Value::Int(payload)) => Ok(scalar::write_int(*payload)),
		(FieldKind::UInt, Value::UInt(payload)) => Ok(scalar::write_uint(*payload)),
		(FieldKind::Float, Value::Float(payload)) => Ok(float::write_float(*payload)),
		(FieldKind::String, Value::String(payload)) => Ok(scalar::write_string(payload)),
		(FieldKind::Enum(descriptor), Value::Enum(ordinal)) => enums::write_enum(descriptor, *ordinal),
		(FieldKind::Vector2, Value::Vector2(payload)) => Ok(tuple::write_vector2(*payload)),
		(FieldKind::Vector3, Value::Vector3(payload)) => Ok(tuple::write_vector3(*payload)),
		(FieldKind::Vector4, Value::Vector4(payload)) => Ok(tuple::write_vector4(*payload)),
		(FieldKind::Rect, Value::Rect(payload)) => Ok(tuple::write_rect(*payload)),
		(FieldKind::Quaternion, Value::Quaternion(payload)) => Ok(tuple::write_quaternion(*payload)),
		(FieldKind::Bounds, Value::Bounds(payload)) => Ok(tuple::write_bounds(*payload)),
		(FieldKind::Color, Value::Color(payload)) => Ok(tuple::write_color(*payload)),
		(FieldKind::Gradient, Value::Gradient(payload)) => Ok(gradient::write_gradient(payload)),
		_ => Err(ClipboardError::SchemaMismatch {
			field: field.name.clone(),
			expected: field.kind.kind(),
			got: Some(value.kind()),
		}),
	}
}

fn parse_field_payload(kind: &FieldKind, text: &str) -> Result<Value> {
	match kind {
		FieldKind::Bool => Ok(Value::Bool(scalar::parse_bool(text)?)),
		FieldKind::Int => Ok(Value::Int(scalar::parse_int(text)?)),
		FieldKind::UInt => Ok(Value::UInt(scalar::parse_uint(text)?)),
		FieldKind::Float => Ok(Value::Float(float::parse_float(text)?)),
		FieldKind::String => Ok(Value::String(scalar::parse_string(text)?)),
		FieldKind::Enum(descriptor) => Ok(Value::Enum(enums::parse_enum(descriptor, text)?)),
		FieldKind::Vector2 => Ok(Value::Vector2(tuple::parse_vector2(text)?)),
		FieldKind::Vector3 => Ok(Value::Vector3(tuple::parse_vector3(text)?)),
		FieldKind::Vector4 => Ok(Value::Vector4(tuple::parse_vector4(text)?)),
		FieldKind::Rect => Ok(Value::Rect(tuple::parse_rect(text)?)),
		FieldKind::Quaternion => Ok(Value::Quaternion(tuple::parse_quaternion(text)?)),
		FieldKind::Bounds => Ok(Value::Bounds(tuple::parse_bounds(text)?)),
		FieldKind::Color => Ok(Value::Color(tuple::parse_color(text)?)),
		FieldKind::Gradient => Ok(Value::Gradient(gradient::parse_gradient(text)?)),
	}
}
