#![allow(missing_docs)]

use std::fmt::Debug;

use clipcodec::clipboard::{
	Bounds, BoundsInt, ClipboardCodec, ClipboardError, Color, CompositeSchema, CompositeValue, FieldKind, FieldValue,
	Gradient, GradientMode, Quaternion, Rect, RectInt, Result, Value, Vector2, Vector2Int, Vector3, Vector3Int,
	Vector4, deserialize, parse_composite, serialize, write_composite,
};

fn round_trip<T>(value: T)
where
	T: ClipboardCodec + Default + PartialEq + Debug,
{
	let text = serialize(&value);
	let outcome = deserialize::<T>(&text);
	assert!(outcome.success, "{text} should parse");
	assert_eq!(outcome.value, value, "{text} should round-trip");
}

#[test]
fn every_kind_round_trips_through_dispatch() {
	round_trip(true);
	round_trip(false);
	round_trip(0_i32);
	round_trip(i32::MIN);
	round_trip(i32::MAX);
	round_trip(0_u32);
	round_trip(u32::MAX);
	round_trip(0.0_f32);
	round_trip(-0.1_f32);
	round_trip(1e32_f32);
	round_trip(f32::INFINITY);
	round_trip(String::new());
	round_trip("this is a pen.".to_owned());
	round_trip(Vector2 { x: 1.0, y: -2.0 });
	round_trip(Vector3 { x: 0.1, y: 0.2, z: 0.3 });
	round_trip(Vector4 {
		x: 1.0,
		y: 2.0,
		z: 3.0,
		w: 4.0,
	});
	round_trip(Rect {
		x: -1.0,
		y: 1.0,
		width: 4.5,
		height: 2.25,
	});
	round_trip(Quaternion {
		x: 0.0,
		y: 0.0,
		z: 0.0,
		w: 1.0,
	});
	round_trip(Bounds {
		center: Vector3 { x: 1.0, y: 2.0, z: 3.0 },
		extents: Vector3 { x: 0.5, y: 1.5, z: 2.5 },
	});
	round_trip(Color {
		r: 0.25,
		g: 0.5,
		b: 0.75,
		a: 1.0,
	});
	round_trip(Vector2Int { x: -7, y: 9 });
	round_trip(Vector3Int { x: 1, y: 2, z: 3 });
	round_trip(RectInt {
		x: 0,
		y: -4,
		width: 16,
		height: 9,
	});
	round_trip(BoundsInt {
		position: Vector3Int { x: -1, y: 0, z: 1 },
		size: Vector3Int { x: 2, y: 4, z: 6 },
	});
	round_trip(Gradient::default());
	round_trip(GradientMode::PerceptualBlend);
}

#[test]
fn nan_round_trips_bit_for_bit_enough() {
	let outcome = deserialize::<f32>(&serialize(&f32::NAN));
	assert!(outcome.success);
	assert!(outcome.value.is_nan());
}

#[test]
fn empty_input_fails_for_every_kind_but_string() {
	assert!(!deserialize::<bool>("").success);
	assert!(!deserialize::<i32>("").success);
	assert!(!deserialize::<u32>("").success);
	assert!(!deserialize::<f32>("").success);
	assert!(!deserialize::<Vector2>("").success);
	assert!(!deserialize::<Vector3>("").success);
	assert!(!deserialize::<Vector4>("").success);
	assert!(!deserialize::<Rect>("").success);
	assert!(!deserialize::<Quaternion>("").success);
	assert!(!deserialize::<Bounds>("").success);
	assert!(!deserialize::<Color>("").success);
	assert!(!deserialize::<Vector2Int>("").success);
	assert!(!deserialize::<Vector3Int>("").success);
	assert!(!deserialize::<RectInt>("").success);
	assert!(!deserialize::<BoundsInt>("").success);
	assert!(!deserialize::<Gradient>("").success);
	assert!(!deserialize::<GradientMode>("").success);

	let outcome = deserialize::<String>("");
	assert!(outcome.success);
	assert_eq!(outcome.value, "");
}

#[test]
fn gradient_mode_dispatches_through_the_enum_codec() {
	assert_eq!(serialize(&GradientMode::PerceptualBlend), "Enum:PerceptualBlend");

	let outcome = deserialize::<GradientMode>("Anything:perceptual_blend");
	assert!(outcome.success);
	assert_eq!(outcome.value, GradientMode::PerceptualBlend);

	let outcome = deserialize::<GradientMode>("Enum:banana");
	assert!(!outcome.success);
	assert_eq!(outcome.value, GradientMode::Blend);
}

#[derive(Debug, Clone, PartialEq, Default)]
struct LightProbe {
	intensity: f32,
	tint: Color,
	label: String,
}

impl LightProbe {
	fn schema() -> CompositeSchema {
		CompositeSchema::new("LightProbe")
			.with_field("intensity", FieldKind::Float)
			.with_field("tint", FieldKind::Color)
			.with_field("label", FieldKind::String)
	}

	fn to_fields(&self) -> CompositeValue {
		CompositeValue {
			fields: vec![
				FieldValue {
					name: "intensity".to_owned(),
					value: Value::Float(self.intensity),
				},
				FieldValue {
					name: "tint".to_owned(),
					value: Value::Color(self.tint),
				},
				FieldValue {
					name: "label".to_owned(),
					value: Value::String(self.label.clone()),
				},
			],
		}
	}

	fn from_fields(value: &CompositeValue) -> Option<Self> {
		let Some(Value::Float(intensity)) = value.field("intensity") else {
			return None;
		};
		let Some(Value::Color(tint)) = value.field("tint") else {
			return None;
		};
		let Some(Value::String(label)) = value.field("label") else {
			return None;
		};
		Some(Self {
			intensity: *intensity,
			tint: *tint,
			label: label.clone(),
		})
	}
}

impl ClipboardCodec for LightProbe {
	fn write(&self) -> String {
		write_composite(&Self::schema(), &self.to_fields()).unwrap_or_default()
	}

	fn parse(text: &str) -> Result<Self> {
		let parsed = parse_composite(&Self::schema(), text)?;
		Self::from_fields(&parsed)
			.ok_or_else(|| ClipboardError::InvalidFormat { detail: "incomplete composite".to_owned() })
	}
}

#[test]
fn composite_backed_type_round_trips_through_dispatch() {
	let probe = LightProbe {
		intensity: 2.5,
		tint: Color {
			r: 0.9,
			g: 0.8,
			b: 0.7,
			a: 1.0,
		},
		label: "hallway".to_owned(),
	};
	round_trip(probe);

	let outcome = deserialize::<LightProbe>("expect parse fail");
	assert!(!outcome.success);
	assert_eq!(outcome.value, LightProbe::default());
}
