#![allow(missing_docs)]

use clipcodec::clipboard::{
	Color, Gradient, GradientAlphaKey, GradientColorKey, GradientMode, deserialize, parse_gradient, serialize,
	write_gradient,
};

fn two_stop_gradient() -> Gradient {
	Gradient {
		mode: GradientMode::Fixed,
		color_keys: vec![
			GradientColorKey {
				time: 0.0,
				color: Color {
					r: 1.0,
					g: 0.0,
					b: 0.0,
					a: 1.0,
				},
			},
			GradientColorKey {
				time: 1.0,
				color: Color {
					r: 0.0,
					g: 0.0,
					b: 1.0,
					a: 1.0,
				},
			},
		],
		alpha_keys: vec![
			GradientAlphaKey { time: 0.0, alpha: 1.0 },
			GradientAlphaKey { time: 0.5, alpha: 0.25 },
			GradientAlphaKey { time: 1.0, alpha: 0.0 },
		],
	}
}

#[test]
fn gradient_round_trips_mode_and_key_order() {
	let gradient = two_stop_gradient();
	let text = write_gradient(&gradient);
	assert!(text.starts_with("Gradient:"), "unexpected prefix in {text}");

	let parsed = parse_gradient(&text).expect("written gradient parses");
	assert_eq!(parsed, gradient);
}

#[test]
fn default_gradient_round_trips_through_dispatch() {
	let gradient = Gradient::default();
	let outcome = deserialize::<Gradient>(&serialize(&gradient));
	assert!(outcome.success);
	assert_eq!(outcome.value, gradient);
}

#[test]
fn write_is_deterministic() {
	let gradient = two_stop_gradient();
	assert_eq!(write_gradient(&gradient), write_gradient(&gradient));
}

#[test]
fn mode_variants_survive_round_trip() {
	for mode in [GradientMode::Blend, GradientMode::Fixed, GradientMode::PerceptualBlend] {
		let gradient = Gradient {
			mode,
			..Gradient::default()
		};
		let parsed = parse_gradient(&write_gradient(&gradient)).expect("gradient parses");
		assert_eq!(parsed.mode, mode);
	}
}

#[test]
fn malformed_gradient_text_fails() {
	for text in [
		"",
		"Gradient:",
		"Gradient:{}",
		"Gradient:[]",
		"NotGradient:{\"mode\":0,\"colorKeys\":[],\"alphaKeys\":[]}",
		"expect parse fail",
	] {
		assert!(parse_gradient(text).is_err(), "{text:?} should fail");
	}
}

#[test]
fn unknown_mode_ordinal_fails() {
	let text = "Gradient:{\"mode\":9,\"colorKeys\":[{\"time\":0.0,\"color\":[1.0,1.0,1.0,1.0]}],\"alphaKeys\":[{\"time\":0.0,\"alpha\":1.0}]}";
	assert!(parse_gradient(text).is_err());
}

#[test]
fn unknown_wire_fields_fail() {
	let text = "Gradient:{\"mode\":0,\"colorKeys\":[{\"time\":0.0,\"color\":[1.0,1.0,1.0,1.0]}],\"alphaKeys\":[{\"time\":0.0,\"alpha\":1.0}],\"extra\":0}";
	assert!(parse_gradient(text).is_err());
}

#[test]
fn key_time_outside_unit_range_fails() {
	let mut gradient = Gradient::default();
	gradient.alpha_keys[1].time = 1.5;
	assert!(parse_gradient(&write_gradient(&gradient)).is_err());

	let mut gradient = Gradient::default();
	gradient.color_keys[0].time = -0.25;
	assert!(parse_gradient(&write_gradient(&gradient)).is_err());
}

#[test]
fn key_count_outside_host_cap_fails() {
	let gradient = Gradient {
		alpha_keys: Vec::new(),
		..Gradient::default()
	};
	assert!(parse_gradient(&write_gradient(&gradient)).is_err());

	let gradient = Gradient {
		alpha_keys: (0..9)
			.map(|idx| GradientAlphaKey {
				time: idx as f32 / 8.0,
				alpha: 1.0,
			})
			.collect(),
		..Gradient::default()
	};
	assert!(parse_gradient(&write_gradient(&gradient)).is_err());
}

#[test]
fn failed_parse_yields_default_through_dispatch() {
	let outcome = deserialize::<Gradient>("Gradient:{}");
	assert!(!outcome.success);
	assert_eq!(outcome.value, Gradient::default());
}
