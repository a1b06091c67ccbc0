use crate::clipboard::{ClipboardError, Result};

const NAN_LITERAL: &str = "NaN";
const INFINITY_LITERAL: &str = "Infinity";
const NEGATIVE_INFINITY_LITERAL: &str = "-Infinity";

/// Render a float in the host's locale-independent general format.
///
/// Emits the shortest round-trippable digits: fixed-point while the decimal
/// exponent stays in `[-4, 6]`, otherwise scientific notation with a lowercase
/// `e`, explicit exponent sign, and a two-digit minimum exponent (`1e+32`).
/// Specials render as `NaN`, `Infinity`, and `-Infinity`.
pub fn write_float(value: f32) -> String {
	if value.is_nan() {
		return NAN_LITERAL.to_owned();
	}
	if value.is_infinite() {
		return if value.is_sign_positive() {
			INFINITY_LITERAL.to_owned()
		} else {
			NEGATIVE_INFINITY_LITERAL.to_owned()
		};
	}

	let shortest = format!("{value:e}");
	let Some((mantissa, exponent_text)) = shortest.split_once('e') else {
		return shortest;
	};
	let exponent = exponent_text.parse::<i32>().unwrap_or(0);

	let (negative, mantissa) = match mantissa.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, mantissa),
	};
	let digits: String = mantissa.chars().filter(|ch| *ch != '.').collect();

	let body = if (-4..=6).contains(&exponent) {
		render_fixed(&digits, exponent)
	} else {
		render_scientific(&digits, exponent)
	};

	if negative { format!("-{body}") } else { body }
}

/// Parse locale-independent float text.
///
/// Accepts an optional sign, digits with at most one `.`, and an optional
/// `e`/`E` exponent; the special literals `NaN` and `Infinity` match
/// case-insensitively with an optional leading sign. Magnitudes beyond the
/// 32-bit float range saturate to signed infinity.
pub fn parse_float(text: &str) -> Result<f32> {
	if text.is_empty() {
		return Err(ClipboardError::EmptyInput);
	}
	if let Some(special) = parse_special(text) {
		return Ok(special);
	}
	if !is_numeric_shape(text) {
		return Err(ClipboardError::InvalidNumeric { token: text.to_owned() });
	}

	text.parse::<f32>().map_err(|_| ClipboardError::InvalidNumeric { token: text.to_owned() })
}

fn render_fixed(digits: &str, exponent: i32) -> String {
	let count = digits.len() as i32;
	let point = exponent + 1;

	if point >= count {
		let mut out = String::with_capacity(point as usize);
		out.push_str(digits);
		for _ in count..point {
			out.push('0');
		}
		out
	} else if point <= 0 {
		let mut out = String::from("0.");
		for _ in point..0 {
			out.push('0');
		}
		out.push_str(digits);
		out
	} else {
		let split = point as usize;
		format!("{}.{}", &digits[..split], &digits[split..])
	}
}

fn render_scientific(digits: &str, exponent: i32) -> String {
	let mantissa = if digits.len() > 1 {
		format!("{}.{}", &digits[..1], &digits[1..])
	} else {
		digits.to_owned()
	};
	let sign = if exponent < 0 { '-' } else { '+' };
	let magnitude = exponent.abs();
	format!("{mantissa}e{sign}{magnitude:02}")
}

fn parse_special(text: &str) -> Option<f32> {
	let (negative, body) = match text.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, text.strip_prefix('+').unwrap_or(text)),
	};

	if body.eq_ignore_ascii_case("nan") {
		return Some(f32::NAN);
	}
	if body.eq_ignore_ascii_case("infinity") {
		return Some(if negative { f32::NEG_INFINITY } else { f32::INFINITY });
	}
	None
}

fn is_numeric_shape(text: &str) -> bool {
	let bytes = text.as_bytes();
	let mut idx = 0_usize;

	if matches!(bytes.first(), Some(b'+' | b'-')) {
		idx += 1;
	}

	let mut mantissa_digits = 0_usize;
	let mut seen_point = false;
	while idx < bytes.len() {
		match bytes[idx] {
			b'0'..=b'9' => {
				mantissa_digits += 1;
				idx += 1;
			}
			b'.' if !seen_point => {
				seen_point = true;
				idx += 1;
			}
			_ => break,
		}
	}
	if mantissa_digits == 0 {
		return false;
	}
	if idx == bytes.len() {
		return true;
	}

	if bytes[idx] != b'e' && bytes[idx] != b'E' {
		return false;
	}
	idx += 1;
	if matches!(bytes.get(idx), Some(b'+' | b'-')) {
		idx += 1;
	}

	let exponent_start = idx;
	while idx < bytes.len() && bytes[idx].is_ascii_digit() {
		idx += 1;
	}
	idx > exponent_start && idx == bytes.len()
}
