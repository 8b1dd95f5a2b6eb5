//! Value formatting shared by the generic builder and custom formatters
//!
//! Numbers are truncated, never rounded: `truncate_to_n_decimal_places(1.999, 2)` is `1.99`, and
//! negative values move away from zero (`-1.005` becomes `-1.01`) because truncation floors the
//! scaled value.

use chrono::{
	NaiveDate,
	NaiveDateTime,
};
use rust_decimal::{
	prelude::ToPrimitive,
	Decimal,
	RoundingStrategy,
};

/// Vendor flag for a boolean: `"K"` (kyllä) for true, `"E"` (ei) for false.
pub fn yes_no_bool(value: bool) -> &'static str {
	if value {
		"K"
	} else {
		"E"
	}
}

/// Numbers that can be truncated to a number of decimal places.
pub trait Truncate: Copy {
	/// `floor(self * 10^n) / 10^n`
	fn truncate_to(self, n: u32) -> f64;
}

impl Truncate for f64 {
	fn truncate_to(self, n: u32) -> f64 {
		let scale = 10f64.powi(n as i32);
		(self * scale).floor() / scale
	}
}

impl Truncate for f32 {
	fn truncate_to(self, n: u32) -> f64 {
		f64::from(self).truncate_to(n)
	}
}

impl Truncate for Decimal {
	/// Floors exactly in decimal arithmetic before converting to the nearest float.
	fn truncate_to(self, n: u32) -> f64 {
		let floored = self.round_dp_with_strategy(n, RoundingStrategy::ToNegativeInfinity);
		floored
			.to_string()
			.parse()
			.unwrap_or_else(|_| floored.to_f64().unwrap_or(f64::NAN))
	}
}

macro_rules! impl_truncate_int {
	($($ty:ty),+ $(,)?) => {
		$(
			impl Truncate for $ty {
				fn truncate_to(self, n: u32) -> f64 {
					(self as f64).truncate_to(n)
				}
			}
		)+
	};
}

impl_truncate_int!(i32, i64, u32, u64);

/// Truncate float or decimal to `n` decimal places.
pub fn truncate_to_n_decimal_places<T: Truncate>(value: T, n: u32) -> f64 {
	value.truncate_to(n)
}

/// Shortest representation of a float that reads back to the same value; integral values keep
/// a trailing `.0`.
///
/// Magnitudes from `1e16` up and below `1e-4` use exponent notation with a signed, at least two
/// digit exponent (`1e+16`, `1.5e-05`).
pub fn format_float(value: f64) -> String {
	let magnitude = value.abs();
	if value.is_finite() && magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
		let s = format!("{:e}", value);
		if let Some((mantissa, exponent)) = s.split_once('e') {
			let (sign, digits) = match exponent.strip_prefix('-') {
				Some(digits) => ('-', digits),
				None => ('+', exponent),
			};
			return format!("{}e{}{:0>2}", mantissa, sign, digits);
		}
	}
	let mut s = value.to_string();
	if value.is_finite() && !s.contains('.') {
		s.push_str(".0");
	}
	s
}

/// Truncate to `n` places and format with [`format_float`]: `123.4567` -> `"123.45"`, `5` ->
/// `"5.0"`.
pub fn format_truncated<T: Truncate>(value: T, n: u32) -> String {
	format_float(value.truncate_to(n))
}

/// Truncate to `n` places and format with exactly `n` decimals: `123.4` -> `"123.40"`.
pub fn format_fixed<T: Truncate>(value: T, n: u32) -> String {
	format!("{:.*}", n as usize, value.truncate_to(n))
}

/// `DD.MM.YYYY`
pub fn format_date(value: &NaiveDate) -> String {
	value.format("%d.%m.%Y").to_string()
}

/// `YYYY-MM-DDTHH:MM:SS`
pub fn format_datetime(value: &NaiveDateTime) -> String {
	value.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// `YYYYMMDDHHMMSS`
pub fn format_timestamp(value: &NaiveDateTime) -> String {
	value.format("%Y%m%d%H%M%S").to_string()
}

/// First `n` characters (not bytes) of `value`.
pub fn truncate_chars(value: &str, n: usize) -> &str {
	match value.char_indices().nth(n) {
		Some((idx, _)) => &value[..idx],
		None => value,
	}
}
