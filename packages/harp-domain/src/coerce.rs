//! Total coercion helpers for hand-transcribed archival values.
//!
//! Every function here accepts whatever a row actually contains and produces a
//! usable value or a well-defined fallback. None of them panic.

use time::{Date, Month};

/// Parses the leading numeric prefix of a value as a monetary amount.
///
/// Transcribed amounts carry trailing annotations ("450 dollars", "12.5 acres")
/// that must not poison a sum. Missing, unparseable, negative, and non-finite
/// values all coerce to zero.
pub fn finite_or_zero(value: Option<&str>) -> f64 {
	let Some(amount) = numeric_prefix(value) else {
		return 0.;
	};

	if amount.is_finite() && amount > 0. { amount } else { 0. }
}

/// Like [`finite_or_zero`], but keeps absence observable.
///
/// Age classification needs to distinguish "no usable number" from an actual
/// zero, so this returns `None` instead of a fallback.
pub fn finite_non_negative(value: Option<&str>) -> Option<f64> {
	let amount = numeric_prefix(value)?;

	(amount.is_finite() && amount >= 0.).then_some(amount)
}

fn numeric_prefix(value: Option<&str>) -> Option<f64> {
	let value = value?.trim();
	let bytes = value.as_bytes();
	let mut end = 0;
	let mut seen_digit = false;
	let mut seen_dot = false;

	if matches!(bytes.first(), Some(b'+' | b'-')) {
		end = 1;
	}

	while let Some(byte) = bytes.get(end) {
		match byte {
			b'0'..=b'9' => seen_digit = true,
			b'.' if !seen_dot => seen_dot = true,
			_ => break,
		}

		end += 1;
	}

	if !seen_digit {
		return None;
	}

	// An exponent only counts when at least one digit follows it, so "1e"
	// still reads as 1.
	if matches!(bytes.get(end), Some(b'e' | b'E')) {
		let mut exponent_end = end + 1;

		if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
			exponent_end += 1;
		}

		if matches!(bytes.get(exponent_end), Some(b'0'..=b'9')) {
			while matches!(bytes.get(exponent_end), Some(b'0'..=b'9')) {
				exponent_end += 1;
			}

			end = exponent_end;
		}
	}

	value[..end].parse().ok()
}

/// Trims a value and drops empty and literal-"null" placeholders.
pub fn clean(value: Option<&str>) -> Option<&str> {
	let value = value?.trim();

	(!value.is_empty() && !value.eq_ignore_ascii_case("null")).then_some(value)
}

/// Joins optional given and family names into one display name.
///
/// Returns `None` when both parts are missing so callers can apply their own
/// role-specific fallback label.
pub fn full_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
	match (clean(first), clean(last)) {
		(Some(first), Some(last)) => Some(format!("{first} {last}")),
		(Some(part), None) | (None, Some(part)) => Some(part.to_string()),
		(None, None) => None,
	}
}

/// Parses a transcribed date.
///
/// The archives mix `YYYY-MM-DD`, `M/D/YYYY`, `YYYY/MM`, and bare `YYYY`
/// forms. A component group whose first segment is four digits is read as
/// year-first; otherwise month-first. Anything that does not resolve to a real
/// calendar date is `None`.
pub fn parse_date(value: Option<&str>) -> Option<Date> {
	let value = clean(value)?;
	let parts = value.split(['-', '/']).map(str::trim).collect::<Vec<_>>();
	let (year, month, day) = match parts.as_slice() {
		[y] => (parse_year(y)?, 1, 1),
		[y, m] if is_year(y) => (parse_year(y)?, parse_component(m)?, 1),
		[y, m, d] if is_year(y) => (parse_year(y)?, parse_component(m)?, parse_component(d)?),
		[m, d, y] if is_year(y) => (parse_year(y)?, parse_component(m)?, parse_component(d)?),
		_ => return None,
	};
	let month = Month::try_from(month).ok()?;

	Date::from_calendar_date(year, month, day).ok()
}

/// The calendar year of a transcribed date, when one can be read at all.
pub fn year_of(value: Option<&str>) -> Option<i32> {
	parse_date(value).map(|date| date.year())
}

fn is_year(segment: &str) -> bool {
	segment.len() == 4 && segment.bytes().all(|b| b.is_ascii_digit())
}

fn parse_year(segment: &str) -> Option<i32> {
	is_year(segment).then(|| segment.parse().ok()).flatten()
}

fn parse_component(segment: &str) -> Option<u8> {
	if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}

	segment.parse().ok()
}
