//! Demographic classification over free-text ledger descriptions.

use serde::Serialize;

use crate::{coerce, records::LedgerRecord};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Gender {
	Female,
	Male,
	Unknown,
}

impl Gender {
	pub const ALL: [Self; 3] = [Self::Female, Self::Male, Self::Unknown];

	pub fn label(&self) -> &'static str {
		match self {
			Self::Female => "Female",
			Self::Male => "Male",
			Self::Unknown => "Unknown",
		}
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum AgeCategory {
	Child,
	Adult,
	Elderly,
	Unknown,
}

impl AgeCategory {
	pub const ALL: [Self; 4] = [Self::Child, Self::Adult, Self::Elderly, Self::Unknown];

	pub fn label(&self) -> &'static str {
		match self {
			Self::Child => "Child",
			Self::Adult => "Adult",
			Self::Elderly => "Elderly",
			Self::Unknown => "Unknown",
		}
	}
}

/// Reads a gender from the free-text age/gender description.
///
/// Female tokens are checked first so "woman" never falls through to the
/// "man" substring it contains.
pub fn classify_gender(record: &LedgerRecord) -> Gender {
	let Some(description) = coerce::clean(record.enslaved_genagedesc.as_deref()) else {
		return Gender::Unknown;
	};
	let description = description.to_lowercase();

	if contains_any(&description, &["woman", "female", "girl"]) {
		Gender::Female
	} else if contains_any(&description, &["man", "male", "boy"]) {
		Gender::Male
	} else {
		Gender::Unknown
	}
}

/// Buckets a record into an age category.
///
/// A numeric age wins over the description; `enslaved_age` falls back to
/// `enslaved_decage` before the text tokens are consulted.
pub fn classify_age(record: &LedgerRecord) -> AgeCategory {
	let age = coerce::finite_non_negative(record.enslaved_age.as_deref())
		.or_else(|| coerce::finite_non_negative(record.enslaved_decage.as_deref()));

	if let Some(age) = age {
		return if age < 16. {
			AgeCategory::Child
		} else if age < 50. {
			AgeCategory::Adult
		} else {
			AgeCategory::Elderly
		};
	}

	let Some(description) = coerce::clean(record.enslaved_genagedesc.as_deref()) else {
		return AgeCategory::Unknown;
	};
	let description = description.to_lowercase();

	if contains_any(&description, &["child", "infant", "boy", "girl"]) {
		AgeCategory::Child
	} else if contains_any(&description, &["elderly", "old"]) {
		AgeCategory::Elderly
	} else if contains_any(&description, &["man", "woman", "adult"]) {
		AgeCategory::Adult
	} else {
		AgeCategory::Unknown
	}
}

fn contains_any(haystack: &str, tokens: &[&str]) -> bool {
	tokens.iter().any(|token| haystack.contains(token))
}
