//! Record-to-row normalization.
//!
//! Each archival record names two parties. Search and export operate on
//! per-party rows, so every record fans out into exactly two rows that share a
//! back-reference to the record they came from.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
	coerce,
	records::{DeedRecord, LedgerRecord},
};

/// Which archive a row was normalized from.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordSource {
	Deeds,
	Ledger,
}

impl RecordSource {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Deeds => "deeds",
			Self::Ledger => "ledger",
		}
	}
}

/// The record a row was derived from.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum RawRecord {
	Deed(Arc<DeedRecord>),
	Ledger(Arc<LedgerRecord>),
}

impl RawRecord {
	/// Every present text value of the underlying record.
	pub fn text_fields(&self) -> Vec<&str> {
		match self {
			Self::Deed(record) => record.text_fields().collect(),
			Self::Ledger(record) => record.text_fields().collect(),
		}
	}
}

/// One party of one archival record, flattened for search and display.
#[derive(Clone, Debug, Serialize)]
pub struct NormalizedRow {
	/// Stable per-snapshot identifier, e.g. `deed-s-42` or `ledger-i-7`.
	pub id: String,
	pub source: RecordSource,
	pub person_name: String,
	pub person_role: String,
	pub date: Option<String>,
	pub location: Option<String>,
	pub transaction_type: Option<String>,
	pub details: Option<String>,
	pub original: RawRecord,
}

impl NormalizedRow {
	/// Keyed column accessor used by sorting, structured filters, and export.
	pub fn field(&self, field: RowField) -> Option<&str> {
		match field {
			RowField::Id => Some(self.id.as_str()),
			RowField::Source => Some(self.source.as_str()),
			RowField::PersonName => Some(self.person_name.as_str()),
			RowField::PersonRole => Some(self.person_role.as_str()),
			RowField::Date => self.date.as_deref(),
			RowField::Location => self.location.as_deref(),
			RowField::TransactionType => self.transaction_type.as_deref(),
			RowField::Details => self.details.as_deref(),
		}
	}
}

/// The eight normalized columns of a [`NormalizedRow`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowField {
	Id,
	Source,
	PersonName,
	PersonRole,
	Date,
	Location,
	TransactionType,
	Details,
}

impl RowField {
	pub const ALL: [Self; 8] = [
		Self::Id,
		Self::Source,
		Self::PersonName,
		Self::PersonRole,
		Self::Date,
		Self::Location,
		Self::TransactionType,
		Self::Details,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Id => "id",
			Self::Source => "source",
			Self::PersonName => "person_name",
			Self::PersonRole => "person_role",
			Self::Date => "date",
			Self::Location => "location",
			Self::TransactionType => "transaction_type",
			Self::Details => "details",
		}
	}
}

/// Fans a deed record out into its seller row and buyer row.
pub fn normalize_deed(record: &Arc<DeedRecord>, index: usize) -> [NormalizedRow; 2] {
	let date = coerce::clean(record.deed_date.as_deref()).map(str::to_string);
	// Both parties share the recording jurisdiction, not their home counties.
	let location = join_location(record.deed_county.as_deref(), record.deed_state.as_deref());
	let transaction_type = Some("Deed/Sale".to_string());
	let details = coerce::clean(record.notes.as_deref()).map(str::to_string);
	let seller = NormalizedRow {
		id: format!("deed-s-{index}"),
		source: RecordSource::Deeds,
		person_name: coerce::full_name(
			record.seller_firstname.as_deref(),
			record.seller_lastname.as_deref(),
		)
		.unwrap_or_else(|| "Unknown Seller".to_string()),
		person_role: "Seller".to_string(),
		date: date.clone(),
		location: location.clone(),
		transaction_type: transaction_type.clone(),
		details: details.clone(),
		original: RawRecord::Deed(record.clone()),
	};
	let buyer = NormalizedRow {
		id: format!("deed-b-{index}"),
		source: RecordSource::Deeds,
		person_name: coerce::full_name(
			record.buyer_firstname.as_deref(),
			record.buyer_lastname.as_deref(),
		)
		.unwrap_or_else(|| "Unknown Buyer".to_string()),
		person_role: "Buyer".to_string(),
		date,
		location,
		transaction_type,
		details,
		original: RawRecord::Deed(record.clone()),
	};

	[seller, buyer]
}

/// Fans a ledger record out into its enslaved-person row and enslaver row.
pub fn normalize_ledger(record: &Arc<LedgerRecord>, index: usize) -> [NormalizedRow; 2] {
	let date = coerce::clean(record.trans_record_date.as_deref()).map(str::to_string);
	let location = coerce::clean(record.trans_loc.as_deref()).map(str::to_string);
	let transaction_type = coerce::clean(record.trans_type.as_deref()).map(str::to_string);
	let individual = NormalizedRow {
		id: format!("ledger-i-{index}"),
		source: RecordSource::Ledger,
		person_name: coerce::clean(record.enslaved_name.as_deref())
			.map_or_else(|| "Unknown".to_string(), str::to_string),
		person_role: coerce::clean(record.enslaved_transrole.as_deref())
			.map_or_else(|| "Enslaved".to_string(), str::to_string),
		date: date.clone(),
		location: location.clone(),
		transaction_type: transaction_type.clone(),
		details: None,
		original: RawRecord::Ledger(record.clone()),
	};
	let enslaver = NormalizedRow {
		id: format!("ledger-e-{index}"),
		source: RecordSource::Ledger,
		person_name: coerce::clean(record.enslaver1_name.as_deref())
			.map_or_else(|| "Unknown Enslaver".to_string(), str::to_string),
		person_role: "Enslaver".to_string(),
		date,
		location,
		transaction_type,
		details: None,
		original: RawRecord::Ledger(record.clone()),
	};

	[individual, enslaver]
}

fn join_location(county: Option<&str>, state: Option<&str>) -> Option<String> {
	match (coerce::clean(county), coerce::clean(state)) {
		(Some(county), Some(state)) => Some(format!("{county}, {state}")),
		(Some(part), None) | (None, Some(part)) => Some(part.to_string()),
		(None, None) => None,
	}
}
