//! The unified filter/sort/paginate pipeline.
//!
//! Stage order is fixed: scope, sort, text search, structured filters,
//! pagination. Every stage is pure over the snapshot's row list.

use serde::Serialize;

use harp_domain::{NormalizedRow, RowField, coerce};

use crate::state::{RoleFilter, SearchColumn, SearchScope, SearchState, SortDirection};

#[derive(Clone, Debug, Serialize)]
pub struct SearchPage {
	pub items: Vec<NormalizedRow>,
	pub total_matches: usize,
	pub total_pages: usize,
}

pub fn run_search(rows: &[NormalizedRow], state: &SearchState) -> SearchPage {
	let matches = run_filters(rows, state);
	let total_matches = matches.len();
	let per_page = state.per_page.max(1);
	let total_pages = total_matches.div_ceil(per_page);
	let page = state.page.clamp(1, total_pages.max(1));
	let start = (page - 1) * per_page;
	let end = (start + per_page).min(total_matches);
	let items = if start < total_matches {
		matches[start..end].iter().map(|row| (*row).clone()).collect()
	} else {
		Vec::new()
	};

	SearchPage { items, total_matches, total_pages }
}

/// The pipeline minus pagination. Export runs on this full set.
pub fn run_filters<'a>(rows: &'a [NormalizedRow], state: &SearchState) -> Vec<&'a NormalizedRow> {
	let mut matches = rows
		.iter()
		.filter(|row| state.scope.admits(row.source))
		.collect::<Vec<_>>();

	if let Some(sort) = &state.sort {
		match sort.direction {
			SortDirection::Ascending => {
				matches.sort_by(|a, b| a.field(sort.field).cmp(&b.field(sort.field)));
			},
			SortDirection::Descending => {
				matches.sort_by(|a, b| b.field(sort.field).cmp(&a.field(sort.field)));
			},
		}
	}

	matches.retain(|row| matches_term(row, state) && matches_filters(row, state));

	matches
}

fn matches_term(row: &NormalizedRow, state: &SearchState) -> bool {
	let term = state.term.trim().to_lowercase();

	if term.is_empty() {
		return true;
	}

	match state.column {
		SearchColumn::All => {
			RowField::ALL.iter().any(|field| contains(row.field(*field), &term))
				|| row.original.text_fields().into_iter().any(|value| contains(Some(value), &term))
		},
		SearchColumn::Field(field) => contains(row.field(field), &term),
	}
}

fn matches_filters(row: &NormalizedRow, state: &SearchState) -> bool {
	let filters = &state.filters;

	if !filters.source.admits(row.source) {
		return false;
	}
	if !filters.role.admits(&row.person_role) {
		return false;
	}
	if !substring_filter(&filters.location, row.location.as_deref()) {
		return false;
	}
	if !substring_filter(&filters.person_name, Some(&row.person_name)) {
		return false;
	}
	if !substring_filter(&filters.transaction_type, row.transaction_type.as_deref()) {
		return false;
	}

	matches_date_range(row, state)
}

fn matches_date_range(row: &NormalizedRow, state: &SearchState) -> bool {
	let start = coerce::parse_date(Some(state.filters.date_start.as_str()));
	let end = coerce::parse_date(Some(state.filters.date_end.as_str()));

	if start.is_none() && end.is_none() {
		return true;
	}

	// A row whose own date does not parse passes active bounds.
	let Some(date) = coerce::parse_date(row.date.as_deref()) else {
		return true;
	};

	if let Some(start) = start
		&& date < start
	{
		return false;
	}
	if let Some(end) = end
		&& date > end
	{
		return false;
	}

	true
}

impl SearchScope {
	pub fn admits(&self, source: harp_domain::RecordSource) -> bool {
		match self {
			Self::All => true,
			Self::Deeds => source == harp_domain::RecordSource::Deeds,
			Self::Ledger => source == harp_domain::RecordSource::Ledger,
		}
	}
}

fn contains(value: Option<&str>, term: &str) -> bool {
	value.is_some_and(|value| value.to_lowercase().contains(term))
}

fn substring_filter(filter: &str, value: Option<&str>) -> bool {
	let filter = filter.trim();

	if filter.is_empty() {
		return true;
	}

	contains(value, &filter.to_lowercase())
}
