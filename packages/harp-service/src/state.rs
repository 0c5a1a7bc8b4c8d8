//! Search state and its reducer.
//!
//! Every user interaction is an [`Action`]; `apply` is a pure transition so
//! the whole interaction model is testable without a UI.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use harp_domain::RowField;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
	#[default]
	All,
	Deeds,
	Ledger,
}

/// Which column a text search runs against.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SearchColumn {
	#[default]
	All,
	Field(RowField),
}

impl Serialize for SearchColumn {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		match self {
			Self::All => serializer.serialize_str("all"),
			Self::Field(field) => serializer.serialize_str(field.as_str()),
		}
	}
}

impl<'de> Deserialize<'de> for SearchColumn {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;

		if value == "all" {
			return Ok(Self::All);
		}

		let field = RowField::ALL
			.into_iter()
			.find(|field| field.as_str() == value)
			.ok_or_else(|| serde::de::Error::custom(format!("unknown column `{value}`")))?;

		Ok(Self::Field(field))
	}
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleFilter {
	#[default]
	All,
	Enslaved,
	Seller,
	Buyer,
	Enslaver,
}

impl RoleFilter {
	pub fn admits(&self, role: &str) -> bool {
		match self {
			Self::All => true,
			Self::Enslaved => role == "Enslaved",
			Self::Seller => role == "Seller",
			Self::Buyer => role == "Buyer",
			Self::Enslaver => role == "Enslaver",
		}
	}
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	Ascending,
	Descending,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SortSpec {
	pub field: RowField,
	pub direction: SortDirection,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Filters {
	pub source: SearchScope,
	pub role: RoleFilter,
	pub location: String,
	pub person_name: String,
	pub transaction_type: String,
	pub date_start: String,
	pub date_end: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct HistoryEntry {
	pub term: String,
	pub column: SearchColumn,
	#[serde(with = "time::serde::rfc3339")]
	pub timestamp: OffsetDateTime,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SearchState {
	pub term: String,
	pub column: SearchColumn,
	pub scope: SearchScope,
	pub filters: Filters,
	pub sort: Option<SortSpec>,
	pub page: usize,
	pub per_page: usize,
	pub total_pages: usize,
	pub history: Vec<HistoryEntry>,
	pub history_capacity: usize,
	pub max_page_size: usize,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum Action {
	SubmitSearch { term: String, column: SearchColumn },
	GlobalSearch { term: String },
	ApplyFilters { filters: Filters },
	ResetFilters,
	SetScope { scope: SearchScope },
	SetPerPage { per_page: usize },
	SetSort { field: RowField },
	GoToPage { page: usize },
	FirstPage,
	PrevPage,
	NextPage,
	LastPage,
	ApplyHistoryEntry { index: usize },
	RemoveHistoryEntry { index: usize },
	ClearHistory,
}

impl SearchState {
	pub fn new(cfg: &harp_config::Search) -> Self {
		Self {
			term: String::new(),
			column: SearchColumn::All,
			scope: SearchScope::All,
			filters: Filters::default(),
			sort: None,
			page: 1,
			per_page: cfg.default_page_size,
			total_pages: 0,
			history: Vec::new(),
			history_capacity: cfg.history_capacity,
			max_page_size: cfg.max_page_size,
		}
	}

	/// Records the engine's latest page count, the clamp target for
	/// navigation actions.
	pub fn with_total_pages(mut self, total_pages: usize) -> Self {
		self.total_pages = total_pages;
		self
	}

	pub fn apply(mut self, action: Action, now: OffsetDateTime) -> Self {
		match action {
			Action::SubmitSearch { term, column } => {
				self.remember(&term, column, now);
				self.term = term;
				self.column = column;
				self.page = 1;
			},
			Action::GlobalSearch { term } => {
				self.remember(&term, SearchColumn::All, now);
				self.term = term;
				self.column = SearchColumn::All;
				self.scope = SearchScope::All;
				self.page = 1;
			},
			Action::ApplyFilters { filters } => {
				self.filters = filters;
				self.page = 1;
			},
			Action::ResetFilters => {
				self.filters = Filters::default();
				self.page = 1;
			},
			Action::SetScope { scope } => {
				self.scope = scope;
				self.page = 1;
			},
			Action::SetPerPage { per_page } => {
				self.per_page = per_page.clamp(1, self.max_page_size);
				self.page = 1;
			},
			Action::SetSort { field } => {
				let direction = match self.sort {
					Some(sort)
						if sort.field == field && sort.direction == SortDirection::Ascending =>
					{
						SortDirection::Descending
					},
					_ => SortDirection::Ascending,
				};

				self.sort = Some(SortSpec { field, direction });
			},
			Action::GoToPage { page } => self.page = self.clamp_page(page),
			Action::FirstPage => self.page = 1,
			Action::PrevPage => self.page = self.clamp_page(self.page.saturating_sub(1)),
			Action::NextPage => self.page = self.clamp_page(self.page + 1),
			Action::LastPage => self.page = self.total_pages.max(1),
			Action::ApplyHistoryEntry { index } => {
				if let Some(entry) = self.history.get(index) {
					self.term = entry.term.clone();
					self.column = entry.column;
					self.page = 1;
				}
			},
			Action::RemoveHistoryEntry { index } => {
				if index < self.history.len() {
					self.history.remove(index);
				}
			},
			Action::ClearHistory => self.history.clear(),
		}

		self
	}

	fn clamp_page(&self, page: usize) -> usize {
		page.clamp(1, self.total_pages.max(1))
	}

	/// Prepends a non-blank term to history and trims to capacity,
	/// most-recent-first.
	fn remember(&mut self, term: &str, column: SearchColumn, now: OffsetDateTime) {
		if term.trim().is_empty() {
			return;
		}

		self.history.insert(0, HistoryEntry { term: term.to_string(), column, timestamp: now });
		self.history.truncate(self.history_capacity);
	}
}
