use harp_domain::RowField;
use harp_service::{Action, Filters, RoleFilter, SearchColumn, SearchScope, SearchState, SortDirection};
use harp_testkit::test_config;
use time::OffsetDateTime;

fn state() -> SearchState {
	SearchState::new(&test_config().search)
}

fn now() -> OffsetDateTime {
	OffsetDateTime::UNIX_EPOCH
}

#[test]
fn submitting_a_search_resets_the_page_and_records_history() {
	let state = state().with_total_pages(5).apply(Action::GoToPage { page: 4 }, now());

	assert_eq!(state.page, 4);

	let state = state.apply(
		Action::SubmitSearch {
			term: "harris".to_string(),
			column: SearchColumn::Field(RowField::PersonName),
		},
		now(),
	);

	assert_eq!(state.page, 1);
	assert_eq!(state.history.len(), 1);
	assert_eq!(state.history[0].term, "harris");
}

#[test]
fn blank_terms_never_enter_history() {
	let state = state().apply(
		Action::SubmitSearch { term: "   ".to_string(), column: SearchColumn::All },
		now(),
	);

	assert!(state.history.is_empty());
}

#[test]
fn history_keeps_the_ten_most_recent() {
	let mut state = state();

	for i in 0..11 {
		state = state.apply(
			Action::SubmitSearch { term: format!("term-{i}"), column: SearchColumn::All },
			now(),
		);
	}

	assert_eq!(state.history.len(), 10);
	assert_eq!(state.history[0].term, "term-10");
	assert_eq!(state.history[9].term, "term-1");
}

#[test]
fn global_search_forces_all_columns_and_scope() {
	let mut state = state();

	state.scope = SearchScope::Deeds;
	state.column = SearchColumn::Field(RowField::Location);

	let state = state.apply(Action::GlobalSearch { term: "phillis".to_string() }, now());

	assert_eq!(state.scope, SearchScope::All);
	assert_eq!(state.column, SearchColumn::All);
	assert_eq!(state.history.len(), 1);
}

#[test]
fn sort_toggles_on_the_same_field() {
	let state = state().apply(Action::SetSort { field: RowField::Date }, now());
	let sort = state.sort.expect("sort set");

	assert_eq!(sort.direction, SortDirection::Ascending);

	let state = state.apply(Action::SetSort { field: RowField::Date }, now());

	assert_eq!(state.sort.expect("sort set").direction, SortDirection::Descending);

	let state = state.apply(Action::SetSort { field: RowField::PersonName }, now());
	let sort = state.sort.expect("sort set");

	assert_eq!(sort.field, RowField::PersonName);
	assert_eq!(sort.direction, SortDirection::Ascending);
}

#[test]
fn sorting_does_not_reset_the_page() {
	let state = state()
		.with_total_pages(3)
		.apply(Action::GoToPage { page: 2 }, now())
		.apply(Action::SetSort { field: RowField::Date }, now());

	assert_eq!(state.page, 2);
}

#[test]
fn navigation_clamps_to_the_known_page_range() {
	let state = state().with_total_pages(3);
	let state = state.apply(Action::GoToPage { page: 9 }, now());

	assert_eq!(state.page, 3);

	let state = state.apply(Action::NextPage, now());

	assert_eq!(state.page, 3);

	let state = state.apply(Action::FirstPage, now()).apply(Action::PrevPage, now());

	assert_eq!(state.page, 1);

	let state = state.apply(Action::LastPage, now());

	assert_eq!(state.page, 3);
}

#[test]
fn zero_results_still_leave_one_page() {
	let state = state().with_total_pages(0).apply(Action::NextPage, now());

	assert_eq!(state.page, 1);
}

#[test]
fn per_page_is_clamped_to_the_configured_maximum() {
	let state = state().apply(Action::SetPerPage { per_page: 10_000 }, now());

	assert_eq!(state.per_page, 100);

	let state = state.apply(Action::SetPerPage { per_page: 0 }, now());

	assert_eq!(state.per_page, 1);
}

#[test]
fn applying_and_resetting_filters_returns_to_page_one() {
	let filters = Filters {
		role: RoleFilter::Buyer,
		location: "Bibb".to_string(),
		..Default::default()
	};
	let state = state()
		.with_total_pages(4)
		.apply(Action::GoToPage { page: 3 }, now())
		.apply(Action::ApplyFilters { filters: filters.clone() }, now());

	assert_eq!(state.filters, filters);
	assert_eq!(state.page, 1);

	let state = state
		.with_total_pages(4)
		.apply(Action::GoToPage { page: 2 }, now())
		.apply(Action::ResetFilters, now());

	assert_eq!(state.filters, Filters::default());
	assert_eq!(state.page, 1);
}

#[test]
fn switching_scope_resets_the_page() {
	let state = state()
		.with_total_pages(4)
		.apply(Action::GoToPage { page: 3 }, now())
		.apply(Action::SetScope { scope: SearchScope::Ledger }, now());

	assert_eq!(state.scope, SearchScope::Ledger);
	assert_eq!(state.page, 1);
}

#[test]
fn history_entries_can_be_reapplied_and_removed() {
	let state = state()
		.apply(Action::SubmitSearch { term: "first".to_string(), column: SearchColumn::All }, now())
		.apply(
			Action::SubmitSearch {
				term: "second".to_string(),
				column: SearchColumn::Field(RowField::Location),
			},
			now(),
		);

	// Index 1 is the older search.
	let state = state.apply(Action::ApplyHistoryEntry { index: 1 }, now());

	assert_eq!(state.term, "first");
	assert_eq!(state.column, SearchColumn::All);

	let state = state.apply(Action::RemoveHistoryEntry { index: 0 }, now());

	assert_eq!(state.history.len(), 1);
	assert_eq!(state.history[0].term, "first");

	let state = state.apply(Action::ClearHistory, now());

	assert!(state.history.is_empty());
}
