use harp_domain::{NormalizedRow, RowField};
use harp_service::{
	Filters, RoleFilter, SearchColumn, SearchScope, SearchState, Snapshot, SortDirection, SortSpec,
	run_search,
};
use harp_testkit::{DeedFixture, LedgerFixture, test_config};

fn snapshot() -> Vec<NormalizedRow> {
	let deeds = vec![
		DeedFixture::new()
			.seller("John", "Harris")
			.seller_location("Bibb", "AL")
			.buyer("Eli", "Pratt")
			.buyer_location("Troup", "GA")
			.county("Harris")
			.date("1845-06-01")
			.build(),
		DeedFixture::new()
			.seller("Mary", "Calhoun")
			.buyer("Ann", "Cole")
			.county("Troup")
			.date("1850-02-10")
			.notes("lot adjoins the Harris plantation")
			.build(),
	];
	let ledger = vec![
		LedgerFixture::new()
			.name("Phillis")
			.enslaver("J. Whitfield")
			.location("Harrisburg")
			.transaction("Sale", "400")
			.recorded("1852-01-09")
			.build(),
	];

	Snapshot::build(deeds, ledger).rows
}

fn state() -> SearchState {
	SearchState::new(&test_config().search)
}

#[test]
fn scope_restricts_to_one_archive() {
	let rows = snapshot();
	let mut state = state();

	state.scope = SearchScope::Ledger;

	let page = run_search(&rows, &state);

	assert_eq!(page.total_matches, 2);
	assert!(page.items.iter().all(|row| row.source == harp_domain::RecordSource::Ledger));
}

#[test]
fn all_column_search_reaches_the_original_record() {
	let rows = snapshot();
	let mut state = state();

	// "plantation" only appears in a deed's notes.
	state.term = "PLANTATION".to_string();

	let page = run_search(&rows, &state);

	assert_eq!(page.total_matches, 2);
	assert!(page.items.iter().all(|row| row.id.ends_with("-1")));
}

#[test]
fn column_search_ignores_other_fields() {
	let rows = snapshot();
	let mut state = state();

	state.term = "harris".to_string();
	state.column = SearchColumn::Field(RowField::PersonName);

	let page = run_search(&rows, &state);

	assert_eq!(page.total_matches, 1);
	assert_eq!(page.items[0].person_name, "John Harris");
}

#[test]
fn structured_filters_are_conjunctive() {
	let rows = snapshot();
	let mut state = state();

	// "harris" alone matches a seller, a location, a note, and a ledger row.
	state.filters = Filters {
		location: "Harris".to_string(),
		role: RoleFilter::Seller,
		..Default::default()
	};

	let page = run_search(&rows, &state);

	assert_eq!(page.total_matches, 1);
	assert_eq!(page.items[0].person_name, "John Harris");
	assert_eq!(page.items[0].person_role, "Seller");
}

#[test]
fn date_bounds_skip_rows_without_a_parseable_date() {
	let deeds = vec![
		DeedFixture::new().seller("A", "Early").date("1845-01-01").build(),
		DeedFixture::new().seller("B", "Late").date("1855-01-01").build(),
		DeedFixture::new().seller("C", "Undated").date("sometime in the 1850s").build(),
	];
	let rows = Snapshot::build(deeds, Vec::new()).rows;
	let mut state = state();

	state.filters.date_start = "1850-01-01".to_string();

	let names = run_search(&rows, &state)
		.items
		.iter()
		.map(|row| row.person_name.clone())
		.collect::<Vec<_>>();

	// The undated row passes; only the too-early one is cut.
	assert!(names.contains(&"B Late".to_string()));
	assert!(names.contains(&"C Undated".to_string()));
	assert!(!names.contains(&"A Early".to_string()));
}

#[test]
fn unparseable_bounds_are_ignored() {
	let rows = snapshot();
	let mut state = state();

	state.filters.date_start = "whenever".to_string();

	let page = run_search(&rows, &state);

	assert_eq!(page.total_matches, rows.len());
}

#[test]
fn sort_is_stable_and_orders_missing_values_first_ascending() {
	let deeds = vec![
		DeedFixture::new().seller("A", "First").date("1850-01-01").build(),
		DeedFixture::new().seller("B", "Second").build(),
		DeedFixture::new().seller("C", "Third").date("1850-01-01").build(),
		DeedFixture::new().seller("D", "Fourth").build(),
	];
	let rows = Snapshot::build(deeds, Vec::new()).rows;
	let mut state = state();

	state.scope = SearchScope::Deeds;
	state.filters.role = RoleFilter::Seller;
	state.sort = Some(SortSpec { field: RowField::Date, direction: SortDirection::Ascending });

	let ascending = run_search(&rows, &state)
		.items
		.iter()
		.map(|row| row.person_name.clone())
		.collect::<Vec<_>>();

	// None before Some; equal keys keep input order.
	assert_eq!(ascending, vec!["B Second", "D Fourth", "A First", "C Third"]);

	state.sort = Some(SortSpec { field: RowField::Date, direction: SortDirection::Descending });

	let descending = run_search(&rows, &state)
		.items
		.iter()
		.map(|row| row.person_name.clone())
		.collect::<Vec<_>>();

	assert_eq!(descending, vec!["A First", "C Third", "B Second", "D Fourth"]);
}

#[test]
fn pagination_clamps_past_the_last_page() {
	let deeds = (0..23)
		.map(|i| DeedFixture::new().seller("Seller", &format!("Number{i:02}")).build())
		.collect::<Vec<_>>();
	let rows = Snapshot::build(deeds, Vec::new()).rows;
	let mut state = state();

	state.filters.role = RoleFilter::Seller;
	state.per_page = 10;
	state.page = 1;

	let page = run_search(&rows, &state);

	assert_eq!(page.total_matches, 23);
	assert_eq!(page.total_pages, 3);
	assert_eq!(page.items.len(), 10);
	assert_eq!(page.items[0].person_name, "Seller Number00");

	state.page = 3;

	let page = run_search(&rows, &state);

	assert_eq!(page.items.len(), 3);
	assert_eq!(page.items[0].person_name, "Seller Number20");

	// Requesting page 4 of 3 serves the last page.
	state.page = 4;

	let page = run_search(&rows, &state);

	assert_eq!(page.items.len(), 3);
	assert_eq!(page.items[0].person_name, "Seller Number20");
}

#[test]
fn empty_term_and_filters_match_everything() {
	let rows = snapshot();
	let page = run_search(&rows, &state());

	assert_eq!(page.total_matches, rows.len());
	assert_eq!(page.total_pages, 1);
}
