use std::sync::Arc;

use harp_domain::{
	DeedRecord, LedgerRecord, RecordSource, RowField,
	normalize::{normalize_deed, normalize_ledger},
};

#[test]
fn bare_records_still_yield_two_named_rows() {
	let [seller, buyer] = normalize_deed(&Arc::new(DeedRecord::default()), 0);

	assert_eq!(seller.id, "deed-s-0");
	assert_eq!(seller.person_name, "Unknown Seller");
	assert_eq!(seller.person_role, "Seller");
	assert_eq!(buyer.id, "deed-b-0");
	assert_eq!(buyer.person_name, "Unknown Buyer");
	assert_eq!(buyer.person_role, "Buyer");
	assert!(seller.date.is_none());
	assert!(seller.location.is_none());

	let [individual, enslaver] = normalize_ledger(&Arc::new(LedgerRecord::default()), 0);

	assert_eq!(individual.id, "ledger-i-0");
	assert_eq!(individual.person_name, "Unknown");
	assert_eq!(individual.person_role, "Enslaved");
	assert_eq!(enslaver.id, "ledger-e-0");
	assert_eq!(enslaver.person_name, "Unknown Enslaver");
	assert_eq!(enslaver.person_role, "Enslaver");
}

#[test]
fn deed_rows_carry_their_party_fields() {
	let record = Arc::new(DeedRecord {
		deed_date: "1845-06-01".into(),
		deed_county: "Bibb".into(),
		deed_state: "GA".into(),
		seller_firstname: "Mary".into(),
		seller_lastname: "Calhoun".into(),
		buyer_firstname: "Silas".into(),
		buyer_lastname: "Wright".into(),
		notes: "recorded twice".into(),
		..Default::default()
	});
	let [seller, buyer] = normalize_deed(&record, 7);

	assert_eq!(seller.id, "deed-s-7");
	assert_eq!(seller.person_name, "Mary Calhoun");
	assert_eq!(seller.location.as_deref(), Some("Bibb, GA"));
	assert_eq!(seller.transaction_type.as_deref(), Some("Deed/Sale"));
	assert_eq!(seller.details.as_deref(), Some("recorded twice"));
	assert_eq!(buyer.id, "deed-b-7");
	assert_eq!(buyer.person_name, "Silas Wright");
	assert_eq!(buyer.location.as_deref(), Some("Bibb, GA"));
	assert_eq!(buyer.date.as_deref(), Some("1845-06-01"));
}

#[test]
fn deed_location_is_the_recording_jurisdiction_not_the_party_county() {
	let record = Arc::new(DeedRecord {
		deed_county: "Harris".into(),
		deed_state: "GA".into(),
		seller_county: "Bibb".into(),
		seller_state: "AL".into(),
		buyer_county: "Troup".into(),
		..Default::default()
	});
	let [seller, buyer] = normalize_deed(&record, 0);

	assert_eq!(seller.location.as_deref(), Some("Harris, GA"));
	assert_eq!(buyer.location.as_deref(), Some("Harris, GA"));
}

#[test]
fn deed_location_omits_the_separator_when_the_state_is_missing() {
	let record = Arc::new(DeedRecord { deed_county: "Troup".into(), ..Default::default() });
	let [seller, buyer] = normalize_deed(&record, 0);

	assert_eq!(seller.location.as_deref(), Some("Troup"));
	assert_eq!(buyer.location.as_deref(), Some("Troup"));
}

#[test]
fn ledger_rows_share_transaction_context() {
	let record = Arc::new(LedgerRecord {
		enslaved_name: "Phillis".into(),
		enslaved_transrole: "Sold".into(),
		enslaver1_name: "J. Whitfield".into(),
		trans_loc: "Montgomery".into(),
		trans_type: "Sale".into(),
		trans_record_date: "1852-01-09".into(),
		..Default::default()
	});
	let [individual, enslaver] = normalize_ledger(&record, 3);

	assert_eq!(individual.person_name, "Phillis");
	assert_eq!(individual.person_role, "Sold");
	assert_eq!(individual.source, RecordSource::Ledger);
	assert_eq!(enslaver.person_name, "J. Whitfield");
	assert_eq!(enslaver.person_role, "Enslaver");

	for row in [&individual, &enslaver] {
		assert_eq!(row.location.as_deref(), Some("Montgomery"));
		assert_eq!(row.transaction_type.as_deref(), Some("Sale"));
		assert_eq!(row.date.as_deref(), Some("1852-01-09"));
	}
}

#[test]
fn literal_null_fields_are_treated_as_missing() {
	let record = Arc::new(LedgerRecord {
		enslaved_name: "null".into(),
		trans_loc: "  ".into(),
		..Default::default()
	});
	let [individual, _] = normalize_ledger(&record, 0);

	assert_eq!(individual.person_name, "Unknown");
	assert!(individual.location.is_none());
}

#[test]
fn row_ids_are_unique_within_a_fetch() {
	let deeds = (0..4).map(|_| Arc::new(DeedRecord::default())).collect::<Vec<_>>();
	let ledger = (0..4).map(|_| Arc::new(LedgerRecord::default())).collect::<Vec<_>>();
	let mut ids = deeds
		.iter()
		.enumerate()
		.flat_map(|(i, r)| normalize_deed(r, i))
		.chain(ledger.iter().enumerate().flat_map(|(i, r)| normalize_ledger(r, i)))
		.map(|row| row.id)
		.collect::<Vec<_>>();

	ids.sort();
	ids.dedup();

	assert_eq!(ids.len(), 16);
}

#[test]
fn field_accessor_covers_every_column() {
	let record = Arc::new(DeedRecord {
		seller_firstname: "Amos".into(),
		seller_lastname: "Reid".into(),
		..Default::default()
	});
	let [seller, _] = normalize_deed(&record, 1);

	assert_eq!(seller.field(RowField::Id), Some("deed-s-1"));
	assert_eq!(seller.field(RowField::Source), Some("deeds"));
	assert_eq!(seller.field(RowField::PersonName), Some("Amos Reid"));
	assert_eq!(seller.field(RowField::PersonRole), Some("Seller"));
	assert_eq!(seller.field(RowField::Date), None);
	assert_eq!(seller.field(RowField::Location), None);
	assert_eq!(seller.field(RowField::TransactionType), Some("Deed/Sale"));
	assert_eq!(seller.field(RowField::Details), None);
}
