//! Fixture builders shared by the workspace's tests.

use harp_config::{Config, Dashboard, Search, Service, Source};
use harp_domain::{DeedRecord, LedgerRecord};

/// A config with local placeholders, valid under `harp_config::validate`.
pub fn test_config() -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
		},
		source: Source {
			graphql_url: "http://127.0.0.1:9/graphql".to_string(),
			timeout_ms: 1_000,
			deed_limit: 100,
			ledger_limit: 100,
		},
		search: Search::default(),
		dashboard: Dashboard::default(),
	}
}

/// Fluent [`DeedRecord`] builder.
#[derive(Default)]
pub struct DeedFixture(DeedRecord);

impl DeedFixture {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn date(mut self, value: &str) -> Self {
		self.0.deed_date = value.into();
		self
	}

	pub fn seller(mut self, first: &str, last: &str) -> Self {
		self.0.seller_firstname = first.into();
		self.0.seller_lastname = last.into();
		self
	}

	pub fn seller_location(mut self, county: &str, state: &str) -> Self {
		self.0.seller_county = county.into();
		self.0.seller_state = state.into();
		self
	}

	pub fn buyer(mut self, first: &str, last: &str) -> Self {
		self.0.buyer_firstname = first.into();
		self.0.buyer_lastname = last.into();
		self
	}

	pub fn buyer_location(mut self, county: &str, state: &str) -> Self {
		self.0.buyer_county = county.into();
		self.0.buyer_state = state.into();
		self
	}

	pub fn county(mut self, value: &str) -> Self {
		self.0.deed_county = value.into();
		self
	}

	pub fn amount(mut self, value: &str) -> Self {
		self.0.buyer_amount = value.into();
		self
	}

	pub fn acres(mut self, value: &str) -> Self {
		self.0.buyerpurchased_acres = value.into();
		self
	}

	pub fn administrator(mut self, flag: &str, first: &str, last: &str) -> Self {
		self.0.seller_administrator_guardian = flag.into();
		self.0.seller_administrator_guardian_firstname = first.into();
		self.0.seller_administrator_guardian_lastname = last.into();
		self
	}

	pub fn notes(mut self, value: &str) -> Self {
		self.0.notes = value.into();
		self
	}

	pub fn build(self) -> DeedRecord {
		self.0
	}
}

/// Fluent [`LedgerRecord`] builder.
#[derive(Default)]
pub struct LedgerFixture(LedgerRecord);

impl LedgerFixture {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn name(mut self, value: &str) -> Self {
		self.0.enslaved_name = value.into();
		self
	}

	pub fn role(mut self, value: &str) -> Self {
		self.0.enslaved_transrole = value.into();
		self
	}

	pub fn enslaver(mut self, value: &str) -> Self {
		self.0.enslaver1_name = value.into();
		self
	}

	pub fn location(mut self, value: &str) -> Self {
		self.0.trans_loc = value.into();
		self
	}

	pub fn transaction(mut self, kind: &str, value: &str) -> Self {
		self.0.trans_type = kind.into();
		self.0.transindv_value = value.into();
		self
	}

	pub fn recorded(mut self, date: &str) -> Self {
		self.0.trans_record_date = date.into();
		self
	}

	pub fn description(mut self, value: &str) -> Self {
		self.0.enslaved_genagedesc = value.into();
		self
	}

	pub fn age(mut self, value: &str) -> Self {
		self.0.enslaved_age = value.into();
		self
	}

	pub fn occupation(mut self, value: &str) -> Self {
		self.0.enslaved_occ = value.into();
		self
	}

	pub fn build(self) -> LedgerRecord {
		self.0
	}
}
