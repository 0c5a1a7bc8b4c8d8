//! Aggregated views over the deed archive.
//!
//! Pure reductions over an immutable snapshot: parse failures degrade a
//! single field to zero and never abort the pass.

use std::{
	collections::{BTreeMap, HashMap, HashSet},
	sync::Arc,
};

use serde::Serialize;

use harp_config::Config;
use harp_domain::{DeedRecord, coerce};

#[derive(Clone, Debug, Serialize)]
pub struct DeedDashboard {
	pub yearly: Vec<YearlyDeeds>,
	pub counties: Vec<CountyStats>,
	pub top_buyers: Vec<TraderStats>,
	pub top_sellers: Vec<TraderStats>,
	pub administrators: Vec<AdministratorStats>,
	pub totals: DeedTotals,
}

#[derive(Clone, Debug, Serialize)]
pub struct YearlyDeeds {
	pub year: i32,
	pub transactions: usize,
	pub total_value: f64,
	pub total_acres: f64,
	pub unique_sellers: usize,
	pub unique_buyers: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct CountyStats {
	pub name: String,
	pub transactions: usize,
	pub total_value: f64,
	pub average_value: f64,
	pub total_acres: f64,
	pub unique_buyers: usize,
	pub unique_sellers: usize,
}

/// A named buyer or seller ranked by the value they moved.
#[derive(Clone, Debug, Serialize)]
pub struct TraderStats {
	pub name: String,
	pub transactions: usize,
	pub total_value: f64,
	pub total_acres: f64,
	pub counties: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct AdministratorStats {
	pub name: String,
	pub transactions: usize,
	pub total_value: f64,
	pub role: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct DeedTotals {
	pub transactions: usize,
	pub total_value: f64,
	pub average_value: f64,
	pub total_acres: f64,
	pub modern_equivalent_value: f64,
}

pub fn deed_dashboard(cfg: &Config, records: &[Arc<DeedRecord>]) -> DeedDashboard {
	DeedDashboard {
		yearly: yearly(records),
		counties: counties(records),
		top_buyers: top_traders(cfg, records, buyer_name),
		top_sellers: top_traders(cfg, records, seller_name),
		administrators: administrators(records),
		totals: totals(cfg, records),
	}
}

fn yearly(records: &[Arc<DeedRecord>]) -> Vec<YearlyDeeds> {
	let mut buckets = BTreeMap::<i32, Vec<&DeedRecord>>::new();

	// Records without a parseable year are excluded outright.
	for record in records {
		if let Some(year) = coerce::year_of(record.deed_date.as_deref()) {
			buckets.entry(year).or_default().push(record);
		}
	}

	buckets
		.into_iter()
		.map(|(year, records)| YearlyDeeds {
			year,
			transactions: records.len(),
			total_value: sum_amounts(&records),
			total_acres: sum_acres(&records),
			unique_sellers: distinct(&records, seller_name),
			unique_buyers: distinct(&records, buyer_name),
		})
		.collect()
}

fn counties(records: &[Arc<DeedRecord>]) -> Vec<CountyStats> {
	let mut stats = group_by(records, |record| {
		coerce::clean(record.deed_county.as_deref()).map(str::to_string)
	})
	.into_iter()
	.map(|(name, records)| {
		let total_value = sum_amounts(&records);

		CountyStats {
			name,
			transactions: records.len(),
			total_value,
			average_value: total_value / records.len() as f64,
			total_acres: sum_acres(&records),
			unique_buyers: distinct(&records, buyer_name),
			unique_sellers: distinct(&records, seller_name),
		}
	})
	.collect::<Vec<_>>();

	stats.sort_by(|a, b| b.total_value.total_cmp(&a.total_value));

	stats
}

fn top_traders(
	cfg: &Config,
	records: &[Arc<DeedRecord>],
	name: fn(&DeedRecord) -> Option<String>,
) -> Vec<TraderStats> {
	let mut stats = group_by(records, name)
		.into_iter()
		.map(|(name, records)| TraderStats {
			name,
			transactions: records.len(),
			total_value: sum_amounts(&records),
			total_acres: sum_acres(&records),
			counties: distinct(&records, |record| {
				coerce::clean(record.deed_county.as_deref()).map(str::to_string)
			}),
		})
		.collect::<Vec<_>>();

	stats.sort_by(|a, b| b.total_value.total_cmp(&a.total_value));
	stats.truncate(cfg.dashboard.top_entries);

	stats
}

fn administrators(records: &[Arc<DeedRecord>]) -> Vec<AdministratorStats> {
	let flagged = records
		.iter()
		.filter(|record| {
			matches!(
				record.seller_administrator_guardian.as_deref(),
				Some("Yes Guardian" | "Yes Administrator")
			)
		})
		.cloned()
		.collect::<Vec<_>>();
	let mut stats = group_by(&flagged, |record| {
		coerce::full_name(
			record.seller_administrator_guardian_firstname.as_deref(),
			record.seller_administrator_guardian_lastname.as_deref(),
		)
	})
	.into_iter()
	.map(|(name, records)| AdministratorStats {
		name,
		transactions: records.len(),
		total_value: sum_amounts(&records),
		role: records[0]
			.seller_administrator_guardian
			.as_deref()
			.unwrap_or_default()
			.to_string(),
	})
	.collect::<Vec<_>>();

	stats.sort_by(|a, b| b.transactions.cmp(&a.transactions));

	stats
}

fn totals(cfg: &Config, records: &[Arc<DeedRecord>]) -> DeedTotals {
	let transactions = records.len();
	let total_value = records
		.iter()
		.map(|record| coerce::finite_or_zero(record.buyer_amount.as_deref()))
		.sum::<f64>();
	let total_acres = records
		.iter()
		.map(|record| coerce::finite_or_zero(record.buyerpurchased_acres.as_deref()))
		.sum::<f64>();
	let average_value = if transactions > 0 { total_value / transactions as f64 } else { 0. };

	DeedTotals {
		transactions,
		total_value,
		average_value,
		total_acres,
		modern_equivalent_value: total_value * cfg.dashboard.modern_value_rate,
	}
}

/// Groups records by a keying closure, keeping first-encounter order so the
/// later value sorts stay deterministic on ties. Keyless records are dropped.
fn group_by<'a>(
	records: &'a [Arc<DeedRecord>],
	key: impl Fn(&DeedRecord) -> Option<String>,
) -> Vec<(String, Vec<&'a DeedRecord>)> {
	let mut order = Vec::<(String, Vec<&DeedRecord>)>::new();
	let mut index = HashMap::<String, usize>::new();

	for record in records {
		let Some(key) = key(record) else {
			continue;
		};

		match index.get(&key) {
			Some(&at) => order[at].1.push(record),
			None => {
				index.insert(key.clone(), order.len());
				order.push((key, vec![record]));
			},
		}
	}

	order
}

fn distinct(records: &[&DeedRecord], key: impl Fn(&DeedRecord) -> Option<String>) -> usize {
	records.iter().filter_map(|record| key(record)).collect::<HashSet<_>>().len()
}

fn sum_amounts(records: &[&DeedRecord]) -> f64 {
	records.iter().map(|record| coerce::finite_or_zero(record.buyer_amount.as_deref())).sum()
}

fn sum_acres(records: &[&DeedRecord]) -> f64 {
	records
		.iter()
		.map(|record| coerce::finite_or_zero(record.buyerpurchased_acres.as_deref()))
		.sum()
}

fn seller_name(record: &DeedRecord) -> Option<String> {
	coerce::full_name(record.seller_firstname.as_deref(), record.seller_lastname.as_deref())
}

fn buyer_name(record: &DeedRecord) -> Option<String> {
	coerce::full_name(record.buyer_firstname.as_deref(), record.buyer_lastname.as_deref())
}
