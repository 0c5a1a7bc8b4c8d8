//! Aggregated views over the transaction ledger.

use std::{
	collections::{BTreeMap, HashMap, HashSet},
	sync::Arc,
};

use serde::Serialize;

use harp_config::Config;
use harp_domain::{
	LedgerRecord, coerce,
	demographics::{AgeCategory, Gender, classify_age, classify_gender},
};

#[derive(Clone, Debug, Serialize)]
pub struct LedgerDashboard {
	pub yearly: Vec<YearlyLedger>,
	pub locations: Vec<LocationStats>,
	pub transaction_types: Vec<TransactionTypeStats>,
	pub top_individuals: Vec<IndividualStats>,
	pub top_enslavers: Vec<EnslaverStats>,
	pub gender: Vec<CategoryCount>,
	pub ages: Vec<CategoryCount>,
	pub occupations: Vec<OccupationStats>,
	pub price_ranges: Vec<PriceRangeStats>,
	pub totals: LedgerTotals,
}

#[derive(Clone, Debug, Serialize)]
pub struct YearlyLedger {
	pub year: i32,
	pub transactions: usize,
	pub total_value: f64,
	pub unique_individuals: usize,
	pub unique_enslavers: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct LocationStats {
	pub name: String,
	pub transactions: usize,
	pub total_value: f64,
	pub unique_individuals: usize,
	pub unique_enslavers: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct TransactionTypeStats {
	pub name: String,
	pub count: usize,
	pub total_value: f64,
	pub average_value: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct IndividualStats {
	pub name: String,
	pub transactions: usize,
	pub total_value: f64,
	pub roles: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct EnslaverStats {
	pub name: String,
	pub transactions: usize,
	pub total_value: f64,
	pub locations: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct CategoryCount {
	pub label: &'static str,
	pub count: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct OccupationStats {
	pub name: String,
	pub count: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct PriceRangeStats {
	pub label: &'static str,
	pub min: f64,
	pub max: f64,
	pub mean: f64,
	pub count: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct LedgerTotals {
	pub records: usize,
	pub total_value: f64,
	pub average_value: f64,
	pub unique_locations: usize,
}

pub fn ledger_dashboard(cfg: &Config, records: &[Arc<LedgerRecord>]) -> LedgerDashboard {
	LedgerDashboard {
		yearly: yearly(records),
		locations: locations(records),
		transaction_types: transaction_types(records),
		top_individuals: top_individuals(cfg, records),
		top_enslavers: top_enslavers(cfg, records),
		gender: gender_counts(records),
		ages: age_counts(records),
		occupations: occupations(cfg, records),
		price_ranges: price_ranges(records),
		totals: totals(records),
	}
}

fn yearly(records: &[Arc<LedgerRecord>]) -> Vec<YearlyLedger> {
	let mut buckets = BTreeMap::<i32, Vec<&LedgerRecord>>::new();

	for record in records {
		if let Some(year) = coerce::year_of(record.trans_record_date.as_deref()) {
			buckets.entry(year).or_default().push(record);
		}
	}

	buckets
		.into_iter()
		.map(|(year, records)| YearlyLedger {
			year,
			transactions: records.len(),
			total_value: sum_values(&records),
			unique_individuals: distinct(&records, individual_name),
			unique_enslavers: distinct(&records, enslaver_name),
		})
		.collect()
}

fn locations(records: &[Arc<LedgerRecord>]) -> Vec<LocationStats> {
	let mut stats = group_by(records, |record| {
		coerce::clean(record.trans_loc.as_deref()).map(str::to_string)
	})
	.into_iter()
	.map(|(name, records)| LocationStats {
		name,
		transactions: records.len(),
		total_value: sum_values(&records),
		unique_individuals: distinct(&records, individual_name),
		unique_enslavers: distinct(&records, enslaver_name),
	})
	.collect::<Vec<_>>();

	stats.sort_by(|a, b| b.transactions.cmp(&a.transactions));

	stats
}

fn transaction_types(records: &[Arc<LedgerRecord>]) -> Vec<TransactionTypeStats> {
	let mut stats = group_by(records, |record| {
		coerce::clean(record.trans_type.as_deref()).map(str::to_string)
	})
	.into_iter()
	.map(|(name, records)| {
		let total_value = sum_values(&records);

		TransactionTypeStats {
			name,
			count: records.len(),
			total_value,
			average_value: total_value / records.len() as f64,
		}
	})
	.collect::<Vec<_>>();

	stats.sort_by(|a, b| b.count.cmp(&a.count));

	stats
}

fn top_individuals(cfg: &Config, records: &[Arc<LedgerRecord>]) -> Vec<IndividualStats> {
	let mut stats = group_by(records, individual_name)
		.into_iter()
		.map(|(name, records)| {
			let mut roles = records
				.iter()
				.filter_map(|record| coerce::clean(record.enslaved_transrole.as_deref()))
				.map(str::to_string)
				.collect::<Vec<_>>();

			roles.sort();
			roles.dedup();

			IndividualStats { name, transactions: records.len(), total_value: sum_values(&records), roles }
		})
		.collect::<Vec<_>>();

	stats.sort_by(|a, b| b.transactions.cmp(&a.transactions));
	stats.truncate(cfg.dashboard.top_entries);

	stats
}

fn top_enslavers(cfg: &Config, records: &[Arc<LedgerRecord>]) -> Vec<EnslaverStats> {
	let mut stats = group_by(records, enslaver_name)
		.into_iter()
		.map(|(name, records)| EnslaverStats {
			name,
			transactions: records.len(),
			total_value: sum_values(&records),
			locations: distinct(&records, |record| {
				coerce::clean(record.enslaver1_loc.as_deref()).map(str::to_string)
			}),
		})
		.collect::<Vec<_>>();

	stats.sort_by(|a, b| b.transactions.cmp(&a.transactions));
	stats.truncate(cfg.dashboard.top_entries);

	stats
}

fn gender_counts(records: &[Arc<LedgerRecord>]) -> Vec<CategoryCount> {
	Gender::ALL
		.iter()
		.map(|category| CategoryCount {
			label: category.label(),
			count: records.iter().filter(|record| classify_gender(record) == *category).count(),
		})
		.collect()
}

fn age_counts(records: &[Arc<LedgerRecord>]) -> Vec<CategoryCount> {
	AgeCategory::ALL
		.iter()
		.map(|category| CategoryCount {
			label: category.label(),
			count: records.iter().filter(|record| classify_age(record) == *category).count(),
		})
		.collect()
}

fn occupations(cfg: &Config, records: &[Arc<LedgerRecord>]) -> Vec<OccupationStats> {
	let mut stats = group_by(records, |record| {
		coerce::clean(record.enslaved_occ.as_deref()).map(str::to_string)
	})
	.into_iter()
	.map(|(name, records)| OccupationStats { name, count: records.len() })
	// Transcription noise shows up as tiny one-off buckets.
	.filter(|stat| stat.count > cfg.dashboard.occupation_min_count)
	.collect::<Vec<_>>();

	stats.sort_by(|a, b| b.count.cmp(&a.count));

	stats
}

fn price_ranges(records: &[Arc<LedgerRecord>]) -> Vec<PriceRangeStats> {
	["sale", "hire", "distribution"]
		.into_iter()
		.map(|label| {
			let values = records
				.iter()
				.filter(|record| {
					record
						.trans_type
						.as_deref()
						.is_some_and(|kind| kind.to_lowercase().contains(label))
				})
				.map(|record| coerce::finite_or_zero(record.transindv_value.as_deref()))
				.filter(|value| *value > 0.)
				.collect::<Vec<_>>();

			if values.is_empty() {
				return PriceRangeStats { label, min: 0., max: 0., mean: 0., count: 0 };
			}

			let min = values.iter().copied().fold(f64::INFINITY, f64::min);
			let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
			let mean = values.iter().sum::<f64>() / values.len() as f64;

			PriceRangeStats { label, min, max, mean, count: values.len() }
		})
		.collect()
}

fn totals(records: &[Arc<LedgerRecord>]) -> LedgerTotals {
	let total_value = records
		.iter()
		.map(|record| coerce::finite_or_zero(record.transindv_value.as_deref()))
		.sum::<f64>();
	let average_value =
		if records.is_empty() { 0. } else { total_value / records.len() as f64 };

	LedgerTotals {
		records: records.len(),
		total_value,
		average_value,
		unique_locations: distinct_arcs(records, |record| {
			coerce::clean(record.trans_loc.as_deref()).map(str::to_string)
		}),
	}
}

fn group_by<'a>(
	records: &'a [Arc<LedgerRecord>],
	key: impl Fn(&LedgerRecord) -> Option<String>,
) -> Vec<(String, Vec<&'a LedgerRecord>)> {
	let mut order = Vec::<(String, Vec<&LedgerRecord>)>::new();
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

fn distinct(records: &[&LedgerRecord], key: impl Fn(&LedgerRecord) -> Option<String>) -> usize {
	records.iter().filter_map(|record| key(record)).collect::<HashSet<_>>().len()
}

fn distinct_arcs(
	records: &[Arc<LedgerRecord>],
	key: impl Fn(&LedgerRecord) -> Option<String>,
) -> usize {
	records.iter().filter_map(|record| key(record)).collect::<HashSet<_>>().len()
}

fn sum_values(records: &[&LedgerRecord]) -> f64 {
	records.iter().map(|record| coerce::finite_or_zero(record.transindv_value.as_deref())).sum()
}

fn individual_name(record: &LedgerRecord) -> Option<String> {
	coerce::clean(record.enslaved_name.as_deref()).map(str::to_string)
}

fn enslaver_name(record: &LedgerRecord) -> Option<String> {
	coerce::clean(record.enslaver1_name.as_deref()).map(str::to_string)
}
