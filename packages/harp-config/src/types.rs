use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
	pub service: Service,
	pub source: Source,
	#[serde(default)]
	pub search: Search,
	#[serde(default)]
	pub dashboard: Dashboard,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Source {
	pub graphql_url: String,
	#[serde(default = "default_timeout_ms")]
	pub timeout_ms: u64,
	#[serde(default = "default_deed_limit")]
	pub deed_limit: u32,
	#[serde(default = "default_ledger_limit")]
	pub ledger_limit: u32,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Search {
	#[serde(default = "default_page_size")]
	pub default_page_size: usize,
	#[serde(default = "default_max_page_size")]
	pub max_page_size: usize,
	#[serde(default = "default_history_capacity")]
	pub history_capacity: usize,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Dashboard {
	#[serde(default = "default_top_entries")]
	pub top_entries: usize,
	#[serde(default = "default_occupation_min_count")]
	pub occupation_min_count: usize,
	#[serde(default = "default_modern_value_rate")]
	pub modern_value_rate: f64,
}

impl Default for Search {
	fn default() -> Self {
		Self {
			default_page_size: default_page_size(),
			max_page_size: default_max_page_size(),
			history_capacity: default_history_capacity(),
		}
	}
}

impl Default for Dashboard {
	fn default() -> Self {
		Self {
			top_entries: default_top_entries(),
			occupation_min_count: default_occupation_min_count(),
			modern_value_rate: default_modern_value_rate(),
		}
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_timeout_ms() -> u64 {
	30_000
}

fn default_deed_limit() -> u32 {
	1_500
}

fn default_ledger_limit() -> u32 {
	7_000
}

fn default_page_size() -> usize {
	25
}

fn default_max_page_size() -> usize {
	100
}

fn default_history_capacity() -> usize {
	10
}

fn default_top_entries() -> usize {
	10
}

fn default_occupation_min_count() -> usize {
	5
}

// Approximate 1800s USD to 2024 USD conversion shown beside raw totals.
fn default_modern_value_rate() -> f64 {
	36.82
}
