use harp_config::{Config, Dashboard, Search, Service, Source};

fn test_config() -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:8080".to_string(),
			log_level: "info".to_string(),
		},
		source: Source {
			graphql_url: "http://localhost:4000/graphql".to_string(),
			timeout_ms: 30_000,
			deed_limit: 1_500,
			ledger_limit: 7_000,
		},
		search: Search::default(),
		dashboard: Dashboard::default(),
	}
}

#[test]
fn default_config_validates() {
	harp_config::validate(&test_config()).expect("default config should validate");
}

#[test]
fn rejects_empty_http_bind() {
	let mut cfg = test_config();

	cfg.service.http_bind = "  ".to_string();

	let err = harp_config::validate(&cfg).expect_err("expected validation error");

	assert!(err.to_string().contains("service.http_bind"));
}

#[test]
fn rejects_empty_graphql_url() {
	let mut cfg = test_config();

	cfg.source.graphql_url = String::new();

	let err = harp_config::validate(&cfg).expect_err("expected validation error");

	assert!(err.to_string().contains("source.graphql_url"));
}

#[test]
fn rejects_zero_timeout() {
	let mut cfg = test_config();

	cfg.source.timeout_ms = 0;

	let err = harp_config::validate(&cfg).expect_err("expected validation error");

	assert!(err.to_string().contains("source.timeout_ms"));
}

#[test]
fn rejects_page_size_inversion() {
	let mut cfg = test_config();

	cfg.search.default_page_size = 50;
	cfg.search.max_page_size = 25;

	let err = harp_config::validate(&cfg).expect_err("expected validation error");

	assert!(err.to_string().contains("search.max_page_size"));
}

#[test]
fn rejects_non_finite_modern_value_rate() {
	let mut cfg = test_config();

	cfg.dashboard.modern_value_rate = f64::NAN;

	let err = harp_config::validate(&cfg).expect_err("expected validation error");

	assert!(err.to_string().contains("dashboard.modern_value_rate"));
}

#[test]
fn parses_minimal_toml_with_section_defaults() {
	let raw = r#"
[service]
http_bind = "127.0.0.1:8080"

[source]
graphql_url = "http://localhost:4000/graphql"
"#;
	let cfg: Config = toml::from_str(raw).expect("minimal config should parse");

	assert_eq!(cfg.search.history_capacity, 10);
	assert_eq!(cfg.dashboard.top_entries, 10);
	assert_eq!(cfg.dashboard.occupation_min_count, 5);
	assert_eq!(cfg.service.log_level, "info");
}
