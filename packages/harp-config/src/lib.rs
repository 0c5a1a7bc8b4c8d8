mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Dashboard, Search, Service, Source};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.source.graphql_url.trim().is_empty() {
		return Err(Error::Validation {
			message: "source.graphql_url must be non-empty.".to_string(),
		});
	}
	if cfg.source.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "source.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.source.deed_limit == 0 {
		return Err(Error::Validation {
			message: "source.deed_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.source.ledger_limit == 0 {
		return Err(Error::Validation {
			message: "source.ledger_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.search.default_page_size == 0 {
		return Err(Error::Validation {
			message: "search.default_page_size must be greater than zero.".to_string(),
		});
	}
	if cfg.search.max_page_size < cfg.search.default_page_size {
		return Err(Error::Validation {
			message: "search.max_page_size must be at least search.default_page_size.".to_string(),
		});
	}
	if cfg.search.history_capacity == 0 {
		return Err(Error::Validation {
			message: "search.history_capacity must be greater than zero.".to_string(),
		});
	}
	if cfg.dashboard.top_entries == 0 {
		return Err(Error::Validation {
			message: "dashboard.top_entries must be greater than zero.".to_string(),
		});
	}
	if !cfg.dashboard.modern_value_rate.is_finite() {
		return Err(Error::Validation {
			message: "dashboard.modern_value_rate must be a finite number.".to_string(),
		});
	}
	if cfg.dashboard.modern_value_rate <= 0.0 {
		return Err(Error::Validation {
			message: "dashboard.modern_value_rate must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.service.http_bind = cfg.service.http_bind.trim().to_string();
	cfg.source.graphql_url =
		cfg.source.graphql_url.trim().trim_end_matches('/').to_string();
	if cfg.service.log_level.trim().is_empty() {
		cfg.service.log_level = "info".to_string();
	}
}
