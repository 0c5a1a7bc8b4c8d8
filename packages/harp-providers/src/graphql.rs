//! One-shot GraphQL dataset fetch.
//!
//! The backend exposes each archive as a flat list query. A failure surfaces
//! as an error to the caller; there is no retry.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

const DEED_FIELDS: &str = "\
deed_state deed_county deed_date \
seller_firstname seller_lastname seller_county seller_state \
seller_administrator_guardian seller_administrator_guardian_firstname \
seller_administrator_guardian_lastname \
buyer_firstname buyer_lastname buyer_county buyer_state buyer_amount \
buyer_purchased_county_district_lot number lotnumber_countysection \
buyerpurchased_acres deed_link notes";

const LEDGER_FIELDS: &str = "\
rec_number source_pg source_fr \
enslaved_name enslaved_transrole enslaved_color enslaved_genagedesc \
enslaved_age enslaved_decage enslaved_est_birth enslaved_est_death \
enslaved_occ enslaved_health enslaved_unkchild enslaved_famno enslaved_famrel \
enslaver_business enslaver_businessrole enslaver_businessloc \
enslaver1_name enslaver1_trans_role enslaver1_loc \
enslaver2_name enslaver2_trans_role enslaver2_loc \
enslaver3_name enslaver3_trans_role enslaver3_loc \
enslaver4_name enslaver4_trans_role enslaver4_loc \
enslaver5_name enslaver5_trans_role enslaver5_loc \
enslaver6_name enslaver6_trans_role enslaver6_loc \
enslaver7_name enslaver7_trans_role enslaver7_loc \
trans_id trans_loc trans_type trans_record_date trans_begin_date \
trans_end_date transindv_value transgrp_value \
source_author source_title source_loc source_film_no \
url extractor url_1 notes";

pub async fn fetch_deeds(cfg: &harp_config::Source) -> Result<Vec<harp_domain::DeedRecord>> {
	let query =
		format!("query {{ deedRecords(limit: {}) {{ {DEED_FIELDS} }} }}", cfg.deed_limit);

	fetch_dataset(cfg, &query, "deedRecords").await
}

pub async fn fetch_ledger(cfg: &harp_config::Source) -> Result<Vec<harp_domain::LedgerRecord>> {
	let query =
		format!("query {{ ledgerRecords(limit: {}) {{ {LEDGER_FIELDS} }} }}", cfg.ledger_limit);

	fetch_dataset(cfg, &query, "ledgerRecords").await
}

/// POSTs `{"query": ...}` and deserializes `data.<root_field>` as a row list.
pub async fn fetch_dataset<T>(
	cfg: &harp_config::Source,
	query: &str,
	root_field: &str,
) -> Result<Vec<T>>
where
	T: DeserializeOwned,
{
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let body = serde_json::json!({ "query": query });
	let res = client.post(&cfg.graphql_url).json(&body).send().await?;
	let json: Value = res.error_for_status()?.json().await?;

	tracing::debug!(root_field, "graphql response received");

	parse_dataset(json, root_field)
}

fn parse_dataset<T>(json: Value, root_field: &str) -> Result<Vec<T>>
where
	T: DeserializeOwned,
{
	if let Some(errors) = json.get("errors").and_then(Value::as_array)
		&& let Some(first) = errors.first()
	{
		let message = first.get("message").and_then(Value::as_str).unwrap_or("unknown error");

		return Err(Error::InvalidResponse {
			message: format!("GraphQL query failed: {message}."),
		});
	}

	let Some(rows) = json.get("data").and_then(|data| data.get(root_field)) else {
		return Err(Error::InvalidResponse {
			message: format!("GraphQL response is missing data.{root_field}."),
		});
	};

	Ok(serde_json::from_value(rows.clone())?)
}
