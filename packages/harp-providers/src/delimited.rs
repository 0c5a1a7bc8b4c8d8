//! Header-aware delimited-text parsing.
//!
//! Archives are also distributed as CSV dumps with the same column names the
//! GraphQL backend uses, so the same record types deserialize from both.

use serde::de::DeserializeOwned;

use crate::error::Result;

/// Parses a CSV document with a header row into records.
///
/// Blank lines are skipped. Values stay textual; numeric interpretation is
/// the domain coercion helpers' job.
pub fn parse_records<T>(text: &str) -> Result<Vec<T>>
where
	T: DeserializeOwned,
{
	let mut reader = csv::ReaderBuilder::new()
		.trim(csv::Trim::All)
		.flexible(true)
		.from_reader(text.as_bytes());

	reader.deserialize().collect::<Result<Vec<T>, _>>().map_err(Into::into)
}
