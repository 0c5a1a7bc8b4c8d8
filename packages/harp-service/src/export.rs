//! CSV export of the full filtered row set.

use harp_domain::{NormalizedRow, RowField};

use crate::{ServiceError, ServiceResult};

/// Renders rows as CSV with every field quoted. Missing values become empty
/// strings. Pagination never applies here; callers pass the whole filtered
/// set.
pub fn export_csv(columns: &[RowField], rows: &[&NormalizedRow]) -> ServiceResult<String> {
	if columns.is_empty() {
		return Err(ServiceError::InvalidRequest {
			message: "At least one export column is required.".to_string(),
		});
	}

	let mut writer = csv::WriterBuilder::new()
		.quote_style(csv::QuoteStyle::Always)
		.from_writer(Vec::new());

	writer
		.write_record(columns.iter().map(RowField::as_str))
		.map_err(|err| write_error(&err))?;

	for row in rows {
		writer
			.write_record(columns.iter().map(|column| row.field(*column).unwrap_or_default()))
			.map_err(|err| write_error(&err))?;
	}

	let bytes = writer
		.into_inner()
		.map_err(|err| ServiceError::Source { message: format!("CSV export failed: {err}.") })?;

	String::from_utf8(bytes)
		.map_err(|err| ServiceError::Source { message: format!("CSV export failed: {err}.") })
}

fn write_error(err: &csv::Error) -> ServiceError {
	ServiceError::Source { message: format!("CSV export failed: {err}.") }
}
