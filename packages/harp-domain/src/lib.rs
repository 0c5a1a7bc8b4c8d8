pub mod coerce;
pub mod demographics;
pub mod normalize;
pub mod records;
pub mod text;

pub use demographics::{AgeCategory, Gender};
pub use normalize::{NormalizedRow, RawRecord, RecordSource, RowField};
pub use records::{DeedRecord, LedgerRecord};
pub use text::Text;
