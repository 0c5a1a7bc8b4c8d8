pub mod deed_dashboard;
pub mod export;
pub mod ledger_dashboard;
pub mod search;
pub mod state;

use std::{future::Future, pin::Pin, sync::Arc};

pub use deed_dashboard::{
	AdministratorStats, CountyStats, DeedDashboard, DeedTotals, TraderStats, YearlyDeeds,
	deed_dashboard,
};
pub use export::export_csv;
pub use ledger_dashboard::{
	CategoryCount, EnslaverStats, IndividualStats, LedgerDashboard, LedgerTotals, LocationStats,
	OccupationStats, PriceRangeStats, TransactionTypeStats, YearlyLedger, ledger_dashboard,
};
pub use search::{SearchPage, run_filters, run_search};
pub use state::{
	Action, Filters, HistoryEntry, RoleFilter, SearchColumn, SearchScope, SearchState, SortDirection,
	SortSpec,
};

use harp_config::Config;
use harp_domain::{
	DeedRecord, LedgerRecord, NormalizedRow,
	normalize::{normalize_deed, normalize_ledger},
};

pub type ServiceResult<T> = Result<T, ServiceError>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug)]
pub enum ServiceError {
	InvalidRequest { message: String },
	Source { message: String },
}

impl std::fmt::Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::InvalidRequest { message } => write!(f, "Invalid request: {message}"),
			Self::Source { message } => write!(f, "Source error: {message}"),
		}
	}
}

impl std::error::Error for ServiceError {}

impl From<harp_providers::Error> for ServiceError {
	fn from(err: harp_providers::Error) -> Self {
		Self::Source { message: err.to_string() }
	}
}

/// Where the archival records come from.
///
/// The production implementation fetches over GraphQL; tests substitute a
/// canned source.
pub trait RecordSource
where
	Self: Send + Sync,
{
	fn fetch_deeds<'a>(
		&'a self,
		cfg: &'a harp_config::Source,
	) -> BoxFuture<'a, harp_providers::Result<Vec<DeedRecord>>>;

	fn fetch_ledger<'a>(
		&'a self,
		cfg: &'a harp_config::Source,
	) -> BoxFuture<'a, harp_providers::Result<Vec<LedgerRecord>>>;
}

/// The GraphQL-backed [`RecordSource`].
pub struct GraphqlSource;

impl RecordSource for GraphqlSource {
	fn fetch_deeds<'a>(
		&'a self,
		cfg: &'a harp_config::Source,
	) -> BoxFuture<'a, harp_providers::Result<Vec<DeedRecord>>> {
		Box::pin(harp_providers::graphql::fetch_deeds(cfg))
	}

	fn fetch_ledger<'a>(
		&'a self,
		cfg: &'a harp_config::Source,
	) -> BoxFuture<'a, harp_providers::Result<Vec<LedgerRecord>>> {
		Box::pin(harp_providers::graphql::fetch_ledger(cfg))
	}
}

/// An immutable, fully normalized load of both archives.
#[derive(Debug)]
pub struct Snapshot {
	pub deeds: Vec<Arc<DeedRecord>>,
	pub ledger: Vec<Arc<LedgerRecord>>,
	pub rows: Vec<NormalizedRow>,
}

impl Snapshot {
	/// Builds the row list: deed seller rows, deed buyer rows, ledger
	/// individual rows, ledger enslaver rows, each block in source order.
	pub fn build(deeds: Vec<DeedRecord>, ledger: Vec<LedgerRecord>) -> Self {
		let deeds = deeds.into_iter().map(Arc::new).collect::<Vec<_>>();
		let ledger = ledger.into_iter().map(Arc::new).collect::<Vec<_>>();
		let mut rows = Vec::with_capacity(2 * (deeds.len() + ledger.len()));
		let mut buyers = Vec::with_capacity(deeds.len());

		for (index, record) in deeds.iter().enumerate() {
			let [seller, buyer] = normalize_deed(record, index);

			rows.push(seller);
			buyers.push(buyer);
		}

		rows.append(&mut buyers);

		let mut enslavers = Vec::with_capacity(ledger.len());

		for (index, record) in ledger.iter().enumerate() {
			let [individual, enslaver] = normalize_ledger(record, index);

			rows.push(individual);
			enslavers.push(enslaver);
		}

		rows.append(&mut enslavers);

		Self { deeds, ledger, rows }
	}
}

pub struct PortalService {
	pub cfg: Config,
	pub source: Arc<dyn RecordSource>,
}

impl PortalService {
	pub fn new(cfg: Config, source: Arc<dyn RecordSource>) -> Self {
		Self { cfg, source }
	}

	/// One-shot load of both archives into a normalized snapshot.
	pub async fn load_snapshot(&self) -> ServiceResult<Snapshot> {
		let deeds = self.source.fetch_deeds(&self.cfg.source).await?;
		let ledger = self.source.fetch_ledger(&self.cfg.source).await?;

		tracing::info!(deeds = deeds.len(), ledger = ledger.len(), "archives loaded");

		Ok(Snapshot::build(deeds, ledger))
	}
}
