use std::sync::Arc;

use harp_config::Config;
use harp_service::{GraphqlSource, PortalService, RecordSource, Snapshot};

#[derive(Clone, Debug)]
pub struct AppState {
	pub cfg: Arc<Config>,
	pub snapshot: Arc<Snapshot>,
}
impl AppState {
	pub async fn new(config: Config) -> color_eyre::Result<Self> {
		Self::with_source(config, Arc::new(GraphqlSource)).await
	}

	/// Builds state from an explicit source; tests pass a canned one.
	pub async fn with_source(
		config: Config,
		source: Arc<dyn RecordSource>,
	) -> color_eyre::Result<Self> {
		let service = PortalService::new(config.clone(), source);
		let snapshot = service.load_snapshot().await?;

		Ok(Self { cfg: Arc::new(config), snapshot: Arc::new(snapshot) })
	}
}
