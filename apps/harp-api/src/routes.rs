use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use harp_domain::{NormalizedRow, RowField};
use harp_service::{
	DeedDashboard, Filters, LedgerDashboard, SearchColumn, SearchScope, SearchState, ServiceError,
	SortSpec, deed_dashboard, export_csv, ledger_dashboard, run_filters, run_search,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/dashboard/deeds", get(deeds_dashboard))
		.route("/v1/dashboard/ledger", get(ledger_dashboard_route))
		.route("/v1/search", post(search))
		.route("/v1/export", post(export))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn deeds_dashboard(State(state): State<AppState>) -> Json<DeedDashboard> {
	Json(deed_dashboard(&state.cfg, &state.snapshot.deeds))
}

async fn ledger_dashboard_route(State(state): State<AppState>) -> Json<LedgerDashboard> {
	Json(ledger_dashboard(&state.cfg, &state.snapshot.ledger))
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchRequest {
	pub term: String,
	pub column: SearchColumn,
	pub scope: SearchScope,
	pub filters: Filters,
	pub sort: Option<SortSpec>,
	pub page: usize,
	pub per_page: Option<usize>,
}

impl Default for SearchRequest {
	fn default() -> Self {
		Self {
			term: String::new(),
			column: SearchColumn::All,
			scope: SearchScope::All,
			filters: Filters::default(),
			sort: None,
			page: 1,
			per_page: None,
		}
	}
}

impl SearchRequest {
	fn to_state(&self, cfg: &harp_config::Config) -> SearchState {
		let mut state = SearchState::new(&cfg.search);

		state.term = self.term.clone();
		state.column = self.column;
		state.scope = self.scope;
		state.filters = self.filters.clone();
		state.sort = self.sort;
		state.page = self.page.max(1);
		state.per_page =
			self.per_page.unwrap_or(cfg.search.default_page_size).clamp(1, cfg.search.max_page_size);

		state
	}
}

#[derive(Clone, Debug, Serialize)]
pub struct SearchResponse {
	pub items: Vec<NormalizedRow>,
	pub total_matches: usize,
	pub total_pages: usize,
	pub page: usize,
}

async fn search(
	State(state): State<AppState>,
	Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
	let search_state = payload.to_state(&state.cfg);
	let page = run_search(&state.snapshot.rows, &search_state);
	let served = search_state.page.clamp(1, page.total_pages.max(1));

	Ok(Json(SearchResponse {
		items: page.items,
		total_matches: page.total_matches,
		total_pages: page.total_pages,
		page: served,
	}))
}

#[derive(Clone, Debug, Deserialize)]
pub struct ExportRequest {
	#[serde(flatten)]
	pub search: SearchRequest,
	#[serde(default = "all_columns")]
	pub columns: Vec<RowField>,
}

fn all_columns() -> Vec<RowField> {
	RowField::ALL.to_vec()
}

async fn export(
	State(state): State<AppState>,
	Json(payload): Json<ExportRequest>,
) -> Result<Response, ApiError> {
	let search_state = payload.search.to_state(&state.cfg);
	// Export covers every match, not the served page.
	let filtered = run_filters(&state.snapshot.rows, &search_state);
	let csv = export_csv(&payload.columns, &filtered)?;

	Ok(([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], csv).into_response())
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}

impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match &err {
			ServiceError::InvalidRequest { .. } => {
				Self::new(StatusCode::UNPROCESSABLE_ENTITY, "invalid_request", err.to_string())
			},
			ServiceError::Source { .. } => {
				Self::new(StatusCode::BAD_GATEWAY, "source_unavailable", err.to_string())
			},
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
