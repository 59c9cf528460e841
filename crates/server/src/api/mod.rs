use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, State},
    response::Html,
    Json,
};
use serde::de::DeserializeOwned;
use server_api::{submit_selection, toggle_city};
use shared::{
    domain::Selection,
    protocol::{CatalogResponse, SubmissionResult, SubmitSelectionRequest, ToggleCityRequest},
};
use tracing::debug;

use crate::{app_state::AppState, page::render_page};

mod error;

pub(crate) use error::RequestError;

pub(crate) async fn healthz() -> &'static str {
    "ok"
}

pub(crate) async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(state.catalog, &Selection::new(), None))
}

pub(crate) async fn toggle(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Html<String>, RequestError> {
    let req: ToggleCityRequest = decode_form(&body)?;
    let current: Selection = req.selected_cities.into_iter().collect();
    let next = toggle_city(&current, req.city);
    debug!(selected = next.len(), "selection updated");
    Ok(Html(render_page(state.catalog, &next, None)))
}

/// Form post round trip: the page comes back with the confirmation and an
/// empty selection.
pub(crate) async fn submit(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Html<String>, RequestError> {
    let req: SubmitSelectionRequest = decode_form(&body)?;
    let result = submit_selection(&req.selected_cities);
    Ok(Html(render_page(
        state.catalog,
        &Selection::new(),
        Some(&result.message),
    )))
}

pub(crate) async fn list_cities(State(state): State<Arc<AppState>>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        cities: state.catalog.to_vec(),
    })
}

pub(crate) async fn submit_json(
    payload: Result<Json<SubmitSelectionRequest>, JsonRejection>,
) -> Result<Json<SubmissionResult>, RequestError> {
    let Json(req) = payload?;
    Ok(Json(submit_selection(&req.selected_cities)))
}

/// Decodes `application/x-www-form-urlencoded` bodies, collecting repeated
/// keys into sequences.
pub(crate) fn decode_form<T: DeserializeOwned>(body: &[u8]) -> Result<T, RequestError> {
    Ok(serde_html_form::from_bytes(body)?)
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
