use crate::state::AppState;
use axum::{extract::State, http::header, response::IntoResponse};
use dnsdrone_infrastructure::metrics::{render_prometheus, CONTENT_TYPE};

pub async fn get_metrics(State(state): State<AppState>) -> impl IntoResponse {
    let body = render_prometheus(&state.metrics);
    ([(header::CONTENT_TYPE, CONTENT_TYPE)], body)
}
