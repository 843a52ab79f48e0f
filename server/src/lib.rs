use anyhow::Result;
use axum::{extract::State, http::StatusCode, response::Html, routing::{get, post}, Form, Json, Router};
use keyphrase_fetch::{FetchConfig, FetchError, PageFetcher, PageReport};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Keyphrase</title></head>
<body>
<h1>Keyphrase</h1>
<form action="/result" method="post">
  <input type="text" name="text_field" placeholder="https://example.com/page">
  <button type="submit">Analyze</button>
</form>
</body>
</html>
"#;

/// The single field posted by the index form.
#[derive(Deserialize)]
pub struct ResultForm {
    pub text_field: String,
}

#[derive(Clone)]
pub struct AppState {
    pub fetcher: PageFetcher,
}

pub fn build_app(config: FetchConfig) -> Result<Router> {
    let fetcher = PageFetcher::new(config)?;
    let app_state = AppState { fetcher };

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/result", post(result_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http());
    Ok(app)
}

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Fetch the posted URL, extract its signals and rank them. Fetch failures never reach the analysis.
pub async fn result_handler(
    State(state): State<AppState>,
    Form(form): Form<ResultForm>,
) -> Result<Json<PageReport>, (StatusCode, String)> {
    let signals = state.fetcher.fetch(&form.text_field).await.map_err(fetch_error_response)?;
    let report = PageReport::build(signals);
    tracing::info!(
        url = %report.signals.url,
        winners = report.analysis.winning_keywords.len(),
        "page analyzed"
    );
    Ok(Json(report))
}

fn fetch_error_response(err: FetchError) -> (StatusCode, String) {
    let status = if err.is_client_error() { StatusCode::BAD_REQUEST } else { StatusCode::BAD_GATEWAY };
    tracing::warn!(error = %err, status = status.as_u16(), "could not retrieve page");
    (status, format!("Could not retrieve HTML elements: {err}"))
}
