use axum::{extract::State, response::IntoResponse};

use crate::balloons::clean_fixes;
use crate::web::server::AppState;

use super::templates::IndexTemplate;

/// Map page, seeded with the balloon snapshot at request time. A failed
/// feed fetch renders the page with an empty constellation.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let fixes = clean_fixes(state.feed.snapshot().await);
    log::info!("Rendering map page with {} balloon fixes", fixes.len());

    let balloons_json = serde_json::to_string(&fixes).unwrap_or_else(|e| {
        log::error!("Failed to serialize balloon snapshot: {}", e);
        "[]".to_string()
    });

    IndexTemplate { balloons_json }
}
