use axum::{extract::State, response::IntoResponse, Json};

use crate::balloons::{clean_fixes, BalloonFix};
use crate::web::server::AppState;

#[utoipa::path(
    get,
    path = "/api/balloons",
    tag = "balloons",
    responses(
        (status = 200, description = "Cleaned constellation snapshot", body = Vec<BalloonFix>)
    )
)]
pub async fn list_balloons(State(state): State<AppState>) -> impl IntoResponse {
    // The feed client degrades to an empty snapshot on upstream failure,
    // so this endpoint always answers 200.
    let fixes = clean_fixes(state.feed.snapshot().await);
    Json(fixes)
}
