/*
 * Responsibility
 * - POST /registrations/inspect
 * - DTO validation -> session_registration::create_if_valid -> response DTO
 * - 登録ヘッダが不正でもエラーにしない (空の registrations を返す)
 */
use axum::{Json, extract::State};
use tracing::debug;

use crate::{
    api::v1::dto::registrations::{InspectRequest, InspectResponse},
    error::AppError,
    services::session_registration,
    state::AppState,
};

pub async fn inspect(
    State(state): State<AppState>,
    Json(req): Json<InspectRequest>,
) -> Result<Json<InspectResponse>, AppError> {
    if req.headers.len() > state.max_header_entries {
        return Err(AppError::payload_too_large(
            "TOO_MANY_HEADERS",
            format!("at most {} headers are accepted", state.max_header_entries),
        ));
    }

    let request_url = req
        .request_url()
        .map_err(|m| AppError::bad_request("INVALID_REQUEST_URL", m))?;
    let headers = req
        .header_map()
        .map_err(|m| AppError::bad_request("INVALID_HEADER", m))?;

    let registrations = session_registration::create_if_valid(&request_url, &headers);
    debug!(
        %request_url,
        count = registrations.len(),
        "inspected registration headers"
    );

    Ok(Json(InspectResponse {
        registrations: registrations.into_iter().map(Into::into).collect(),
    }))
}
