use axum::{extract::State, Json};
use http::StatusCode;
use shared_data::{FieldErrors, RegistrationInput, SubmissionResult};

use crate::AppState;

/// `POST /api/register`. The form already validates before it gets here, but anything can hit
/// this endpoint, so the rules are checked again before anything is forwarded.
pub async fn register(
	State(state): State<AppState>,
	Json(input): Json<RegistrationInput>
) -> Result<Json<SubmissionResult>, (StatusCode, Json<FieldErrors>)> {
	let errs = shared_data::validate(&input);
	if !errs.is_empty() {
		tracing::warn!(%errs, "Rejected invalid registration");
		return Err((StatusCode::UNPROCESSABLE_ENTITY, Json(errs)));
	}

	Ok(Json(state.dispatcher.submit(&input).await))
}
