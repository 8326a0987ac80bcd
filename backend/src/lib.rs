use axum::{routing::{get, post}, Router};
use dispatch::Dispatcher;
use std::path::PathBuf;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub mod config;
pub mod dispatch;
pub mod landing;
pub mod register;

#[cfg(test)]
mod test_hook;

#[derive(Clone)]
pub struct AppState {
	pub dispatcher: Dispatcher,
	pub frontend_dir: PathBuf
}

impl AppState {
	pub fn new(dispatcher: Dispatcher, frontend_dir: impl Into<PathBuf>) -> Self {
		Self { dispatcher, frontend_dir: frontend_dir.into() }
	}
}

pub fn app(state: AppState) -> Router {
	Router::new()
		.route("/", get(landing::landing_page))
		.route("/api/register", post(register::register))
		.nest_service(landing::DIST_PREFIX, ServeDir::new(&state.frontend_dir))
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}
