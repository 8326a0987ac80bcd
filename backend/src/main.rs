use backend::{app, config::Settings, dispatch::Dispatcher, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
		)
		.init();

	let settings = Settings::from_env()?;
	tracing::info!("Read .env...");

	if !settings.frontend_dir.is_dir() {
		// the page still renders, the form just won't mount
		tracing::warn!(
			"FRONTEND_DIR ({}) isn't a directory; build the frontend with wasm-bindgen --target web first",
			settings.frontend_dir.display()
		);
	}

	tracing::info!("Forwarding registrations to {}", settings.webhook_url);
	let state = AppState::new(Dispatcher::new(settings.webhook_url), settings.frontend_dir);

	let listener = TcpListener::bind(settings.addr).await?;
	tracing::info!("Serving axum on {}...", settings.addr);

	axum::serve(listener, app(state)).await?;

	Ok(())
}
