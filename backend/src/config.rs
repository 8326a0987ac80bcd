use std::{net::{IpAddr, Ipv4Addr, SocketAddr}, path::PathBuf};
use url::Url;

/// Where registrations end up. Can be pointed elsewhere with `WEBHOOK_URL`.
pub const DEFAULT_WEBHOOK_URL: &str = "https://n8n.raquibi.com/webhook/bb535f86-8cbd-488a-b71e-8b0d33fae87d";
pub const DEFAULT_FRONTEND_DIR: &str = "frontend/dist";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
	#[error("{key} is set to {value:?}, which isn't a valid {expected}")]
	Unparseable {
		key: &'static str,
		value: String,
		expected: &'static str
	},
	#[error("WEBHOOK_URL ({0:?}) isn't a valid url: {1}")]
	WebhookUrl(String, url::ParseError)
}

#[derive(Debug, Clone)]
pub struct Settings {
	pub addr: SocketAddr,
	pub webhook_url: Url,
	pub frontend_dir: PathBuf
}

impl Settings {
	/// Reads everything from the environment (and `.env`, if there is one)
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| dotenv::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		// unset and empty are treated the same; set-but-garbage is an error instead of silently
		// falling back, since that's almost always a typo
		let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

		macro_rules! env_parse{
			($key:expr, $default:expr, $type:ty, $expected:expr) => {
				match var($key) {
					None => $default,
					Some(v) => v.parse::<$type>()
						.map_err(|_| ConfigError::Unparseable { key: $key, value: v, expected: $expected })?
				}
			}
		}

		let port = env_parse!("BACKEND_PORT", 8080, u16, "port");
		let host = env_parse!("BACKEND_HOST", IpAddr::V4(Ipv4Addr::LOCALHOST), IpAddr, "ip address");

		let webhook = var("WEBHOOK_URL").unwrap_or_else(|| DEFAULT_WEBHOOK_URL.into());
		let webhook_url = Url::parse(&webhook)
			.map_err(|e| ConfigError::WebhookUrl(webhook, e))?;

		let frontend_dir = var("FRONTEND_DIR")
			.map_or_else(|| PathBuf::from(DEFAULT_FRONTEND_DIR), PathBuf::from);

		Ok(Self {
			addr: SocketAddr::new(host, port),
			webhook_url,
			frontend_dir
		})
	}
}
