// A throwaway webhook that records everything posted to it, so tests can see exactly what the
// dispatcher sent and how many times.

use axum::{body::Bytes, extract::State, http::{header::CONTENT_TYPE, HeaderMap, StatusCode}, routing::post, Router};
use std::time::Duration;
use tokio::{io::{AsyncReadExt, AsyncWriteExt}, net::{TcpListener, TcpStream}, sync::mpsc};
use url::Url;

pub const REJECTION_BODY: &str = "workflow blew up";

pub struct Received {
	pub content_type: Option<String>,
	pub body: serde_json::Value
}

pub struct Webhook {
	pub url: Url,
	rx: mpsc::UnboundedReceiver<Received>
}

impl Webhook {
	pub async fn next(&mut self) -> Received {
		tokio::time::timeout(Duration::from_secs(5), self.rx.recv())
			.await
			.expect("webhook wasn't called in time")
			.expect("webhook server went away")
	}

	// handlers record before responding, so anything sent is already queued by the time the
	// dispatcher has its answer
	pub fn assert_no_more(&mut self) {
		assert!(self.rx.try_recv().is_err(), "webhook was called more times than expected");
	}
}

#[derive(Clone)]
struct HookState {
	tx: mpsc::UnboundedSender<Received>,
	status: StatusCode
}

async fn record(State(state): State<HookState>, headers: HeaderMap, body: Bytes) -> (StatusCode, &'static str) {
	let content_type = headers.get(CONTENT_TYPE)
		.and_then(|v| v.to_str().ok())
		.map(str::to_string);
	let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);

	_ = state.tx.send(Received { content_type, body });

	let text = if state.status.is_success() { "" } else { REJECTION_BODY };
	(state.status, text)
}

/// Starts a webhook on a random local port that answers every POST with `status`
pub async fn spawn_webhook(status: StatusCode) -> Webhook {
	let (tx, rx) = mpsc::unbounded_channel();
	let app = Router::new()
		.route("/hook", post(record))
		.with_state(HookState { tx, status });

	let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind webhook");
	let addr = listener.local_addr().expect("webhook addr");
	tokio::spawn(async move {
		_ = axum::serve(listener, app).await;
	});

	Webhook {
		url: Url::parse(&format!("http://{addr}/hook")).expect("webhook url"),
		rx
	}
}

/// A url that nothing is listening on
pub async fn unused_url() -> Url {
	let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
	let addr = listener.local_addr().expect("addr");
	drop(listener);
	Url::parse(&format!("http://{addr}/hook")).expect("url")
}

/// Accepts a single request and answers 500 with a body that stops well short of its
/// `content-length`, then hangs up
pub async fn spawn_truncating_webhook() -> Url {
	let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
	let addr = listener.local_addr().expect("addr");

	tokio::spawn(async move {
		let Ok((mut stream, _)) = listener.accept().await else {
			return;
		};
		read_request(&mut stream).await;
		_ = stream.write_all(
			format!("HTTP/1.1 500 Internal Server Error\r\ncontent-length: 100\r\n\r\n{REJECTION_BODY}").as_bytes()
		).await;
	});

	Url::parse(&format!("http://{addr}/hook")).expect("url")
}

// reads the whole request so closing the socket afterwards is a clean hangup and not a reset
async fn read_request(stream: &mut TcpStream) {
	let mut buf = Vec::new();
	let mut chunk = [0; 1024];

	loop {
		if let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
			let head = String::from_utf8_lossy(&buf[..head_end]).to_ascii_lowercase();
			let len = head.lines()
				.find_map(|line| line.strip_prefix("content-length:"))
				.and_then(|v| v.trim().parse::<usize>().ok())
				.unwrap_or(0);

			if buf.len() >= head_end + 4 + len {
				return;
			}
		}

		match stream.read(&mut chunk).await {
			Ok(0) | Err(_) => return,
			Ok(n) => buf.extend_from_slice(&chunk[..n]),
		}
	}
}
