use chrono::Utc;
use http::StatusCode;
use shared_data::{RegistrationInput, SubmissionResult, WebhookPayload, DELIVERY_FAILED, UNEXPECTED_ERROR};
use url::Url;

#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
	/// The webhook answered, but not with a 2xx
	#[error("webhook responded with {status}: {body}")]
	Delivery {
		status: StatusCode,
		body: String
	},
	/// We never got a whole answer (dns, connection refused, timeout, a body cut short, ...)
	#[error("couldn't reach webhook: {0}")]
	Transport(#[from] reqwest::Error)
}

impl DispatchError {
	/// What the attendee gets to see. The details only go to the logs.
	#[must_use]
	pub fn user_message(&self) -> &'static str {
		match self {
			Self::Delivery { .. } => DELIVERY_FAILED,
			Self::Transport(_) => UNEXPECTED_ERROR,
		}
	}
}

/// Forwards registrations to the webhook. One POST per call: no retries, no idempotency key, so a
/// resubmission after a failure can show up downstream twice.
#[derive(Clone, Debug)]
pub struct Dispatcher {
	client: reqwest::Client,
	url: Url
}

impl Dispatcher {
	#[must_use]
	pub fn new(url: Url) -> Self {
		Self { client: reqwest::Client::new(), url }
	}

	pub async fn send(&self, input: &RegistrationInput) -> Result<(), DispatchError> {
		let payload = WebhookPayload::new(input, Utc::now());

		// `.json()` also sets `Content-Type: application/json`
		let response = self.client
			.post(self.url.clone())
			.json(&payload)
			.send()
			.await?;

		let status = response.status();
		if status.is_success() {
			return Ok(());
		}

		// a body that breaks off halfway is a transport problem, not a rejection
		let body = response.text().await?;

		Err(DispatchError::Delivery { status, body })
	}

	/// Sends one registration and boils whatever happened down to what the form shows
	pub async fn submit(&self, input: &RegistrationInput) -> SubmissionResult {
		match self.send(input).await {
			Ok(()) => {
				tracing::info!(classe = %input.classe, "Forwarded registration to webhook");
				SubmissionResult::success()
			},
			Err(err) => {
				match &err {
					DispatchError::Delivery { status, body } =>
						tracing::error!(%status, body = %body, "Webhook rejected registration"),
					DispatchError::Transport(e) =>
						tracing::error!(error = %e, "Couldn't deliver registration to webhook"),
				}
				SubmissionResult::failure(err.user_message())
			}
		}
	}
}
