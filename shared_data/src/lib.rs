use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeMap;

mod validate;
mod form;

pub use validate::{validate, is_valid_email};
pub use form::{FormState, SubmissionStatus, SubmitRejected, FALLBACK_ERROR, NETWORK_ERROR};

/// Every class an attendee can register under, in the order they're shown in the form.
pub const CLASSES: &[&str] = &[
	"DEV101", "DEV102", "DEV103", "DEV104", "DEV105", "DEV106", "DEV107", "DEV108", "DEV109", "DEV110",
	"ID101", "ID102", "ID103", "ID104", "ID105", "ID106", "ID107", "ID108", "ID109",
	"WFS201", "WFS202", "WFS203", "WFS204", "WFS205", "WFS206", "WFS207", "WFS208",
	"IDoSR201", "IDoSR202", "IDoSR203", "IDoSR204", "IDoSR205",
	"IDoCC", "IDoCS",
];

/// Tag attached to every record we forward, so whoever reads the webhook knows where it came from
pub const SOURCE: &str = "STARTUP MINDS Registration Site";

pub const DELIVERY_FAILED: &str = "Failed to send data to webhook.";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
	pub full_name: String,
	pub phone: String,
	pub email: String,
	pub classe: String
}

impl RegistrationInput {
	#[must_use]
	pub fn get(&self, field: Field) -> &str {
		match field {
			Field::FullName => &self.full_name,
			Field::Phone => &self.phone,
			Field::Email => &self.email,
			Field::Classe => &self.classe,
		}
	}

	pub fn set(&mut self, field: Field, value: String) {
		let slot = match field {
			Field::FullName => &mut self.full_name,
			Field::Phone => &mut self.phone,
			Field::Email => &mut self.email,
			Field::Classe => &mut self.classe,
		};
		*slot = value;
	}
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Field {
	FullName,
	Phone,
	Email,
	Classe
}

impl Field {
	pub const ALL: [Self; 4] = [Self::FullName, Self::Phone, Self::Email, Self::Classe];

	/// The name this field goes by in JSON and in the form's `name` attributes
	#[must_use]
	pub fn key(self) -> &'static str {
		match self {
			Self::FullName => "fullName",
			Self::Phone => "phone",
			Self::Email => "email",
			Self::Classe => "classe",
		}
	}
}

/// Message for each field that failed validation. Fields that passed aren't present.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FieldErrors(pub BTreeMap<Field, String>);

impl FieldErrors {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn get(&self, field: Field) -> Option<&str> {
		self.0.get(&field).map(String::as_str)
	}

	pub fn insert(&mut self, field: Field, msg: impl Into<String>) {
		self.0.insert(field, msg.into());
	}
}

impl std::fmt::Display for FieldErrors {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut first = true;
		for (field, msg) in &self.0 {
			if !first {
				f.write_str("; ")?;
			}
			first = false;
			write!(f, "{}: {msg}", field.key())?;
		}
		Ok(())
	}
}

/// What actually gets sent to the webhook: the attendee's details plus when and where they came
/// from.
#[derive(serde::Serialize, Debug)]
pub struct WebhookPayload<'a> {
	#[serde(flatten)]
	pub input: &'a RegistrationInput,
	pub timestamp: String,
	pub source: &'static str
}

impl<'a> WebhookPayload<'a> {
	#[must_use]
	pub fn new(input: &'a RegistrationInput, at: DateTime<Utc>) -> Self {
		Self {
			input,
			timestamp: iso_timestamp(at),
			source: SOURCE
		}
	}
}

/// Formats like javascript's `Date.toISOString()`, e.g. `2026-10-18T09:30:00.000Z`
#[must_use]
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
	at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SubmissionResult {
	pub success: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>
}

impl SubmissionResult {
	#[must_use]
	pub fn success() -> Self {
		Self { success: true, error: None }
	}

	#[must_use]
	pub fn failure(msg: impl Into<String>) -> Self {
		Self { success: false, error: Some(msg.into()) }
	}
}

pub static BASE_STYLE: &str = r#"
* {
	--body-background: #09090b;
	--main-text: #f4f4f5;
	--secondary-text: #a1a1aa;
	--muted-text: #52525b;
	--panel-background: rgba(24, 24, 27, 0.6);
	--border-color: #27272a;
	--accent: #6366f1;
	--accent-soft: rgba(99, 102, 241, 0.1);
	--error: #ef4444;
	--success: #22c55e;
	font-family: Inter, system-ui, sans-serif;
	color: var(--main-text);
	box-sizing: border-box;
}
body {
	margin: 0;
	min-height: 100vh;
	background-color: var(--body-background);
	background-image:
		radial-gradient(at 20% 10%, rgba(99, 102, 241, 0.25) 0, transparent 50%),
		radial-gradient(at 80% 0%, rgba(168, 85, 247, 0.2) 0, transparent 50%);
}
input, select {
	width: 100%;
	padding: 12px 16px;
	border-radius: 12px;
	background-color: rgba(24, 24, 27, 0.5);
	border: 1px solid var(--border-color);
	font-size: 16px;
}
input.invalid, select.invalid {
	border-color: var(--error);
}
button {
	border-radius: 999px;
	border: 1px solid var(--border-color);
	background-color: transparent;
	padding: 8px 24px;
	cursor: pointer;
}
"#;
