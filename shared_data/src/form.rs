use crate::{validate, Field, FieldErrors, RegistrationInput, SubmissionResult};

pub const FALLBACK_ERROR: &str = "Something went wrong. Please try again.";
pub const NETWORK_ERROR: &str = "Network error. Please check your connection.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
	#[default]
	Idle,
	Loading,
	Success,
	Error
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
	#[error("a submission is already in flight")]
	InProgress,
	#[error("this form was already submitted; reset it to send another")]
	Completed,
	#[error("some fields are invalid: {0}")]
	Invalid(FieldErrors)
}

/// Everything the registration form needs to remember between renders: what's been typed, what's
/// wrong with it, and where the last submission got to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
	input: RegistrationInput,
	field_errors: FieldErrors,
	status: SubmissionStatus,
	error_message: Option<String>,
	// the snapshot that was validated and handed off, kept separate from `input` since the
	// fields can still be edited while we wait
	in_flight: Option<RegistrationInput>
}

impl FormState {
	#[must_use]
	pub fn input(&self) -> &RegistrationInput {
		&self.input
	}

	#[must_use]
	pub fn status(&self) -> SubmissionStatus {
		self.status
	}

	#[must_use]
	pub fn field_error(&self, field: Field) -> Option<&str> {
		self.field_errors.get(field)
	}

	#[must_use]
	pub fn error_message(&self) -> Option<&str> {
		self.error_message.as_deref()
	}

	#[must_use]
	pub fn in_flight(&self) -> Option<&RegistrationInput> {
		self.in_flight.as_ref()
	}

	pub fn set_field(&mut self, field: Field, value: String) {
		self.input.set(field, value);
	}

	/// Validates what's been typed and, if it's all good, moves to `Loading` and returns the
	/// snapshot that should be sent. Invalid input only updates the per-field errors; the status
	/// stays where it was.
	pub fn begin_submit(&mut self) -> Result<RegistrationInput, SubmitRejected> {
		match self.status {
			SubmissionStatus::Loading => return Err(SubmitRejected::InProgress),
			SubmissionStatus::Success => return Err(SubmitRejected::Completed),
			SubmissionStatus::Idle | SubmissionStatus::Error => ()
		}

		let errs = validate(&self.input);
		if !errs.is_empty() {
			self.field_errors = errs.clone();
			return Err(SubmitRejected::Invalid(errs));
		}

		self.field_errors = FieldErrors::default();
		self.error_message = None;
		self.status = SubmissionStatus::Loading;
		self.in_flight = Some(self.input.clone());
		Ok(self.input.clone())
	}

	/// Applies what the server said about the in-flight submission. Does nothing unless we're
	/// actually waiting on one.
	pub fn resolve(&mut self, result: SubmissionResult) {
		if self.status != SubmissionStatus::Loading {
			return;
		}

		self.in_flight = None;
		if result.success {
			self.status = SubmissionStatus::Success;
			self.input = RegistrationInput::default();
		} else {
			self.status = SubmissionStatus::Error;
			self.error_message = Some(result.error.unwrap_or_else(|| FALLBACK_ERROR.into()));
		}
	}

	/// For when the request never got a usable answer at all
	pub fn fail_network(&mut self) {
		self.resolve(SubmissionResult::failure(NETWORK_ERROR));
	}

	/// "Submit another": only meaningful after a successful submission
	pub fn reset(&mut self) {
		if self.status == SubmissionStatus::Success {
			*self = Self::default();
		}
	}
}
