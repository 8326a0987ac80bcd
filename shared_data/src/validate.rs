use regex::Regex;
use std::sync::LazyLock;

use crate::{CLASSES, Field, FieldErrors, RegistrationInput};

const MIN_NAME_LEN: usize = 3;
const MIN_PHONE_LEN: usize = 10;

// The `regex` crate has no lookaround, so the "doesn't start with a dot" and "no consecutive dots"
// parts of the usual email check are done by hand in `is_valid_email`. Unicode is off so the case
// folding stays ASCII-only (`ſ` and the Kelvin sign would otherwise pass as `s` and `k`)
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i-u)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
		.expect("email regex is valid")
});

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
	!email.starts_with('.') && !email.contains("..") && EMAIL_SHAPE.is_match(email)
}

/// Checks every field and collects a message for each one that fails. An empty result means the
/// input can be sent.
#[must_use]
pub fn validate(input: &RegistrationInput) -> FieldErrors {
	let mut errs = FieldErrors::default();

	if input.full_name.chars().count() < MIN_NAME_LEN {
		errs.insert(Field::FullName, "Name must be at least 3 characters");
	}

	if input.phone.chars().count() < MIN_PHONE_LEN {
		errs.insert(Field::Phone, "Phone number must be at least 10 characters");
	}

	if !is_valid_email(&input.email) {
		errs.insert(Field::Email, "Invalid email address");
	}

	if input.classe.is_empty() {
		errs.insert(Field::Classe, "Please select a class");
	} else if !CLASSES.contains(&input.classe.as_str()) {
		errs.insert(Field::Classe, "Please select a valid class");
	}

	errs
}

#[cfg(test)]
mod tests {
	use super::*;

	fn valid() -> RegistrationInput {
		RegistrationInput {
			full_name: "Youssef".into(),
			phone: "0600000000".into(),
			email: "youssef@ofppt.ma".into(),
			classe: "WFS203".into()
		}
	}

	#[test]
	fn valid_input_has_no_errors() {
		assert!(validate(&valid()).is_empty());
	}

	#[test]
	fn short_names_are_rejected() {
		for name in ["", "a", "Al"] {
			let input = RegistrationInput { full_name: name.into(), ..valid() };
			let errs = validate(&input);
			assert_eq!(errs.get(Field::FullName), Some("Name must be at least 3 characters"), "{name:?}");
			assert_eq!(errs.0.len(), 1);
		}

		let input = RegistrationInput { full_name: "Ali".into(), ..valid() };
		assert!(validate(&input).is_empty());
	}

	#[test]
	fn name_length_counts_characters_not_bytes() {
		// two characters, four bytes
		let input = RegistrationInput { full_name: "éé".into(), ..valid() };
		assert!(validate(&input).get(Field::FullName).is_some());
	}

	#[test]
	fn phone_needs_ten_characters() {
		let input = RegistrationInput { phone: "060000000".into(), ..valid() };
		assert_eq!(validate(&input).get(Field::Phone), Some("Phone number must be at least 10 characters"));

		// no format checks beyond length
		let input = RegistrationInput { phone: "+212 6 00 00".into(), ..valid() };
		assert!(validate(&input).is_empty());
	}

	#[test]
	fn email_shapes() {
		for good in [
			"a@b.co",
			"first.last@example.com",
			"o'neil+tag@mail.example.org",
			"UPPER@EXAMPLE.COM",
			"x_y-z@sub-domain.example.ma",
		] {
			assert!(is_valid_email(good), "{good} should be valid");
		}

		for bad in [
			"",
			"plainaddress",
			"@example.com",
			"user@",
			"user@example",
			"user@example.c",
			".user@example.com",
			"us..er@example.com",
			"user.@example.com",
			"user@-example.com",
			"user@example..com",
			"user name@example.com",
			"user@example.com ",
			"user@exam_ple.com",
			"\u{17f}@example.com",
			"user@example.\u{212a}\u{212a}",
			"user@\u{212a}elvin.com",
			"n\u{f3}ur@example.com",
		] {
			assert!(!is_valid_email(bad), "{bad:?} should be invalid");
		}
	}

	#[test]
	fn class_must_come_from_the_list() {
		let input = RegistrationInput { classe: String::new(), ..valid() };
		assert_eq!(validate(&input).get(Field::Classe), Some("Please select a class"));

		let input = RegistrationInput { classe: "DEV999".into(), ..valid() };
		assert_eq!(validate(&input).get(Field::Classe), Some("Please select a valid class"));

		// codes are case sensitive
		let input = RegistrationInput { classe: "dev101".into(), ..valid() };
		assert!(validate(&input).get(Field::Classe).is_some());

		for class in CLASSES {
			let input = RegistrationInput { classe: (*class).to_string(), ..valid() };
			assert!(validate(&input).is_empty(), "{class}");
		}
	}

	#[test]
	fn every_failing_field_is_reported() {
		let errs = validate(&RegistrationInput::default());
		assert_eq!(errs.0.keys().copied().collect::<Vec<_>>(), Field::ALL.to_vec());
	}
}
