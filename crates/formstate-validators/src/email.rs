//! Email address validator

use crate::{InputValue, ValidationError, ValidationResult, Validator};
use regex::Regex;
use std::sync::LazyLock;

// Local part: dot-separated atoms of RFC 5322 atext characters.
// Domain: labels of alphanumerics and hyphens, never starting or ending
// with a hyphen, at most 63 characters each.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
	)
	.expect("EMAIL_REGEX: invalid regex pattern")
});

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;

/// Validates email address format
///
/// Empty values pass: presence is [`RequiredValidator`](crate::RequiredValidator)'s
/// concern, so an optional email field stays valid until something is typed.
/// Values without a textual form fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl EmailValidator {
	/// Creates a new EmailValidator.
	///
	/// # Examples
	///
	/// ```
	/// use formstate_validators::{EmailValidator, Validator};
	///
	/// let validator = EmailValidator::new();
	/// assert!(validator.validate("a@b.com").is_ok());
	/// assert!(validator.validate("not-an-email").is_err());
	/// ```
	pub fn new() -> Self {
		Self
	}

	/// Checks a string against the email grammar and length limits.
	pub fn is_valid_address(address: &str) -> bool {
		if address.len() > MAX_EMAIL_LENGTH {
			return false;
		}
		match address.split_once('@') {
			Some((local, _)) if local.len() <= MAX_LOCAL_PART_LENGTH => {
				EMAIL_REGEX.is_match(address)
			}
			_ => false,
		}
	}
}

impl<V: InputValue + ?Sized> Validator<V> for EmailValidator {
	fn validate(&self, value: &V) -> ValidationResult<()> {
		if value.is_empty_value() {
			return Ok(());
		}

		match value.as_text() {
			Some(text) if Self::is_valid_address(text) => Ok(()),
			Some(text) => Err(ValidationError::InvalidEmail {
				value: text.to_string(),
			}),
			None => Err(ValidationError::InvalidEmail {
				value: String::new(),
			}),
		}
	}
}
