//! Validation errors

use serde::Serialize;

/// A single failed validation rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "code")]
pub enum ValidationError {
	#[error("This field is required")]
	#[serde(rename = "required")]
	Required,

	#[error("Enter a valid email address: {value}")]
	#[serde(rename = "email")]
	InvalidEmail { value: String },

	#[error("Ensure this value has at least {min} characters (it has {length})")]
	#[serde(rename = "minlength")]
	TooShort { length: usize, min: usize },

	#[error("This box must be checked")]
	#[serde(rename = "required_true")]
	MustBeTrue,
}

impl ValidationError {
	/// Stable key for the failed rule.
	///
	/// Views use this to pick which error message element to show for a
	/// field, so the values never change between releases.
	///
	/// # Examples
	///
	/// ```
	/// use formstate_validators::ValidationError;
	///
	/// assert_eq!(ValidationError::Required.code(), "required");
	/// assert_eq!(ValidationError::TooShort { length: 3, min: 8 }.code(), "minlength");
	/// ```
	pub fn code(&self) -> &'static str {
		match self {
			Self::Required => "required",
			Self::InvalidEmail { .. } => "email",
			Self::TooShort { .. } => "minlength",
			Self::MustBeTrue => "required_true",
		}
	}
}

pub type ValidationResult<T> = Result<T, ValidationError>;
