//! Form errors

use formstate_validators::ValidationError;
use indexmap::IndexMap;

/// Validation failures per field, in declaration order
pub type FieldErrors = IndexMap<String, Vec<ValidationError>>;

/// Submission was blocked by at least one failing validator
///
/// Carries the notice the presentation layer should show and the failures
/// of every invalid field. Field values are never included.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Form submission rejected: {} invalid field(s)", .errors.len())]
pub struct ValidationRejected {
	notice: String,
	errors: FieldErrors,
}

impl ValidationRejected {
	pub fn new(notice: impl Into<String>, errors: FieldErrors) -> Self {
		Self {
			notice: notice.into(),
			errors,
		}
	}

	/// User-facing notice text
	pub fn notice(&self) -> &str {
		&self.notice
	}

	pub fn errors(&self) -> &FieldErrors {
		&self.errors
	}

	/// Names of the invalid fields, in declaration order.
	pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
		self.errors.keys().map(String::as_str)
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
	#[error("Unknown field: {0}")]
	UnknownField(String),
	#[error(transparent)]
	Rejected(#[from] ValidationRejected),
}

pub type FormResult<T> = Result<T, FormError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_rejected_display_counts_fields() {
		// Arrange
		let mut errors = FieldErrors::new();
		errors.insert("username".to_string(), vec![ValidationError::Required]);
		errors.insert("isFeatured".to_string(), vec![ValidationError::MustBeTrue]);

		// Act
		let rejected = ValidationRejected::new("not", errors);

		// Assert
		assert_eq!(
			rejected.to_string(),
			"Form submission rejected: 2 invalid field(s)"
		);
		assert_eq!(rejected.notice(), "not");
		assert_eq!(
			rejected.invalid_fields().collect::<Vec<_>>(),
			vec!["username", "isFeatured"]
		);
	}

	#[rstest]
	fn test_form_error_from_rejected() {
		let rejected = ValidationRejected::new("not", FieldErrors::new());

		let error: FormError = rejected.clone().into();

		assert_eq!(error, FormError::Rejected(rejected));
	}

	#[rstest]
	fn test_unknown_field_display() {
		let error = FormError::UnknownField("nickname".to_string());

		assert_eq!(error.to_string(), "Unknown field: nickname");
	}
}
