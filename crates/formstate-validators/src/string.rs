//! String validators

use crate::{InputValue, ValidationError, ValidationResult, Validator};

/// Minimum length validator
///
/// Length is counted in characters, not bytes. Empty values and values
/// without a length (numbers, booleans) pass.
#[derive(Debug, Clone, Copy)]
pub struct MinLengthValidator {
	min: usize,
}

impl MinLengthValidator {
	/// Creates a new MinLengthValidator with the specified minimum length.
	///
	/// # Examples
	///
	/// ```
	/// use formstate_validators::{MinLengthValidator, Validator};
	///
	/// let validator = MinLengthValidator::new(8);
	/// assert!(validator.validate("12345678").is_ok());
	/// assert!(validator.validate("1234567").is_err());
	/// ```
	pub fn new(min: usize) -> Self {
		Self { min }
	}

	pub fn min(&self) -> usize {
		self.min
	}
}

impl<V: InputValue + ?Sized> Validator<V> for MinLengthValidator {
	fn validate(&self, value: &V) -> ValidationResult<()> {
		if value.is_empty_value() {
			return Ok(());
		}

		match value.char_length() {
			Some(length) if length < self.min => Err(ValidationError::TooShort {
				length,
				min: self.min,
			}),
			_ => Ok(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	#[rstest]
	fn test_min_length_validator_boundary() {
		let validator = MinLengthValidator::new(8);

		assert!(validator.validate("12345678").is_ok());
		assert!(validator.validate("123456789").is_ok());
		assert_eq!(
			validator.validate("1234567"),
			Err(ValidationError::TooShort { length: 7, min: 8 })
		);
	}

	#[rstest]
	fn test_min_length_counts_characters() {
		let validator = MinLengthValidator::new(4);

		// 4 characters, 8 bytes
		assert!(validator.validate("ßßßß").is_ok());
		assert!(validator.validate("ßßß").is_err());
	}

	#[rstest]
	fn test_min_length_ignores_empty_and_lengthless() {
		let validator = MinLengthValidator::new(8);

		assert!(validator.validate("").is_ok());
		assert!(validator.validate(&None::<String>).is_ok());
		assert!(validator.validate(&true).is_ok());
	}

	#[rstest]
	fn test_min_length_zero() {
		let validator = MinLengthValidator::new(0);

		assert!(validator.validate("a").is_ok());
		assert_eq!(validator.min(), 0);
	}

	proptest! {
		#[test]
		fn prop_min_length_matches_char_count(value in "\\PC{1,32}", min in 0usize..40) {
			let validator = MinLengthValidator::new(min);
			let expected = value.chars().count() >= min;

			prop_assert_eq!(validator.validate(value.as_str()).is_ok(), expected);
		}
	}
}
