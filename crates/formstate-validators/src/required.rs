//! Presence validators

use crate::{InputValue, ValidationError, ValidationResult, Validator};

/// Fails when the value is empty
///
/// Booleans and numbers are never empty, so an unticked checkbox passes.
/// Use [`RequiredTrueValidator`] for mandatory opt-ins.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredValidator;

impl RequiredValidator {
	/// Creates a new RequiredValidator.
	///
	/// # Examples
	///
	/// ```
	/// use formstate_validators::{RequiredValidator, Validator};
	///
	/// let validator = RequiredValidator::new();
	/// assert!(validator.validate("john").is_ok());
	/// assert!(validator.validate("").is_err());
	/// ```
	pub fn new() -> Self {
		Self
	}
}

impl<V: InputValue + ?Sized> Validator<V> for RequiredValidator {
	fn validate(&self, value: &V) -> ValidationResult<()> {
		if value.is_empty_value() {
			Err(ValidationError::Required)
		} else {
			Ok(())
		}
	}
}

/// Passes only when the value is exactly boolean `true`
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredTrueValidator;

impl RequiredTrueValidator {
	/// Creates a new RequiredTrueValidator.
	///
	/// # Examples
	///
	/// ```
	/// use formstate_validators::{RequiredTrueValidator, Validator};
	///
	/// let validator = RequiredTrueValidator::new();
	/// assert!(validator.validate(&true).is_ok());
	/// assert!(validator.validate(&false).is_err());
	/// ```
	pub fn new() -> Self {
		Self
	}
}

impl<V: InputValue + ?Sized> Validator<V> for RequiredTrueValidator {
	fn validate(&self, value: &V) -> ValidationResult<()> {
		if value.is_true() {
			Ok(())
		} else {
			Err(ValidationError::MustBeTrue)
		}
	}
}
