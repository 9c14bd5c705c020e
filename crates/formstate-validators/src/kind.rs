//! Tagged validator rules

use crate::{
	EmailValidator, InputValue, MinLengthValidator, RequiredTrueValidator, RequiredValidator,
	ValidationResult, Validator,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validator rule a field schema can carry
///
/// The tag is what a schema declares; [`ValidatorKind::validate`] dispatches
/// to the matching validator. Deserializes from `"required"`, `"email"`,
/// `{ "min_length": 8 }` and `"required_true"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorKind {
	Required,
	Email,
	MinLength(usize),
	RequiredTrue,
}

impl ValidatorKind {
	/// Runs this rule against a value.
	///
	/// # Examples
	///
	/// ```
	/// use formstate_validators::ValidatorKind;
	///
	/// assert!(ValidatorKind::Required.validate("x").is_ok());
	/// assert!(ValidatorKind::MinLength(3).validate("xy").is_err());
	/// assert!(ValidatorKind::RequiredTrue.validate(&true).is_ok());
	/// ```
	pub fn validate<V: InputValue + ?Sized>(&self, value: &V) -> ValidationResult<()> {
		match self {
			Self::Required => RequiredValidator::new().validate(value),
			Self::Email => EmailValidator::new().validate(value),
			Self::MinLength(min) => MinLengthValidator::new(*min).validate(value),
			Self::RequiredTrue => RequiredTrueValidator::new().validate(value),
		}
	}
}

impl<V: InputValue + ?Sized> Validator<V> for ValidatorKind {
	fn validate(&self, value: &V) -> ValidationResult<()> {
		ValidatorKind::validate(self, value)
	}
}

impl fmt::Display for ValidatorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Required => write!(f, "required"),
			Self::Email => write!(f, "email"),
			Self::MinLength(min) => write!(f, "min_length({})", min),
			Self::RequiredTrue => write!(f, "required_true"),
		}
	}
}
