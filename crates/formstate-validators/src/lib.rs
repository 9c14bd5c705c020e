//! Field validators for formstate
//!
//! This crate provides the rules a form field can carry: presence
//! (`Required`), email format (`Email`), minimum length (`MinLength`) and
//! mandatory opt-in (`RequiredTrue`). Validators are pure predicates over a
//! value and never short-circuit each other; the form layer evaluates all of
//! them and aggregates the results.
//!
//! Values are inspected through the [`InputValue`] trait so the same rules
//! work on plain strings, booleans, options and the form crate's own value
//! type.

pub mod email;
pub mod errors;
pub mod kind;
pub mod required;
pub mod string;
pub mod value;

pub use email::EmailValidator;
pub use errors::{ValidationError, ValidationResult};
pub use kind::ValidatorKind;
pub use required::{RequiredTrueValidator, RequiredValidator};
pub use string::MinLengthValidator;
pub use value::InputValue;

/// Re-export commonly used types
pub mod prelude {
	pub use crate::email::*;
	pub use crate::errors::*;
	pub use crate::kind::*;
	pub use crate::required::*;
	pub use crate::string::*;
	pub use crate::value::*;
	pub use crate::Validator;
}

/// Trait for validators
pub trait Validator<T: ?Sized> {
	fn validate(&self, value: &T) -> ValidationResult<()>;
}
