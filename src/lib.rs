//! # formstate
//!
//! Client-side form state for Rust: named fields, declarative validators,
//! aggregate validity and a submission step that either yields the ordered
//! values or rejects with per-field errors.
//!
//! ## Feature Flags
//!
//! - `forms` (default) - Form state, the controller and the two registration
//!   components
//!
//! Validators are always available.
//!
//! ## Quick Example
//!
//! ```
//! use formstate::prelude::*;
//!
//! let schema = FormSchema::new()
//!     .field(
//!         FieldSpec::new("email")
//!             .with_default("")
//!             .with_validators([ValidatorKind::Required, ValidatorKind::Email]),
//!     )
//!     .field(
//!         FieldSpec::new("accept")
//!             .with_default(false)
//!             .with_validator(ValidatorKind::RequiredTrue),
//!     );
//! let mut form = FormController::initialize(&schema);
//!
//! form.set_value("email", "a@b.com").unwrap();
//! assert!(form.submit().is_err());
//!
//! form.set_value("accept", true).unwrap();
//! let values = form.submit().unwrap();
//! assert_eq!(values.names().collect::<Vec<_>>(), vec!["email", "accept"]);
//! ```

pub use formstate_validators as validators;
pub use formstate_validators::{
	EmailValidator, InputValue, MinLengthValidator, RequiredTrueValidator, RequiredValidator,
	ValidationError, ValidationResult, Validator, ValidatorKind,
};

#[cfg(feature = "forms")]
pub use formstate_forms as forms;
#[cfg(feature = "forms")]
pub use formstate_forms::{
	FieldErrors, FieldSpec, FieldValue, FileRef, FormController, FormError, FormResult, FormSchema,
	FormSettings, FormValues, InputBinding, InputEvent, RawInput, ReactiveRegistration,
	SubmissionEvent, SubmissionListener, TemplateDrivenRegistration, ValidationRejected,
	Widget,
};

// Re-export common external dependencies
pub use serde::{Deserialize, Serialize};

pub mod prelude {
	pub use crate::{
		InputValue, ValidationError, ValidationResult, Validator, ValidatorKind,
	};

	#[cfg(feature = "forms")]
	pub use crate::{
		FieldSpec, FieldValue, FileRef, FormController, FormError, FormSchema, FormSettings, FormValues,
		InputBinding, InputEvent, RawInput, SubmissionEvent, ValidationRejected, Widget,
	};

	pub use serde::{Deserialize, Serialize};
}
