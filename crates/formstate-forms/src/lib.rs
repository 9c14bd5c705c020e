//! Form state and validation for formstate
//!
//! This crate models the client-side state of one form instance:
//! - Named fields with a current value, ordered validators and a touched flag
//! - Aggregate validity that evaluates every validator of every field
//! - Submission that either rejects with per-field errors or yields the
//!   ordered value mapping
//! - Explicit input binding and submission listeners in place of framework
//!   two-way binding and blocking alerts
//! - Two ready-made registration forms, one declared up front and one
//!   inferred from bound inputs

pub mod binding;
pub mod components;
pub mod controller;
pub mod error;
pub mod events;
pub mod field;
pub mod schema;
pub mod settings;
pub mod state;
pub mod value;

pub use binding::{InputBinding, InputEvent, RawInput};
pub use components::{ReactiveRegistration, SELECT_OPTIONS, TemplateDrivenRegistration};
pub use controller::{FormController, SUBMIT_LOG_TARGET};
pub use error::{FieldErrors, FormError, FormResult, ValidationRejected};
pub use events::{SubmissionEvent, SubmissionListener};
pub use field::{Field, FieldSpec, Widget};
pub use schema::FormSchema;
pub use settings::{FormSettings, SettingsError, UnknownFieldPolicy};
pub use state::{FormState, FormValues};
pub use value::{FieldValue, FileRef};
