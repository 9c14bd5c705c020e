//! Form validation controller
//!
//! [`FormController`] owns a [`FormState`], validates it and mediates
//! submission. It is driven by discrete, synchronous calls from the view:
//! input events go to [`FormController::handle_input`] or
//! [`FormController::set_value`], the submit trigger goes to
//! [`FormController::submit`]. The view reads state back through the
//! accessors to render values and error indicators.

use crate::binding::{InputBinding, InputEvent};
use crate::error::{FieldErrors, FormError, FormResult, ValidationRejected};
use crate::events::{SubmissionEvent, SubmissionListener};
use crate::field::{Field, FieldSpec};
use crate::schema::FormSchema;
use crate::settings::{FormSettings, UnknownFieldPolicy};
use crate::state::{FormState, FormValues};
use crate::value::FieldValue;
use formstate_validators::ValidationError;
use std::fmt;

/// Log target for accepted submissions.
pub const SUBMIT_LOG_TARGET: &str = "formstate::submit";

pub struct FormController {
	state: FormState,
	settings: FormSettings,
	listeners: Vec<Box<dyn SubmissionListener>>,
}

impl FormController {
	/// Create a controller with no fields
	///
	/// Template-driven forms start here and register fields as their
	/// inputs bind.
	///
	/// # Examples
	///
	/// ```
	/// use formstate_forms::FormController;
	///
	/// let controller = FormController::new();
	/// assert!(controller.state().is_empty());
	/// assert!(controller.is_valid());
	/// ```
	pub fn new() -> Self {
		Self {
			state: FormState::new(),
			settings: FormSettings::default(),
			listeners: Vec::new(),
		}
	}

	/// Create a controller with every schema field at its default value
	///
	/// # Examples
	///
	/// ```
	/// use formstate_forms::{FieldSpec, FormController, FormSchema};
	/// use formstate_validators::ValidatorKind;
	///
	/// let schema = FormSchema::new()
	///     .field(FieldSpec::new("username").with_default("").with_validator(ValidatorKind::Required));
	/// let controller = FormController::initialize(&schema);
	/// assert!(!controller.is_valid());
	/// assert!(!controller.is_submitted());
	/// ```
	pub fn initialize(schema: &FormSchema) -> Self {
		tracing::debug!(fields = schema.len(), "initializing form state");
		Self {
			state: FormState::from_schema(schema),
			..Self::new()
		}
	}

	pub fn with_settings(mut self, settings: FormSettings) -> Self {
		self.settings = settings;
		self
	}

	pub fn settings(&self) -> &FormSettings {
		&self.settings
	}

	pub fn state(&self) -> &FormState {
		&self.state
	}

	/// Add a field at its default value
	///
	/// A field of the same name is replaced in place.
	pub fn register(&mut self, spec: FieldSpec) {
		tracing::debug!(field = %spec.name, widget = ?spec.widget, "registering field");
		self.state.insert(spec);
	}

	/// Register the field behind an input binding unless it already exists.
	pub fn bind(&mut self, binding: &InputBinding) {
		if !self.state.contains(binding.field_name()) {
			self.register(binding.spec().clone());
		}
	}

	/// Register a listener for submission events.
	pub fn subscribe(&mut self, listener: impl SubmissionListener + 'static) {
		self.listeners.push(Box::new(listener));
	}

	/// Update a field's value and mark it touched
	///
	/// Unknown names follow [`FormSettings::unknown_field`].
	///
	/// # Examples
	///
	/// ```
	/// use formstate_forms::{FieldSpec, FormController, FormError, FormSchema};
	///
	/// let schema = FormSchema::new().field(FieldSpec::new("username"));
	/// let mut controller = FormController::initialize(&schema);
	///
	/// controller.set_value("username", "john").unwrap();
	/// assert!(controller.is_touched("username"));
	///
	/// let result = controller.set_value("nickname", "jj");
	/// assert_eq!(result, Err(FormError::UnknownField("nickname".to_string())));
	/// ```
	pub fn set_value(&mut self, name: &str, value: impl Into<FieldValue>) -> FormResult<()> {
		match self.state.get_mut(name) {
			Some(field) => {
				tracing::debug!(field = name, widget = ?field.widget(), "field value changed");
				field.set_value(value.into());
				Ok(())
			}
			None => self.unknown_field(name),
		}
	}

	/// Coerce a raw input event by the field's widget and store it.
	pub fn handle_input(&mut self, event: InputEvent) -> FormResult<()> {
		let Some(widget) = self.state.get(&event.field).map(Field::widget) else {
			return self.unknown_field(&event.field);
		};
		let value = widget.coerce(event.raw);
		self.set_value(&event.field, value)
	}

	fn unknown_field(&self, name: &str) -> FormResult<()> {
		match self.settings.unknown_field {
			UnknownFieldPolicy::Reject => Err(FormError::UnknownField(name.to_string())),
			UnknownFieldPolicy::Warn => {
				tracing::warn!(field = name, "ignoring write to unknown field");
				Ok(())
			}
			UnknownFieldPolicy::Ignore => Ok(()),
		}
	}

	/// True iff every validator of every field passes.
	pub fn is_valid(&self) -> bool {
		self.state.is_valid()
	}

	/// Attempt to submit the form
	///
	/// Marks the form submitted, then either returns the ordered values or
	/// rejects with the failures of every invalid field. Listeners receive
	/// the matching event before this returns.
	///
	/// # Examples
	///
	/// ```
	/// use formstate_forms::{FieldSpec, FormController, FormSchema};
	/// use formstate_validators::ValidatorKind;
	///
	/// let schema = FormSchema::new()
	///     .field(FieldSpec::new("isFeatured").with_default(false).with_validator(ValidatorKind::RequiredTrue));
	/// let mut controller = FormController::initialize(&schema);
	///
	/// assert!(controller.submit().is_err());
	/// assert!(controller.is_submitted());
	///
	/// controller.set_value("isFeatured", true).unwrap();
	/// let values = controller.submit().unwrap();
	/// assert_eq!(values.get("isFeatured"), Some(&true.into()));
	/// ```
	pub fn submit(&mut self) -> Result<FormValues, ValidationRejected> {
		self.state.mark_submitted();

		let errors = self.state.errors();
		if !errors.is_empty() {
			tracing::debug!(invalid_fields = errors.len(), "form submission rejected");
			let rejected = ValidationRejected::new(self.settings.rejection_notice(), errors);
			self.notify(&SubmissionEvent::Rejected {
				notice: rejected.notice().to_string(),
				errors: rejected.errors().clone(),
			});
			return Err(rejected);
		}

		let values = self.state.values();
		if self.settings.log_values {
			tracing::info!(
				target: SUBMIT_LOG_TARGET,
				values = %values,
				"form submitted"
			);
		}
		self.notify(&SubmissionEvent::Accepted {
			values: values.clone(),
		});
		Ok(values)
	}

	fn notify(&self, event: &SubmissionEvent) {
		for listener in &self.listeners {
			listener.on_submission(event);
		}
	}

	/// Restore defaults and clear `touched` and `submitted`.
	pub fn reset(&mut self) {
		self.state.reset();
	}

	pub fn field(&self, name: &str) -> Option<&Field> {
		self.state.get(name)
	}

	pub fn fields(&self) -> impl Iterator<Item = &Field> {
		self.state.fields()
	}

	pub fn value(&self, name: &str) -> Option<&FieldValue> {
		self.state.get(name).map(Field::value)
	}

	pub fn values(&self) -> FormValues {
		self.state.values()
	}

	pub fn errors(&self) -> FieldErrors {
		self.state.errors()
	}

	/// Failures of one field; empty for valid or unknown fields.
	pub fn field_errors(&self, name: &str) -> Vec<ValidationError> {
		self.state.get(name).map(Field::errors).unwrap_or_default()
	}

	pub fn is_submitted(&self) -> bool {
		self.state.is_submitted()
	}

	pub fn is_touched(&self, name: &str) -> bool {
		self.state.get(name).is_some_and(Field::is_touched)
	}

	/// Whether the view should display this field's errors
	///
	/// Errors show once the field was edited or a submit was attempted, and
	/// only while the field is invalid.
	pub fn should_show_errors(&self, name: &str) -> bool {
		self.state.get(name).is_some_and(|field| {
			(self.state.is_submitted() || field.is_touched()) && !field.is_valid()
		})
	}
}

impl Default for FormController {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for FormController {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormController")
			.field("state", &self.state)
			.field("settings", &self.settings)
			.field("listeners", &self.listeners.len())
			.finish()
	}
}
