//! Input binding between a view and a form controller
//!
//! The view layer never owns form state. Each bound input element holds an
//! [`InputBinding`] and turns raw DOM-style events into [`InputEvent`]s that
//! are pushed into the controller:
//!
//! ```text
//! ┌──────────────┐  InputEvent   ┌────────────────┐
//! │ input element│ ─────────────▶│ FormController │
//! │ (view layer) │               │   FormState    │
//! └──────────────┘ ◀──────────── └────────────────┘
//!                    read state
//!                  (errors, flags)
//! ```

use crate::field::{FieldSpec, Widget};
use crate::value::FileRef;

/// Raw payload of an input event, before widget coercion
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
	/// Text content (`value` of text, number, select, radio, textarea)
	Text(String),
	/// `checked` state of a checkbox
	Checked(bool),
	/// Selected files of a file input
	Files(Vec<FileRef>),
}

impl RawInput {
	pub fn text(value: impl Into<String>) -> Self {
		Self::Text(value.into())
	}

	pub fn file(file: FileRef) -> Self {
		Self::Files(vec![file])
	}
}

/// One user edit addressed to a named field
#[derive(Debug, Clone, PartialEq)]
pub struct InputEvent {
	pub field: String,
	pub raw: RawInput,
}

impl InputEvent {
	pub fn new(field: impl Into<String>, raw: RawInput) -> Self {
		Self {
			field: field.into(),
			raw,
		}
	}
}

/// View-side handle for one bound input element
///
/// Template-driven forms register fields as their inputs bind; the binding
/// carries the field declaration so the controller can register it on first
/// sight.
#[derive(Debug, Clone, PartialEq)]
pub struct InputBinding {
	spec: FieldSpec,
}

impl InputBinding {
	/// Bind an input element to a field declaration
	///
	/// # Examples
	///
	/// ```
	/// use formstate_forms::{FieldSpec, InputBinding, RawInput, Widget};
	///
	/// let binding = InputBinding::new(FieldSpec::new("gender").with_widget(Widget::Radio));
	/// let event = binding.input(RawInput::text("female"));
	/// assert_eq!(event.field, "gender");
	/// ```
	pub fn new(spec: FieldSpec) -> Self {
		Self { spec }
	}

	pub fn field_name(&self) -> &str {
		&self.spec.name
	}

	pub fn widget(&self) -> Widget {
		self.spec.widget
	}

	pub fn spec(&self) -> &FieldSpec {
		&self.spec
	}

	/// Wrap a raw payload into an event for this field.
	pub fn input(&self, raw: RawInput) -> InputEvent {
		InputEvent::new(self.spec.name.clone(), raw)
	}
}
