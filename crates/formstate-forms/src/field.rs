//! Field declarations and field state

use crate::binding::RawInput;
use crate::value::FieldValue;
use formstate_validators::{ValidationError, ValidatorKind};
use serde::{Deserialize, Serialize};

/// Kind of input element a field is bound to
///
/// The widget decides how raw input is coerced into a [`FieldValue`]; it
/// never affects validity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
	#[default]
	TextInput,
	EmailInput,
	PasswordInput,
	NumberInput,
	Textarea,
	Select,
	Checkbox,
	Radio,
	FileInput,
}

impl Widget {
	/// Coerce a raw input event into a field value
	///
	/// # Examples
	///
	/// ```
	/// use formstate_forms::{FieldValue, RawInput, Widget};
	///
	/// assert_eq!(Widget::Select.coerce(RawInput::text("3")), FieldValue::from(3));
	/// assert_eq!(Widget::Checkbox.coerce(RawInput::Checked(true)), FieldValue::from(true));
	/// assert_eq!(Widget::TextInput.coerce(RawInput::text("3")), FieldValue::from("3"));
	/// ```
	pub fn coerce(&self, raw: RawInput) -> FieldValue {
		match (self, raw) {
			(Self::Checkbox, RawInput::Checked(checked)) => FieldValue::Bool(checked),
			(Self::Checkbox, RawInput::Text(text)) => FieldValue::Bool(is_checked_text(&text)),
			(Self::NumberInput | Self::Select, RawInput::Text(text)) => {
				let trimmed = text.trim();
				if trimmed.is_empty() {
					FieldValue::Empty
				} else {
					match trimmed.parse::<f64>() {
						Ok(number) if number.is_finite() => FieldValue::Number(number),
						_ => FieldValue::Text(text),
					}
				}
			}
			(Self::FileInput, RawInput::Files(files)) => {
				files.into_iter().next().map_or(FieldValue::Empty, FieldValue::File)
			}
			(_, RawInput::Text(text)) => FieldValue::Text(text),
			(_, RawInput::Checked(checked)) => FieldValue::Bool(checked),
			(_, RawInput::Files(files)) => {
				files.into_iter().next().map_or(FieldValue::Empty, FieldValue::File)
			}
		}
	}
}

/// A checkbox posts `"on"` when ticked; `"true"` is accepted too.
fn is_checked_text(text: &str) -> bool {
	let text = text.trim();
	text.eq_ignore_ascii_case("on") || text.eq_ignore_ascii_case("true")
}

/// Declaration of one form field
///
/// A spec is the schema-side description: name, default value, ordered
/// validators, widget and (for select/radio widgets) the offered choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
	pub name: String,
	#[serde(default)]
	pub default: FieldValue,
	#[serde(default)]
	pub validators: Vec<ValidatorKind>,
	#[serde(default)]
	pub widget: Widget,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub choices: Vec<FieldValue>,
}

impl FieldSpec {
	/// Create a field spec with an empty default and no validators
	///
	/// # Examples
	///
	/// ```
	/// use formstate_forms::{FieldSpec, FieldValue};
	/// use formstate_validators::ValidatorKind;
	///
	/// let spec = FieldSpec::new("password")
	///     .with_default("")
	///     .with_validators([ValidatorKind::Required, ValidatorKind::MinLength(8)]);
	/// assert_eq!(spec.name, "password");
	/// assert_eq!(spec.default, FieldValue::from(""));
	/// assert_eq!(spec.validators.len(), 2);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			default: FieldValue::Empty,
			validators: Vec::new(),
			widget: Widget::default(),
			choices: Vec::new(),
		}
	}

	pub fn with_default(mut self, default: impl Into<FieldValue>) -> Self {
		self.default = default.into();
		self
	}

	pub fn with_validator(mut self, validator: ValidatorKind) -> Self {
		self.validators.push(validator);
		self
	}

	pub fn with_validators(mut self, validators: impl IntoIterator<Item = ValidatorKind>) -> Self {
		self.validators.extend(validators);
		self
	}

	pub fn with_widget(mut self, widget: Widget) -> Self {
		self.widget = widget;
		self
	}

	pub fn with_choices<I, V>(mut self, choices: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<FieldValue>,
	{
		self.choices = choices.into_iter().map(Into::into).collect();
		self
	}
}

/// Live state of one form field
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
	spec: FieldSpec,
	value: FieldValue,
	touched: bool,
}

impl Field {
	/// Create a field at its default value
	pub fn new(spec: FieldSpec) -> Self {
		let value = spec.default.clone();
		Self {
			spec,
			value,
			touched: false,
		}
	}

	pub fn name(&self) -> &str {
		&self.spec.name
	}

	pub fn value(&self) -> &FieldValue {
		&self.value
	}

	pub fn default_value(&self) -> &FieldValue {
		&self.spec.default
	}

	pub fn validators(&self) -> &[ValidatorKind] {
		&self.spec.validators
	}

	pub fn widget(&self) -> Widget {
		self.spec.widget
	}

	pub fn choices(&self) -> &[FieldValue] {
		&self.spec.choices
	}

	pub fn is_touched(&self) -> bool {
		self.touched
	}

	pub fn spec(&self) -> &FieldSpec {
		&self.spec
	}

	/// Replace the value and mark the field touched.
	pub fn set_value(&mut self, value: FieldValue) {
		self.value = value;
		self.touched = true;
	}

	/// Restore the default value and clear `touched`.
	pub fn reset(&mut self) {
		self.value = self.spec.default.clone();
		self.touched = false;
	}

	/// Run every validator against the current value
	///
	/// All validators are evaluated; the result lists each failure in
	/// declaration order.
	///
	/// # Examples
	///
	/// ```
	/// use formstate_forms::{Field, FieldSpec};
	/// use formstate_validators::{ValidationError, ValidatorKind};
	///
	/// let mut field = Field::new(
	///     FieldSpec::new("email").with_validators([ValidatorKind::Email, ValidatorKind::Required]),
	/// );
	/// assert_eq!(field.errors(), vec![ValidationError::Required]);
	///
	/// field.set_value("a@b.com".into());
	/// assert!(field.errors().is_empty());
	/// ```
	pub fn errors(&self) -> Vec<ValidationError> {
		self.spec
			.validators
			.iter()
			.filter_map(|validator| validator.validate(&self.value).err())
			.collect()
	}

	pub fn is_valid(&self) -> bool {
		self.spec
			.validators
			.iter()
			.all(|validator| validator.validate(&self.value).is_ok())
	}
}
