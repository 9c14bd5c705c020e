//! Ready-made registration forms
//!
//! Both components collect the same eight inputs (username, email,
//! password, a 1-6 selection, a featured opt-in, gender, a description and a
//! file) with the same rules. They differ in how the schema comes to exist:
//!
//! - [`ReactiveRegistration`] declares the whole schema up front, with
//!   fields starting at `""` and the opt-in at `false`;
//! - [`TemplateDrivenRegistration`] registers each field as its input binds,
//!   every field starting empty.

use crate::binding::{InputBinding, InputEvent};
use crate::controller::FormController;
use crate::error::{FormResult, ValidationRejected};
use crate::field::{FieldSpec, Widget};
use crate::schema::FormSchema;
use crate::settings::FormSettings;
use crate::state::FormValues;
use formstate_validators::ValidatorKind;

/// Options offered by the experience-year select.
pub const SELECT_OPTIONS: [u32; 6] = [1, 2, 3, 4, 5, 6];

pub const REACTIVE_REJECTION_NOTICE: &str = "not";
pub const TEMPLATE_REJECTION_NOTICE: &str = "validationForm is submmited";

const PASSWORD_MIN_LENGTH: usize = 8;

fn registration_fields(select_name: &str, file_name: &str) -> Vec<FieldSpec> {
	vec![
		FieldSpec::new("username").with_validator(ValidatorKind::Required),
		FieldSpec::new("email")
			.with_widget(Widget::EmailInput)
			.with_validators([ValidatorKind::Email, ValidatorKind::Required]),
		FieldSpec::new("password")
			.with_widget(Widget::PasswordInput)
			.with_validators([
				ValidatorKind::Required,
				ValidatorKind::MinLength(PASSWORD_MIN_LENGTH),
			]),
		FieldSpec::new(select_name)
			.with_widget(Widget::Select)
			.with_choices(SELECT_OPTIONS)
			.with_validator(ValidatorKind::Required),
		FieldSpec::new("isFeatured")
			.with_widget(Widget::Checkbox)
			.with_validator(ValidatorKind::RequiredTrue),
		FieldSpec::new("gender")
			.with_widget(Widget::Radio)
			.with_validator(ValidatorKind::Required),
		FieldSpec::new("description")
			.with_widget(Widget::Textarea)
			.with_validator(ValidatorKind::Required),
		FieldSpec::new(file_name)
			.with_widget(Widget::FileInput)
			.with_validator(ValidatorKind::Required),
	]
}

/// Registration form with a schema built up front
#[derive(Debug)]
pub struct ReactiveRegistration {
	controller: FormController,
}

impl ReactiveRegistration {
	/// # Examples
	///
	/// ```
	/// use formstate_forms::components::ReactiveRegistration;
	///
	/// let form = ReactiveRegistration::new();
	/// assert!(!form.controller().is_valid());
	/// assert_eq!(form.controller().state().len(), 8);
	/// ```
	pub fn new() -> Self {
		Self::with_settings(FormSettings::default())
	}

	/// Build the component with custom settings
	///
	/// The rejection notice defaults to `"not"` unless the settings name
	/// another.
	pub fn with_settings(mut settings: FormSettings) -> Self {
		settings
			.rejection_notice
			.get_or_insert_with(|| REACTIVE_REJECTION_NOTICE.to_string());
		Self {
			controller: FormController::initialize(&Self::schema()).with_settings(settings),
		}
	}

	/// The declared schema
	///
	/// Every field defaults to `""` except the opt-in, which starts `false`.
	pub fn schema() -> FormSchema {
		registration_fields("experienceYear", "fileUpload")
			.into_iter()
			.map(|spec| match spec.widget {
				Widget::Checkbox => spec.with_default(false),
				_ => spec.with_default(""),
			})
			.collect()
	}

	pub fn select_options(&self) -> &'static [u32] {
		&SELECT_OPTIONS
	}

	pub fn controller(&self) -> &FormController {
		&self.controller
	}

	pub fn controller_mut(&mut self) -> &mut FormController {
		&mut self.controller
	}

	pub fn on_input(&mut self, event: InputEvent) -> FormResult<()> {
		self.controller.handle_input(event)
	}

	pub fn submit_form(&mut self) -> Result<FormValues, ValidationRejected> {
		self.controller.submit()
	}
}

impl Default for ReactiveRegistration {
	fn default() -> Self {
		Self::new()
	}
}

/// Registration form whose schema is inferred from bound inputs
#[derive(Debug)]
pub struct TemplateDrivenRegistration {
	controller: FormController,
	bindings: Vec<InputBinding>,
}

impl TemplateDrivenRegistration {
	/// # Examples
	///
	/// ```
	/// use formstate_forms::components::TemplateDrivenRegistration;
	/// use formstate_forms::FieldValue;
	///
	/// let form = TemplateDrivenRegistration::new();
	/// assert_eq!(form.controller().value("select"), Some(&FieldValue::Empty));
	/// ```
	pub fn new() -> Self {
		Self::with_settings(FormSettings::default())
	}

	/// Build the component with custom settings
	///
	/// The rejection notice defaults to `"validationForm is submmited"`
	/// unless the settings name another.
	pub fn with_settings(mut settings: FormSettings) -> Self {
		settings
			.rejection_notice
			.get_or_insert_with(|| TEMPLATE_REJECTION_NOTICE.to_string());
		let mut controller = FormController::new().with_settings(settings);
		let bindings: Vec<InputBinding> = registration_fields("select", "uploadFile")
			.into_iter()
			.map(InputBinding::new)
			.collect();
		for binding in &bindings {
			controller.bind(binding);
		}
		Self {
			controller,
			bindings,
		}
	}

	/// Bindings for the template's input elements, in template order.
	pub fn bindings(&self) -> &[InputBinding] {
		&self.bindings
	}

	pub fn binding(&self, field_name: &str) -> Option<&InputBinding> {
		self.bindings
			.iter()
			.find(|binding| binding.field_name() == field_name)
	}

	pub fn select_options(&self) -> &'static [u32] {
		&SELECT_OPTIONS
	}

	pub fn controller(&self) -> &FormController {
		&self.controller
	}

	pub fn controller_mut(&mut self) -> &mut FormController {
		&mut self.controller
	}

	pub fn on_input(&mut self, event: InputEvent) -> FormResult<()> {
		self.controller.handle_input(event)
	}

	pub fn submit_form(&mut self) -> Result<FormValues, ValidationRejected> {
		self.controller.submit()
	}
}

impl Default for TemplateDrivenRegistration {
	fn default() -> Self {
		Self::new()
	}
}
