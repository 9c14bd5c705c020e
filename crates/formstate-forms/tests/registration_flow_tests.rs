//! Registration form flow tests
//!
//! End-to-end scenarios driving both registration components the way a
//! view would: input events in, submit, read the outcome.

use formstate_forms::{
	FieldValue, FileRef, FormController, FormError, FormSettings, InputEvent, RawInput,
	ReactiveRegistration, SUBMIT_LOG_TARGET, SubmissionEvent, TemplateDrivenRegistration,
	UnknownFieldPolicy,
};
use formstate_validators::ValidationError;
use rstest::{fixture, rstest};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use tracing_subscriber::layer::SubscriberExt as _;

/// Fill every reactive field except `isFeatured` with valid values.
fn fill_all_but_featured(controller: &mut FormController) {
	controller.set_value("username", "john").unwrap();
	controller.set_value("email", "a@b.com").unwrap();
	controller.set_value("password", "12345678").unwrap();
	controller.set_value("experienceYear", 3).unwrap();
	controller.set_value("gender", "male").unwrap();
	controller.set_value("description", "Rustacean").unwrap();
	controller
		.set_value("fileUpload", FileRef::new("cv.pdf"))
		.unwrap();
}

#[fixture]
fn reactive() -> ReactiveRegistration {
	ReactiveRegistration::new()
}

#[rstest]
fn test_fresh_form_is_invalid(reactive: ReactiveRegistration) {
	assert!(!reactive.controller().is_valid());
	assert!(!reactive.controller().is_submitted());
}

#[rstest]
fn test_unchecked_opt_in_blocks_submission(mut reactive: ReactiveRegistration) {
	// Arrange
	fill_all_but_featured(reactive.controller_mut());

	// Act
	let result = reactive.submit_form();

	// Assert
	let rejected = result.unwrap_err();
	assert_eq!(rejected.notice(), "not");
	assert_eq!(rejected.invalid_fields().collect::<Vec<_>>(), vec!["isFeatured"]);
	assert_eq!(
		rejected.errors()["isFeatured"],
		vec![ValidationError::MustBeTrue]
	);
	assert!(reactive.controller().is_submitted());
}

#[rstest]
fn test_end_to_end_reject_then_accept(mut reactive: ReactiveRegistration) {
	// Arrange
	fill_all_but_featured(reactive.controller_mut());
	assert!(reactive.submit_form().is_err());

	// Act
	reactive.controller_mut().set_value("isFeatured", true).unwrap();
	let values = reactive.submit_form().unwrap();

	// Assert
	let expected = r#"{"username":"john","email":"a@b.com","password":"12345678","experienceYear":3,"isFeatured":true,"gender":"male","description":"Rustacean","fileUpload":{"name":"cv.pdf"}}"#;
	assert_eq!(
		values.to_json(),
		json!({
			"username": "john",
			"email": "a@b.com",
			"password": "12345678",
			"experienceYear": 3,
			"isFeatured": true,
			"gender": "male",
			"description": "Rustacean",
			"fileUpload": {"name": "cv.pdf"},
		})
	);
	assert_eq!(values.to_json().to_string(), expected);
	assert_eq!(serde_json::to_string(&values).unwrap(), expected);
}

#[rstest]
#[case("1234567", false)]
#[case("12345678", true)]
fn test_password_min_length(
	mut reactive: ReactiveRegistration,
	#[case] password: &str,
	#[case] expected_valid: bool,
) {
	fill_all_but_featured(reactive.controller_mut());
	let controller = reactive.controller_mut();
	controller.set_value("isFeatured", true).unwrap();

	controller.set_value("password", password).unwrap();

	assert_eq!(controller.is_valid(), expected_valid);
}

#[rstest]
#[case("a@b.com", true)]
#[case("not-an-email", false)]
fn test_email_format(
	mut reactive: ReactiveRegistration,
	#[case] email: &str,
	#[case] expected_valid: bool,
) {
	fill_all_but_featured(reactive.controller_mut());
	let controller = reactive.controller_mut();
	controller.set_value("isFeatured", true).unwrap();

	controller.set_value("email", email).unwrap();

	assert_eq!(controller.is_valid(), expected_valid);
	assert_eq!(controller.field_errors("email").is_empty(), expected_valid);
}

#[rstest]
fn test_template_driven_flow_through_bindings() {
	// Arrange
	let mut form = TemplateDrivenRegistration::new();
	let inputs = [
		("username", RawInput::text("jane")),
		("email", RawInput::text("jane@example.com")),
		("password", RawInput::text("correct horse")),
		("select", RawInput::text("6")),
		("isFeatured", RawInput::Checked(true)),
		("gender", RawInput::text("female")),
		("description", RawInput::text("Writes parsers")),
		(
			"uploadFile",
			RawInput::file(FileRef::new("avatar.png").with_size(512)),
		),
	];

	// Act
	for (name, raw) in inputs {
		let event = form.binding(name).unwrap().input(raw);
		form.on_input(event).unwrap();
	}
	let values = form.submit_form().unwrap();

	// Assert
	assert_eq!(values.get("select"), Some(&FieldValue::Number(6.0)));
	assert_eq!(
		values.get("uploadFile").and_then(FieldValue::as_file),
		Some(&FileRef::new("avatar.png").with_size(512))
	);
	assert_eq!(values.len(), 8);
}

#[rstest]
fn test_template_driven_rejects_untouched_form() {
	let mut form = TemplateDrivenRegistration::new();
	let events = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&events);
	form.controller_mut()
		.subscribe(move |event: &SubmissionEvent| sink.borrow_mut().push(event.clone()));

	let rejected = form.submit_form().unwrap_err();

	assert_eq!(rejected.errors().len(), 8);
	assert_eq!(
		events.borrow()[0].notice(),
		Some("validationForm is submmited")
	);
}

#[rstest]
fn test_unknown_field_under_ignore_policy_is_silent() {
	let mut form = ReactiveRegistration::with_settings(
		FormSettings::default().with_unknown_field(UnknownFieldPolicy::Ignore),
	);

	let result = form.on_input(InputEvent::new("uploadFile", RawInput::text("x")));

	assert!(result.is_ok());
	assert!(form.controller().field("uploadFile").is_none());
}

#[rstest]
fn test_unknown_field_rejected_by_default(mut reactive: ReactiveRegistration) {
	let result = reactive.on_input(InputEvent::new("select", RawInput::text("2")));

	assert_eq!(result, Err(FormError::UnknownField("select".to_string())));
}

/// A tracing layer that records `target: message key=value ...` lines
struct LogCapture {
	logs: Arc<Mutex<Vec<String>>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LogCapture {
	fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
		struct Visitor {
			message: String,
			fields: Vec<String>,
		}

		impl tracing::field::Visit for Visitor {
			fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
				match field.name() {
					"message" => self.message = format!("{:?}", value),
					name => self.fields.push(format!("{}={:?}", name, value)),
				}
			}
		}

		let mut visitor = Visitor {
			message: String::new(),
			fields: Vec::new(),
		};
		event.record(&mut visitor);

		let mut line = format!("{}: {}", event.metadata().target(), visitor.message);
		for field in visitor.fields {
			line.push(' ');
			line.push_str(&field);
		}
		self.logs.lock().unwrap().push(line);
	}
}

fn capture_logs(f: impl FnOnce()) -> Vec<String> {
	let logs = Arc::new(Mutex::new(Vec::new()));
	let subscriber = tracing_subscriber::registry().with(LogCapture {
		logs: Arc::clone(&logs),
	});
	tracing::subscriber::with_default(subscriber, f);
	let captured = logs.lock().unwrap().clone();
	captured
}

#[rstest]
fn test_accepted_values_are_logged(mut reactive: ReactiveRegistration) {
	// Arrange
	fill_all_but_featured(reactive.controller_mut());
	reactive.controller_mut().set_value("isFeatured", true).unwrap();

	// Act
	let logs = capture_logs(|| {
		reactive.submit_form().unwrap();
	});

	// Assert
	let submitted: Vec<_> = logs
		.iter()
		.filter(|line| line.starts_with(SUBMIT_LOG_TARGET))
		.collect();
	assert_eq!(
		submitted,
		vec![
			r#"formstate::submit: form submitted values={"username":"john","email":"a@b.com","password":"12345678","experienceYear":3,"isFeatured":true,"gender":"male","description":"Rustacean","fileUpload":{"name":"cv.pdf"}}"#
		]
	);
}

#[rstest]
fn test_field_edits_never_log_values(mut reactive: ReactiveRegistration) {
	// Act
	let logs = capture_logs(|| {
		reactive
			.on_input(InputEvent::new("password", RawInput::text("hunter2secret")))
			.unwrap();
		reactive
			.controller_mut()
			.set_value("username", "john-the-user")
			.unwrap();
	});

	// Assert
	assert!(
		logs.iter()
			.any(|line| line.contains("field value changed") && line.contains("PasswordInput"))
	);
	assert!(logs.iter().all(|line| !line.contains("hunter2secret")));
	assert!(logs.iter().all(|line| !line.contains("john-the-user")));
}

#[rstest]
fn test_rejected_submission_logs_no_values(mut reactive: ReactiveRegistration) {
	let logs = capture_logs(|| {
		let _ = reactive.submit_form();
	});

	assert!(logs.iter().all(|line| !line.starts_with(SUBMIT_LOG_TARGET)));
}

#[rstest]
fn test_value_logging_can_be_disabled() {
	let mut form = ReactiveRegistration::with_settings(FormSettings::default().with_log_values(false));
	fill_all_but_featured(form.controller_mut());
	form.controller_mut().set_value("isFeatured", true).unwrap();

	let logs = capture_logs(|| {
		form.submit_form().unwrap();
	});

	assert!(logs.iter().all(|line| !line.starts_with(SUBMIT_LOG_TARGET)));
}

#[rstest]
fn test_unknown_field_warning_is_logged() {
	let mut form = ReactiveRegistration::with_settings(
		FormSettings::default().with_unknown_field(UnknownFieldPolicy::Warn),
	);

	let logs = capture_logs(|| {
		form.controller_mut().set_value("nickname", "jj").unwrap();
	});

	assert!(
		logs.iter()
			.any(|line| line.contains("ignoring write to unknown field"))
	);
}
