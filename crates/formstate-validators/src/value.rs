//! Value inspection for validators

/// Read-only view of a field value as validators see it
///
/// Every rule is expressed in terms of these four questions, so any type
/// that can answer them can be validated. The default answers describe a
/// value that is present, has no textual form, no length and is not `true`.
pub trait InputValue {
	/// Whether the value counts as "not provided".
	fn is_empty_value(&self) -> bool;

	/// Textual form of the value, if it has one.
	fn as_text(&self) -> Option<&str> {
		None
	}

	/// Length in characters, for values that have a length.
	fn char_length(&self) -> Option<usize> {
		self.as_text().map(|s| s.chars().count())
	}

	/// Whether the value is exactly boolean `true`.
	fn is_true(&self) -> bool {
		false
	}
}

impl InputValue for str {
	fn is_empty_value(&self) -> bool {
		self.is_empty()
	}

	fn as_text(&self) -> Option<&str> {
		Some(self)
	}
}

impl InputValue for String {
	fn is_empty_value(&self) -> bool {
		self.is_empty()
	}

	fn as_text(&self) -> Option<&str> {
		Some(self.as_str())
	}
}

impl InputValue for bool {
	fn is_empty_value(&self) -> bool {
		false
	}

	fn is_true(&self) -> bool {
		*self
	}
}

impl<T: InputValue> InputValue for Option<T> {
	fn is_empty_value(&self) -> bool {
		self.as_ref().is_none_or(InputValue::is_empty_value)
	}

	fn as_text(&self) -> Option<&str> {
		self.as_ref().and_then(InputValue::as_text)
	}

	fn char_length(&self) -> Option<usize> {
		self.as_ref().and_then(InputValue::char_length)
	}

	fn is_true(&self) -> bool {
		self.as_ref().is_some_and(InputValue::is_true)
	}
}

impl<T: InputValue + ?Sized> InputValue for &T {
	fn is_empty_value(&self) -> bool {
		(**self).is_empty_value()
	}

	fn as_text(&self) -> Option<&str> {
		(**self).as_text()
	}

	fn char_length(&self) -> Option<usize> {
		(**self).char_length()
	}

	fn is_true(&self) -> bool {
		(**self).is_true()
	}
}
