//! Field values

use formstate_validators::InputValue;
use serde::{Deserialize, Serialize, Serializer};

/// Reference to a user-selected file
///
/// Only metadata is captured; the file content is never read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRef {
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub size: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub content_type: Option<String>,
}

impl FileRef {
	/// Create a file reference from its name
	///
	/// # Examples
	///
	/// ```
	/// use formstate_forms::FileRef;
	///
	/// let file = FileRef::new("cv.pdf").with_size(2048);
	/// assert_eq!(file.name, "cv.pdf");
	/// assert_eq!(file.size, Some(2048));
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			size: None,
			content_type: None,
		}
	}

	pub fn with_size(mut self, size: u64) -> Self {
		self.size = Some(size);
		self
	}

	pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
		self.content_type = Some(content_type.into());
		self
	}
}

/// Current value of a form field
///
/// Serializes to JSON as `null`, a string, a number, a boolean or a file
/// object. Whole numbers serialize without a fractional part.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
	/// No value yet (null / undefined)
	#[default]
	Empty,
	Bool(bool),
	Number(f64),
	Text(String),
	File(FileRef),
}

impl FieldValue {
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Empty => true,
			Self::Text(text) => text.is_empty(),
			Self::File(file) => file.name.is_empty(),
			Self::Bool(_) | Self::Number(_) => false,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(flag) => Some(*flag),
			_ => None,
		}
	}

	pub fn as_number(&self) -> Option<f64> {
		match self {
			Self::Number(number) => Some(*number),
			_ => None,
		}
	}

	pub fn as_file(&self) -> Option<&FileRef> {
		match self {
			Self::File(file) => Some(file),
			_ => None,
		}
	}

	/// Convert to a JSON value
	///
	/// # Examples
	///
	/// ```
	/// use formstate_forms::FieldValue;
	/// use serde_json::json;
	///
	/// assert_eq!(FieldValue::from(3).to_json(), json!(3));
	/// assert_eq!(FieldValue::Empty.to_json(), json!(null));
	/// ```
	pub fn to_json(&self) -> serde_json::Value {
		serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
	}
}

impl Serialize for FieldValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Empty => serializer.serialize_unit(),
			Self::Bool(flag) => serializer.serialize_bool(*flag),
			Self::Number(number)
				if number.fract() == 0.0 && number.abs() < i64::MAX as f64 =>
			{
				serializer.serialize_i64(*number as i64)
			}
			Self::Number(number) => serializer.serialize_f64(*number),
			Self::Text(text) => serializer.serialize_str(text),
			Self::File(file) => file.serialize(serializer),
		}
	}
}

impl InputValue for FieldValue {
	fn is_empty_value(&self) -> bool {
		self.is_empty()
	}

	fn as_text(&self) -> Option<&str> {
		self.as_str()
	}

	fn char_length(&self) -> Option<usize> {
		match self {
			Self::Text(text) => Some(text.chars().count()),
			Self::File(file) => Some(file.name.chars().count()),
			_ => None,
		}
	}

	fn is_true(&self) -> bool {
		matches!(self, Self::Bool(true))
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<bool> for FieldValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<f64> for FieldValue {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<i32> for FieldValue {
	fn from(value: i32) -> Self {
		Self::Number(f64::from(value))
	}
}

impl From<u32> for FieldValue {
	fn from(value: u32) -> Self {
		Self::Number(f64::from(value))
	}
}

impl From<FileRef> for FieldValue {
	fn from(value: FileRef) -> Self {
		Self::File(value)
	}
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Empty, Into::into)
	}
}
