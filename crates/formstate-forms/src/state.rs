//! Form state and submitted values

use crate::error::FieldErrors;
use crate::field::{Field, FieldSpec};
use crate::schema::FormSchema;
use crate::value::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered mapping from field name to value
///
/// This is what a successful submit hands back. It serializes to a JSON
/// object whose keys keep declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(IndexMap<String, FieldValue>);

impl FormValues {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, name: &str) -> Option<&FieldValue> {
		self.0.get(name)
	}

	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
		self.0.insert(name.into(), value.into());
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
		self.0.iter().map(|(name, value)| (name.as_str(), value))
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	/// Convert to a JSON object
	///
	/// # Examples
	///
	/// ```
	/// use formstate_forms::FormValues;
	/// use serde_json::json;
	///
	/// let mut values = FormValues::new();
	/// values.insert("username", "john");
	/// values.insert("isFeatured", true);
	/// assert_eq!(values.to_json(), json!({"username": "john", "isFeatured": true}));
	/// ```
	pub fn to_json(&self) -> serde_json::Value {
		serde_json::Value::Object(
			self.0
				.iter()
				.map(|(name, value)| (name.clone(), value.to_json()))
				.collect(),
		)
	}

	pub fn into_inner(self) -> IndexMap<String, FieldValue> {
		self.0
	}
}

/// Compact JSON in declaration order.
impl fmt::Display for FormValues {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let json = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
		f.write_str(&json)
	}
}

impl<N: Into<String>, V: Into<FieldValue>> FromIterator<(N, V)> for FormValues {
	fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
		Self(
			iter.into_iter()
				.map(|(name, value)| (name.into(), value.into()))
				.collect(),
		)
	}
}

/// Every field of one form instance plus its submission flag
///
/// Field names are unique and iterate in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
	fields: IndexMap<String, Field>,
	submitted: bool,
}

impl FormState {
	pub fn new() -> Self {
		Self::default()
	}

	/// Create state with every field at its default value
	///
	/// A repeated name replaces the earlier declaration but keeps its
	/// position.
	///
	/// # Examples
	///
	/// ```
	/// use formstate_forms::{FieldSpec, FormSchema, FormState};
	///
	/// let schema = FormSchema::new()
	///     .field(FieldSpec::new("a"))
	///     .field(FieldSpec::new("b"));
	/// let state = FormState::from_schema(&schema);
	/// assert_eq!(state.len(), 2);
	/// assert!(!state.is_submitted());
	/// ```
	pub fn from_schema(schema: &FormSchema) -> Self {
		let mut state = Self::new();
		for spec in schema.fields() {
			state.insert(spec.clone());
		}
		state
	}

	/// Add a field at its default value, replacing any field of the same name.
	pub fn insert(&mut self, spec: FieldSpec) {
		self.fields.insert(spec.name.clone(), Field::new(spec));
	}

	pub fn contains(&self, name: &str) -> bool {
		self.fields.contains_key(name)
	}

	pub fn get(&self, name: &str) -> Option<&Field> {
		self.fields.get(name)
	}

	pub fn get_mut(&mut self, name: &str) -> Option<&mut Field> {
		self.fields.get_mut(name)
	}

	pub fn fields(&self) -> impl Iterator<Item = &Field> {
		self.fields.values()
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn is_submitted(&self) -> bool {
		self.submitted
	}

	pub fn mark_submitted(&mut self) {
		self.submitted = true;
	}

	/// True iff every validator of every field passes.
	pub fn is_valid(&self) -> bool {
		self.fields.values().all(Field::is_valid)
	}

	/// Failures of every invalid field; valid fields are omitted.
	pub fn errors(&self) -> FieldErrors {
		self.fields
			.values()
			.filter_map(|field| {
				let errors = field.errors();
				(!errors.is_empty()).then(|| (field.name().to_string(), errors))
			})
			.collect()
	}

	pub fn values(&self) -> FormValues {
		self.fields
			.values()
			.map(|field| (field.name(), field.value().clone()))
			.collect()
	}

	/// Restore defaults and clear every `touched` flag and `submitted`.
	pub fn reset(&mut self) {
		for field in self.fields.values_mut() {
			field.reset();
		}
		self.submitted = false;
	}
}
