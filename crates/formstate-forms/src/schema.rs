//! Form schemas

use crate::field::FieldSpec;
use crate::value::FieldValue;
use formstate_validators::ValidatorKind;
use serde::{Deserialize, Serialize};

/// Ordered list of field declarations
///
/// Declaration order is the order fields are validated, reported and
/// emitted on submit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSchema {
	fields: Vec<FieldSpec>,
}

impl FormSchema {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a schema from `(name, default, validators)` entries
	///
	/// # Examples
	///
	/// ```
	/// use formstate_forms::FormSchema;
	/// use formstate_validators::ValidatorKind;
	///
	/// let schema = FormSchema::from_entries([
	///     ("username", "".into(), vec![ValidatorKind::Required]),
	///     ("isFeatured", false.into(), vec![ValidatorKind::RequiredTrue]),
	/// ]);
	/// assert_eq!(schema.len(), 2);
	/// assert_eq!(schema.fields()[1].name, "isFeatured");
	/// ```
	pub fn from_entries<I, N>(entries: I) -> Self
	where
		I: IntoIterator<Item = (N, FieldValue, Vec<ValidatorKind>)>,
		N: Into<String>,
	{
		entries
			.into_iter()
			.fold(Self::new(), |schema, (name, default, validators)| {
				schema.field(
					FieldSpec::new(name)
						.with_default(default)
						.with_validators(validators),
				)
			})
	}

	/// Append a field declaration
	///
	/// # Examples
	///
	/// ```
	/// use formstate_forms::{FieldSpec, FormSchema};
	/// use formstate_validators::ValidatorKind;
	///
	/// let schema = FormSchema::new()
	///     .field(FieldSpec::new("username").with_validator(ValidatorKind::Required))
	///     .field(FieldSpec::new("email").with_validator(ValidatorKind::Email));
	/// assert_eq!(schema.names().collect::<Vec<_>>(), vec!["username", "email"]);
	/// ```
	pub fn field(mut self, spec: FieldSpec) -> Self {
		self.fields.push(spec);
		self
	}

	pub fn fields(&self) -> &[FieldSpec] {
		&self.fields
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|spec| spec.name.as_str())
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

impl FromIterator<FieldSpec> for FormSchema {
	fn from_iter<T: IntoIterator<Item = FieldSpec>>(iter: T) -> Self {
		Self {
			fields: iter.into_iter().collect(),
		}
	}
}

impl IntoIterator for FormSchema {
	type Item = FieldSpec;
	type IntoIter = std::vec::IntoIter<FieldSpec>;

	fn into_iter(self) -> Self::IntoIter {
		self.fields.into_iter()
	}
}
