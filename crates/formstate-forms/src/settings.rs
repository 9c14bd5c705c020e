//! Controller settings
//!
//! Settings are plain data: build them in code with the `with_*` methods or
//! load them from TOML.
//!
//! ```toml
//! unknown_field = "warn"
//! rejection_notice = "Please fix the highlighted fields"
//! log_values = false
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What `set_value` does with a name that is not in the schema
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownFieldPolicy {
	/// Return [`FormError::UnknownField`](crate::FormError::UnknownField)
	#[default]
	Reject,
	/// Log a warning and carry on
	Warn,
	/// Carry on silently
	Ignore,
}

/// Notice used when no form-specific notice is configured
pub const DEFAULT_REJECTION_NOTICE: &str = "Please correct the errors in the form";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
	pub unknown_field: UnknownFieldPolicy,
	pub rejection_notice: Option<String>,
	/// Write accepted values to the diagnostic log
	pub log_values: bool,
}

impl Default for FormSettings {
	fn default() -> Self {
		Self {
			unknown_field: UnknownFieldPolicy::default(),
			rejection_notice: None,
			log_values: true,
		}
	}
}

#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),
}

impl FormSettings {
	/// Parse settings from a TOML document
	///
	/// Missing keys take their default values.
	///
	/// # Examples
	///
	/// ```
	/// use formstate_forms::{FormSettings, UnknownFieldPolicy};
	///
	/// let settings = FormSettings::from_toml_str(r#"unknown_field = "ignore""#).unwrap();
	/// assert_eq!(settings.unknown_field, UnknownFieldPolicy::Ignore);
	/// assert!(settings.log_values);
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(source)?)
	}

	pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let source = fs::read_to_string(path)?;
		Self::from_toml_str(&source)
	}

	pub fn with_unknown_field(mut self, policy: UnknownFieldPolicy) -> Self {
		self.unknown_field = policy;
		self
	}

	pub fn with_rejection_notice(mut self, notice: impl Into<String>) -> Self {
		self.rejection_notice = Some(notice.into());
		self
	}

	pub fn with_log_values(mut self, enabled: bool) -> Self {
		self.log_values = enabled;
		self
	}

	pub fn rejection_notice(&self) -> &str {
		self.rejection_notice
			.as_deref()
			.unwrap_or(DEFAULT_REJECTION_NOTICE)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn test_defaults() {
		let settings = FormSettings::default();

		assert_eq!(settings.unknown_field, UnknownFieldPolicy::Reject);
		assert_eq!(settings.rejection_notice(), DEFAULT_REJECTION_NOTICE);
		assert!(settings.log_values);
	}

	#[rstest]
	fn test_from_toml_str_full() {
		// Arrange
		let source = r#"
			unknown_field = "warn"
			rejection_notice = "not"
			log_values = false
		"#;

		// Act
		let settings = FormSettings::from_toml_str(source).unwrap();

		// Assert
		assert_eq!(
			settings,
			FormSettings::default()
				.with_unknown_field(UnknownFieldPolicy::Warn)
				.with_rejection_notice("not")
				.with_log_values(false)
		);
	}

	#[rstest]
	fn test_from_toml_str_empty_uses_defaults() {
		let settings = FormSettings::from_toml_str("").unwrap();

		assert_eq!(settings, FormSettings::default());
	}

	#[rstest]
	fn test_from_toml_str_rejects_unknown_policy() {
		let result = FormSettings::from_toml_str(r#"unknown_field = "explode""#);

		assert!(matches!(result, Err(SettingsError::Toml(_))));
	}

	#[rstest]
	fn test_from_toml_file() {
		// Arrange
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, r#"rejection_notice = "validationForm is submmited""#).unwrap();

		// Act
		let settings = FormSettings::from_toml_file(file.path()).unwrap();

		// Assert
		assert_eq!(settings.rejection_notice(), "validationForm is submmited");
	}

	#[rstest]
	fn test_from_toml_file_missing() {
		let result = FormSettings::from_toml_file("/nonexistent/formstate.toml");

		assert!(matches!(result, Err(SettingsError::Io(_))));
	}
}
