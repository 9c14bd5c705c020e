//! Submission notifications
//!
//! Every submit attempt produces exactly one [`SubmissionEvent`], delivered
//! synchronously to each registered listener in registration order before
//! `submit()` returns. The presentation layer decides how to surface it
//! (modal, toast, inline banner).

use crate::error::FieldErrors;
use crate::state::FormValues;

/// Outcome of one submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionEvent {
	/// At least one validator failed; no values are exposed.
	Rejected { notice: String, errors: FieldErrors },
	/// Every validator passed.
	Accepted { values: FormValues },
}

impl SubmissionEvent {
	pub fn is_accepted(&self) -> bool {
		matches!(self, Self::Accepted { .. })
	}

	/// Notice text of a rejection, if this is one.
	pub fn notice(&self) -> Option<&str> {
		match self {
			Self::Rejected { notice, .. } => Some(notice),
			Self::Accepted { .. } => None,
		}
	}
}

/// Consumer of submission events
///
/// Closures taking `&SubmissionEvent` implement this trait.
pub trait SubmissionListener {
	fn on_submission(&self, event: &SubmissionEvent);
}

impl<F> SubmissionListener for F
where
	F: Fn(&SubmissionEvent),
{
	fn on_submission(&self, event: &SubmissionEvent) {
		self(event)
	}
}
