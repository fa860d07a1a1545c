//! Crate-wide error types.

use thiserror::Error;

/// Failures of a request or of the browser plumbing around it.
#[derive(Debug, Error)]
pub enum Error {
	/// The request never produced a response.
	#[error("network request failed: {0}")]
	Transport(#[from] gloo_net::Error),

	/// The server answered with a non-success status.
	#[error("{url} answered with status {status}")]
	Status {
		/// Requested url.
		url: String,
		/// Http status code.
		status: u16,
	},

	/// The body did not decode into the expected shape.
	#[error("unexpected response from {url}: {reason}")]
	Decode {
		/// Requested url.
		url: String,
		/// Decoder message.
		reason: String,
	},

	/// A browser API call failed.
	#[error("browser error: {0}")]
	Browser(String),
}

impl Error {
	pub(crate) fn browser(what: &str) -> Self {
		Self::Browser(what.to_string())
	}
}

/// Result alias used by the api client and browser helpers.
pub type Result<T> = std::result::Result<T, Error>;

/// A required form field was left empty.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InputError {
	/// Search or add-hero name was blank.
	#[error("Please enter a hero name")]
	MissingHeroName,

	/// A connection end was blank.
	#[error("Please enter both source and target heroes")]
	MissingConnectionEnds,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn input_errors_read_as_user_warnings() {
		assert_eq!(InputError::MissingHeroName.to_string(), "Please enter a hero name");
		assert_eq!(
			InputError::MissingConnectionEnds.to_string(),
			"Please enter both source and target heroes"
		);
	}

	#[test]
	fn status_error_names_the_endpoint() {
		let err = Error::Status {
			url: "/api/stats".into(),
			status: 502,
		};
		assert_eq!(err.to_string(), "/api/stats answered with status 502");
	}
}
