//! [`Error`] type.

use crate::{transport::Response, url::Request};

/// Shorthand for results of this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error from the API or from the HTTP client.
///
/// [`Status`](Error::Status) and [`Decode`](Error::Decode) keep the request that was sent and the
/// response that came back, see [`Error::request`] and [`Error::response`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The API answered with a status other than `200 OK`.
	#[error("the API responded {} to {}", .response.status(), .request.endpoint())]
	Status {
		/// The request that was sent.
		request: Box<Request>,
		/// The response that came back.
		response: Box<Response>,
	},
	/// The API answered `200 OK` but the body is not a JSON value.
	#[error("failed to decode the response to {} as JSON", .request.endpoint())]
	Decode {
		/// The request that was sent.
		request: Box<Request>,
		/// The response that came back.
		response: Box<Response>,
		/// The JSON error, absent when the body decoded to `null`.
		source: Option<serde_json::Error>,
	},
	/// HTTP error.
	#[error("http error: {0}")]
	Transport(#[from] reqwest::Error),
	/// The API base and the endpoint do not form a valid URL.
	#[error("invalid request URL: {0}")]
	Url(#[from] url::ParseError),
}

impl Error {
	/// The request behind a [`Status`](Error::Status) or [`Decode`](Error::Decode) error.
	pub fn request(&self) -> Option<&Request> {
		match self {
			Self::Status { request, .. } | Self::Decode { request, .. } => Some(&**request),
			Self::Transport(_) | Self::Url(_) => None,
		}
	}

	/// The response behind a [`Status`](Error::Status) or [`Decode`](Error::Decode) error.
	pub fn response(&self) -> Option<&Response> {
		match self {
			Self::Status { response, .. } | Self::Decode { response, .. } => Some(&**response),
			Self::Transport(_) | Self::Url(_) => None,
		}
	}

	/// Whether this is a [`Status`](Error::Status) error.
	pub fn is_status(&self) -> bool { matches!(self, Self::Status { .. }) }

	/// Whether this is a [`Decode`](Error::Decode) error.
	pub fn is_decode(&self) -> bool { matches!(self, Self::Decode { .. }) }
}
