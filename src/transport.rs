//! The HTTP [`Transport`] and its [`Response`].

use reqwest::{header::HeaderMap, StatusCode};

use crate::{error::Result, url::Request};

/// Sends prepared requests.
///
/// Implemented for [`reqwest::blocking::Client`], whose connection pool lives as long as the
/// client does.
pub trait Transport {
	/// Sends the request and reads the whole response.
	fn send(&self, request: &Request) -> Result<Response>;
}

impl Transport for reqwest::blocking::Client {
	fn send(&self, request: &Request) -> Result<Response> {
		let response = self.get(request.url().clone()).send()?;
		let status = response.status();
		let headers = response.headers().clone();
		let body = response.text()?;
		Ok(Response { status, headers, body })
	}
}

impl<T: Transport + ?Sized> Transport for &T {
	fn send(&self, request: &Request) -> Result<Response> { (**self).send(request) }
}

/// A fully read HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
	status: StatusCode,
	headers: HeaderMap,
	body: String,
}

impl Response {
	/// Creates a new [`Response`].
	pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<String>) -> Self {
		Self { status, headers, body: body.into() }
	}

	/// The status code.
	pub fn status(&self) -> StatusCode { self.status }

	/// The headers.
	pub fn headers(&self) -> &HeaderMap { &self.headers }

	/// The body.
	pub fn body(&self) -> &str { &self.body }

	/// Parses the body as JSON.
	pub fn json(&self) -> serde_json::Result<serde_json::Value> { serde_json::from_str(&self.body) }
}
