//! [`ClientConfig`]

use std::{
	env::{self, VarError},
	fmt,
};

/// The standard API root.
pub const DEFAULT_API_BASE: &str = "https://openexchangerates.org/api";

/// Environment variable holding the App ID.
///
/// See [authentication](https://docs.openexchangerates.org/reference/authentication).
pub const APP_ID_ENV: &str = "OXR_APP_ID";
/// Environment variable overriding [`DEFAULT_API_BASE`].
pub const API_BASE_ENV: &str = "OXR_API_BASE";

/// Client configuration: where the API lives and the App ID to send along.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
	api_base: String,
	app_id: String,
}

impl ClientConfig {
	/// Creates a configuration for the [standard API root](DEFAULT_API_BASE).
	pub fn new(app_id: impl Into<String>) -> Self {
		Self { api_base: DEFAULT_API_BASE.to_owned(), app_id: app_id.into() }
	}

	/// Replaces the API base URL.
	///
	/// Trailing `/`s are removed so that endpoints can be joined with one.
	///
	/// # Examples
	/// ```
	/// # use openexchangerates::ClientConfig;
	/// let config = ClientConfig::new("…").with_api_base("http://localhost:8080/api/");
	/// assert_eq!(config.api_base(), "http://localhost:8080/api");
	/// ```
	pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
		let api_base = api_base.into();
		self.api_base = api_base.trim_end_matches('/').to_owned();
		self
	}

	/// Reads the configuration from [`OXR_APP_ID`](APP_ID_ENV) and, if set,
	/// [`OXR_API_BASE`](API_BASE_ENV).
	///
	/// An empty `OXR_API_BASE` counts as unset.
	pub fn from_env() -> Result<Self, ConfigError> {
		let app_id = match env::var(APP_ID_ENV) {
			Ok(app_id) => app_id,
			Err(VarError::NotPresent) => return Err(ConfigError::MissingAppId),
			Err(VarError::NotUnicode(_)) => return Err(ConfigError::NotUnicode(APP_ID_ENV)),
		};
		let config = Self::new(app_id);
		match env::var(API_BASE_ENV) {
			Ok(api_base) if api_base.is_empty() => Ok(config),
			Ok(api_base) => Ok(config.with_api_base(api_base)),
			Err(VarError::NotPresent) => Ok(config),
			Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(API_BASE_ENV)),
		}
	}

	/// The API base URL, without a trailing slash.
	pub fn api_base(&self) -> &str { &self.api_base }

	/// The App ID.
	pub fn app_id(&self) -> &str { &self.app_id }
}

impl fmt::Debug for ClientConfig {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("ClientConfig")
			.field("api_base", &self.api_base)
			.field("app_id", &"<redacted>")
			.finish()
	}
}

/// Failure to assemble a [`ClientConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
	/// [`OXR_APP_ID`](APP_ID_ENV) is not set.
	#[error("the OXR_APP_ID environment variable is not set")]
	MissingAppId,
	/// An environment variable holds invalid Unicode.
	#[error("the {0} environment variable is not valid Unicode")]
	NotUnicode(&'static str),
}
