//! [`Client`] for the [Open Exchange Rates](https://docs.openexchangerates.org/) API.

use std::fmt::Display;

use reqwest::StatusCode;
use serde_json as json;

use crate::{
	config::{ClientConfig, ConfigError},
	currency::Symbols,
	error::{Error, Result},
	transport::Transport,
	url::{Endpoint, Params, Request},
};

/// Open Exchange Rates client.
///
/// Every call is a single blocking `GET`. The payloads are returned as the API sent them, see
/// [`model`](crate::model) for typed views.
///
/// # Examples
/// ```no_run
/// # use openexchangerates::Client;
/// let client = Client::new("YOUR_APP_ID");
/// let latest = client.get_latest(Some("EUR"), Some(["USD", "JPY"].into()))?;
/// println!("{}", latest["rates"]["JPY"]);
/// # Ok::<_, openexchangerates::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Client<T = reqwest::blocking::Client> {
	config: ClientConfig,
	transport: T,
}

impl Client {
	/// Creates a new [`Client`] for the standard API root.
	pub fn new(app_id: impl Into<String>) -> Self {
		Self::with_config(ClientConfig::new(app_id))
	}

	/// Creates a new [`Client`] with the given configuration.
	pub fn with_config(config: ClientConfig) -> Self {
		Self::with_transport(config, reqwest::blocking::Client::new())
	}

	/// Creates a new [`Client`] configured from the environment, see [`ClientConfig::from_env`].
	pub fn from_env() -> Result<Self, ConfigError> {
		ClientConfig::from_env().map(Self::with_config)
	}
}

impl<T: Transport> Client<T> {
	/// Creates a new [`Client`] sending its requests through `transport`.
	pub fn with_transport(config: ClientConfig, transport: T) -> Self {
		Self { config, transport }
	}

	/// The configuration.
	pub fn config(&self) -> &ClientConfig { &self.config }

	/// [`currencies.json`](https://docs.openexchangerates.org/reference/currencies-json): all
	/// currency codes with their names.
	#[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
	pub fn get_currencies(&self) -> Result<json::Value> {
		let mut params = Params::new();
		params.insert("app_id", self.config.app_id());
		self.request(Endpoint::Currencies, params)
	}

	/// [`latest.json`](https://docs.openexchangerates.org/reference/latest-json): the latest rates.
	#[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
	pub fn get_latest(&self, base: Option<&str>, symbols: Option<Symbols>) -> Result<json::Value> {
		self.get_exchange_rates(Endpoint::Latest, base, symbols, Params::new())
	}

	/// [`historical/*.json`](https://docs.openexchangerates.org/reference/historical-json): the
	/// rates at the end of a `YYYY-MM-DD` day.
	///
	/// The date is not checked, a malformed one is reported by the API as a [`Error::Status`].
	#[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
	pub fn get_historical(
		&self,
		date: &str,
		base: Option<&str>,
		symbols: Option<Symbols>,
	) -> Result<json::Value> {
		let endpoint = Endpoint::Historical(date.to_owned());
		self.get_exchange_rates(endpoint, base, symbols, Params::new())
	}

	/// [`time-series.json`](https://docs.openexchangerates.org/reference/time-series-json): daily
	/// rates from `start` to `end`, both `YYYY-MM-DD`.
	#[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
	pub fn get_time_series(
		&self,
		start: &str,
		end: &str,
		base: Option<&str>,
		symbols: Option<Symbols>,
	) -> Result<json::Value> {
		let params = Params::from([("start", start.to_owned()), ("end", end.to_owned())]);
		self.get_exchange_rates(Endpoint::TimeSeries, base, symbols, params)
	}

	/// [`convert`](https://docs.openexchangerates.org/reference/convert): converts `value` from one
	/// currency to another at the latest rates.
	#[cfg_attr(
		feature = "tracing",
		tracing::instrument(skip(self, value), fields(value = %value), err)
	)]
	pub fn convert(
		&self,
		value: impl Display,
		from_symbol: &str,
		to_symbol: &str,
	) -> Result<json::Value> {
		let endpoint = Endpoint::Convert {
			value: value.to_string(),
			from: from_symbol.to_owned(),
			to: to_symbol.to_owned(),
		};
		let mut params = Params::new();
		params.insert("app_id", self.config.app_id());
		self.request(endpoint, params)
	}

	fn get_exchange_rates(
		&self,
		endpoint: Endpoint,
		base: Option<&str>,
		symbols: Option<Symbols>,
		mut params: Params,
	) -> Result<json::Value> {
		params.insert("app_id", self.config.app_id());
		if let Some(base) = base {
			params.insert("base", base);
		}
		if let Some(symbols) = symbols {
			params.insert("symbols", symbols.to_query());
		}
		self.request(endpoint, params)
	}

	fn request(&self, endpoint: Endpoint, params: Params) -> Result<json::Value> {
		let request = Request::prepare(self.config.api_base(), endpoint, params)?;
		#[cfg(feature = "tracing")]
		tracing::debug!(url = %request.redacted_url(), "GET");

		let response = self.transport.send(&request)?;
		#[cfg(feature = "tracing")]
		tracing::debug!(status = %response.status(), "response");

		if response.status() != StatusCode::OK {
			return Err(Error::Status { request: Box::new(request), response: Box::new(response) });
		}
		match response.json() {
			Ok(json::Value::Null) => Err(Error::Decode {
				request: Box::new(request),
				response: Box::new(response),
				source: None,
			}),
			Ok(payload) => Ok(payload),
			Err(source) => Err(Error::Decode {
				request: Box::new(request),
				response: Box::new(response),
				source: Some(source),
			}),
		}
	}
}
