//! URL building

use std::borrow::Cow;

use url::Url;

/// An API endpoint, relative to the API base.
#[derive(Debug, Hash, Clone, PartialEq, Eq)]
pub enum Endpoint {
	/// [`currencies.json`](https://docs.openexchangerates.org/reference/currencies-json)
	Currencies,
	/// [`latest.json`](https://docs.openexchangerates.org/reference/latest-json)
	Latest,
	/// [`historical/*.json`](https://docs.openexchangerates.org/reference/historical-json), for a
	/// `YYYY-MM-DD` date.
	Historical(String),
	/// [`time-series.json`](https://docs.openexchangerates.org/reference/time-series-json)
	TimeSeries,
	/// [`convert/{value}/{from}/{to}`](https://docs.openexchangerates.org/reference/convert)
	Convert {
		/// The amount to convert.
		value: String,
		/// The currency to convert from.
		from: String,
		/// The currency to convert to.
		to: String,
	},
}

impl Endpoint {
	/// The path relative to the API base.
	///
	/// Nothing is validated or escaped, the date of [`Historical`](Endpoint::Historical) goes into
	/// the path verbatim.
	pub fn path(&self) -> Cow<'static, str> {
		match self {
			Self::Currencies => "currencies.json".into(),
			Self::Latest => "latest.json".into(),
			Self::Historical(date) => format!("historical/{date}.json").into(),
			Self::TimeSeries => "time-series.json".into(),
			Self::Convert { value, from, to } => format!("convert/{value}/{from}/{to}").into(),
		}
	}
}

/// Query parameters, in insertion order.
#[derive(Debug, Hash, Default, Clone, PartialEq, Eq)]
pub struct Params(Vec<(&'static str, String)>);

impl Params {
	/// Creates empty [`Params`].
	pub const fn new() -> Self { Self(Vec::new()) }

	/// Sets a parameter.
	///
	/// A parameter that is already set keeps its position and takes the new value.
	pub fn insert(&mut self, name: &'static str, value: impl Into<String>) -> &mut Self {
		let value = value.into();
		match self.0.iter_mut().find(|(n, _)| *n == name) {
			Some((_, v)) => *v = value,
			None => self.0.push((name, value)),
		}
		self
	}

	/// Gets a parameter.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
	}

	/// Iterates over the parameters.
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
		self.0.iter().map(|(n, v)| (*n, v.as_str()))
	}

	/// The count of parameters.
	pub fn len(&self) -> usize { self.0.len() }

	/// Whether there are no parameters.
	pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl<const N: usize> From<[(&'static str, String); N]> for Params {
	fn from(params: [(&'static str, String); N]) -> Self {
		let mut this = Self::new();
		for (name, value) in params {
			this.insert(name, value);
		}
		this
	}
}

/// A prepared `GET` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
	endpoint: Endpoint,
	params: Params,
	url: Url,
}

impl Request {
	/// Joins `api_base` and the endpoint with a `/` and appends the query.
	pub(crate) fn prepare(
		api_base: &str,
		endpoint: Endpoint,
		params: Params,
	) -> Result<Self, url::ParseError> {
		let joined = format!("{api_base}/{}", endpoint.path());
		let url = Url::parse_with_params(&joined, params.iter())?;
		Ok(Self { endpoint, params, url })
	}

	/// The endpoint.
	pub fn endpoint(&self) -> &Endpoint { &self.endpoint }

	/// The query parameters.
	pub fn params(&self) -> &Params { &self.params }

	/// The full URL, query included.
	pub fn url(&self) -> &Url { &self.url }

	/// The full URL with the `app_id` value masked, for logs.
	pub fn redacted_url(&self) -> Url {
		let mut url = self.url.clone();
		let masked = self.params.iter().map(|(name, value)| match name {
			"app_id" => (name, "***"),
			_ => (name, value),
		});
		url.query_pairs_mut().clear().extend_pairs(masked);
		url
	}
}

impl std::fmt::Display for Endpoint {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.write_str(&self.path())
	}
}
