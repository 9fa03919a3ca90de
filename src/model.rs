//! Typed views of the API payloads.
//!
//! The [`Client`](crate::Client) hands back JSON as the API sent it; these types can be obtained
//! from it with [`TryFrom`].

use std::{collections::BTreeMap, ops::Mul};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json as json;

/// [`currencies.json`](https://docs.openexchangerates.org/reference/currencies-json): currency
/// code to currency name.
pub type Currencies = BTreeMap<String, String>;

/// [`latest.json`](https://docs.openexchangerates.org/reference/latest-json) and
/// [`historical/*.json`](https://docs.openexchangerates.org/reference/historical-json) payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExchangeRates {
	/// Usage disclaimer.
	#[serde(default)]
	pub disclaimer: String,
	/// License.
	#[serde(default)]
	pub license: String,
	/// UNIX timestamp of the rates.
	pub timestamp: i64,
	/// The base currency.
	pub base: String,
	/// Units of each currency per one unit of [`base`](Self::base).
	pub rates: BTreeMap<String, f64>,
}

impl ExchangeRates {
	/// When the rates were published.
	pub fn updated_at(&self) -> Option<DateTime<Utc>> {
		DateTime::<Utc>::from_timestamp(self.timestamp, 0)
	}

	/// Gets the rate for the given currency, if exists.
	pub fn rate(&self, currency: &str) -> Option<f64> {
		if currency == self.base {
			return Some(self.rates.get(currency).copied().unwrap_or(1.0));
		}
		self.rates.get(currency).copied()
	}

	/// Converts an amount between currencies through the base currency.
	///
	/// Returns [`None`] if either the `from` or `to` currencies are missing.
	pub fn convert<T>(&self, amount: T, from: &str, to: &str) -> Option<T>
	where T: Mul<f64, Output = T> {
		let from_value = self.rate(from)?;
		let to_value = self.rate(to)?;
		Some(amount * (to_value / from_value))
	}
}

impl TryFrom<json::Value> for ExchangeRates {
	type Error = json::Error;
	fn try_from(value: json::Value) -> Result<Self, Self::Error> { json::from_value(value) }
}

/// [`time-series.json`](https://docs.openexchangerates.org/reference/time-series-json) payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeSeries {
	/// Usage disclaimer.
	#[serde(default)]
	pub disclaimer: String,
	/// License.
	#[serde(default)]
	pub license: String,
	/// First day of the series.
	pub start_date: NaiveDate,
	/// Last day of the series.
	pub end_date: NaiveDate,
	/// The base currency.
	pub base: String,
	/// Rates per day.
	pub rates: BTreeMap<NaiveDate, BTreeMap<String, f64>>,
}

impl TryFrom<json::Value> for TimeSeries {
	type Error = json::Error;
	fn try_from(value: json::Value) -> Result<Self, Self::Error> { json::from_value(value) }
}

/// [`convert`](https://docs.openexchangerates.org/reference/convert) payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Conversion {
	/// Usage disclaimer.
	#[serde(default)]
	pub disclaimer: String,
	/// License.
	#[serde(default)]
	pub license: String,
	/// Echo of the request.
	pub request: ConversionRequest,
	/// Rate used.
	pub meta: ConversionMeta,
	/// The converted amount.
	pub response: f64,
}

/// [`Conversion::request`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConversionRequest {
	/// The request path.
	pub query: String,
	/// The amount to convert.
	pub amount: f64,
	/// The source currency.
	pub from: String,
	/// The target currency.
	pub to: String,
}

/// [`Conversion::meta`]
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ConversionMeta {
	/// UNIX timestamp of the rate.
	pub timestamp: i64,
	/// The rate from [`ConversionRequest::from`] to [`ConversionRequest::to`].
	pub rate: f64,
}

impl TryFrom<json::Value> for Conversion {
	type Error = json::Error;
	fn try_from(value: json::Value) -> Result<Self, Self::Error> { json::from_value(value) }
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn rates() -> ExchangeRates {
		ExchangeRates::try_from(json!({
			"disclaimer": "Usage subject to terms",
			"license": "https://openexchangerates.org/license",
			"timestamp": 1673740800,
			"base": "USD",
			"rates": { "USD": 1.0, "EUR": 0.9, "ILS": 3.1 }
		}))
		.unwrap()
	}

	#[test]
	fn test_convert() {
		let rates = rates();
		assert_eq!(rates.convert(1234.0, "USD", "USD"), Some(1234.));
		assert_eq!(rates.convert(1234.0, "EUR", "EUR"), Some(1234.));
		assert_eq!(rates.convert(1234.0, "ILS", "ILS"), Some(1234.));
		assert_eq!(rates.convert(1.0, "ILS", "EUR"), Some(0.9 / 3.1));
		assert_eq!(rates.convert(1.0, "EUR", "ILS"), Some(3.1 / 0.9));
		assert_eq!(rates.convert(1.0, "EUR", "JPY"), None);
	}

	#[test]
	fn base_rate_is_implicit() {
		let mut rates = rates();
		rates.rates.remove("USD");
		assert_eq!(rates.rate("USD"), Some(1.0));
		assert_eq!(rates.updated_at().unwrap().timestamp(), 1673740800);
	}

	#[test]
	fn time_series() {
		let series = TimeSeries::try_from(json!({
			"start_date": "2013-01-01",
			"end_date": "2013-01-02",
			"base": "AUD",
			"rates": {
				"2013-01-01": { "BTC": 0.0778595876, "EUR": 0.785518 },
				"2013-01-02": { "BTC": 0.0789400739, "EUR": 0.795034 }
			}
		}))
		.unwrap();
		assert_eq!(series.start_date, NaiveDate::from_ymd_opt(2013, 1, 1).unwrap());
		assert_eq!(series.rates.len(), 2);
		assert_eq!(series.rates[&series.end_date]["EUR"], 0.795034);
	}

	#[test]
	fn conversion() {
		let conversion = Conversion::try_from(json!({
			"disclaimer": "Usage subject to terms",
			"license": "https://openexchangerates.org/license",
			"request": {
				"query": "/convert/19999.95/GBP/EUR",
				"amount": 19999.95,
				"from": "GBP",
				"to": "EUR"
			},
			"meta": { "timestamp": 1449885661, "rate": 1.383702 },
			"response": 27673.975864
		}))
		.unwrap();
		assert_eq!(conversion.request.from, "GBP");
		assert_eq!(conversion.meta.rate, 1.383702);
		assert_eq!(conversion.response, 27673.975864);
	}
}
