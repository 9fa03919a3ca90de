//! [Currency codes](CurrencyCode) and the [`Symbols`] filter.

use std::{
	error::Error,
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// [Currency code](https://en.wikipedia.org/wiki/ISO_4217).
#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct CurrencyCode {
	/// The code in uppercase alpha ASCII bytes.
	code: [u8; 3],
}

/// The default currency code is `USD`.
///
/// It is the API's default base currency.
impl Default for CurrencyCode {
	fn default() -> Self {
		Self { code: *b"USD" }
	}
}

impl TryFrom<[u8; 3]> for CurrencyCode {
	type Error = InvalidCurrencyCodeError;

	fn try_from(value: [u8; 3]) -> Result<Self, Self::Error> {
		if value.iter().all(u8::is_ascii_uppercase) {
			Ok(Self { code: value })
		} else {
			Err(InvalidCurrencyCodeError)
		}
	}
}

impl<'a> TryFrom<&'a [u8]> for CurrencyCode {
	type Error = InvalidCurrencyCodeError;

	fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
		let value: [u8; 3] = value.try_into().map_err(|_| InvalidCurrencyCodeError)?;
		Self::try_from(value)
	}
}

impl<'a> TryFrom<&'a str> for CurrencyCode {
	type Error = InvalidCurrencyCodeError;

	fn try_from(value: &'a str) -> Result<Self, Self::Error> {
		Self::try_from(value.as_bytes())
	}
}

impl FromStr for CurrencyCode {
	type Err = InvalidCurrencyCodeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.try_into()
	}
}

impl AsRef<[u8]> for CurrencyCode {
	fn as_ref(&self) -> &[u8] {
		&self.code
	}
}

impl AsRef<str> for CurrencyCode {
	fn as_ref(&self) -> &str {
		unsafe {
			// safety: the code is always ASCII per the invariant documented in CurrencyCode::code
			// therefore valid UTF-8.
			std::str::from_utf8_unchecked(&self.code)
		}
	}
}

impl Display for CurrencyCode {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		let code: &str = self.as_ref();
		code.fmt(f)
	}
}

impl Serialize for CurrencyCode {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_ref())
	}
}

impl<'de> Deserialize<'de> for CurrencyCode {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let code = String::deserialize(deserializer)?;
		code.parse().map_err(|_| {
			let expected = &"a three-letter uppercase currency code";
			de::Error::invalid_value(de::Unexpected::Str(&code), expected)
		})
	}
}

/// Invalid currency code error.
///
/// Valid currency codes are three uppercase alpha ASCII characters.
#[derive(Debug, Hash, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct InvalidCurrencyCodeError;

impl Display for InvalidCurrencyCodeError {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		"invalid currency code".fmt(f)
	}
}

impl Error for InvalidCurrencyCodeError {}

/// The [`symbols`](https://docs.openexchangerates.org/reference/latest-json) filter.
///
/// # Examples
/// ```
/// # use openexchangerates::Symbols;
/// assert_eq!(Symbols::from(["USD", "EUR", "JPY"]).to_query(), "USD,EUR,JPY");
/// assert_eq!(Symbols::from("USD,EUR").to_query(), "USD,EUR");
/// ```
#[derive(Debug, Hash, Clone, PartialEq, Eq)]
pub enum Symbols {
	/// Currency codes, sent comma-separated in the given order.
	Codes(Vec<String>),
	/// A query value sent as is.
	Raw(String),
}

impl Symbols {
	/// The `symbols` query value.
	pub fn to_query(&self) -> String {
		match self {
			Self::Codes(codes) => codes.join(","),
			Self::Raw(raw) => raw.clone(),
		}
	}
}

impl From<&str> for Symbols {
	fn from(raw: &str) -> Self { Self::Raw(raw.to_owned()) }
}

impl From<String> for Symbols {
	fn from(raw: String) -> Self { Self::Raw(raw) }
}

impl From<Vec<String>> for Symbols {
	fn from(codes: Vec<String>) -> Self { Self::Codes(codes) }
}

impl From<Vec<&str>> for Symbols {
	fn from(codes: Vec<&str>) -> Self { codes.as_slice().into() }
}

impl From<&[&str]> for Symbols {
	fn from(codes: &[&str]) -> Self {
		Self::Codes(codes.iter().map(|&code| code.to_owned()).collect())
	}
}

impl<const N: usize> From<[&str; N]> for Symbols {
	fn from(codes: [&str; N]) -> Self { codes.as_slice().into() }
}

impl From<&[CurrencyCode]> for Symbols {
	fn from(codes: &[CurrencyCode]) -> Self {
		Self::Codes(codes.iter().map(CurrencyCode::to_string).collect())
	}
}

impl From<Vec<CurrencyCode>> for Symbols {
	fn from(codes: Vec<CurrencyCode>) -> Self { codes.as_slice().into() }
}

impl<const N: usize> From<[CurrencyCode; N]> for Symbols {
	fn from(codes: [CurrencyCode; N]) -> Self { codes.as_slice().into() }
}

impl FromIterator<CurrencyCode> for Symbols {
	fn from_iter<I: IntoIterator<Item = CurrencyCode>>(iter: I) -> Self {
		Self::Codes(iter.into_iter().map(|code| code.to_string()).collect())
	}
}
