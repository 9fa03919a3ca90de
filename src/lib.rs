//! [Open Exchange Rates](https://openexchangerates.org/) API library.
//!
//! ```no_run
//! use openexchangerates::{model::ExchangeRates, Client};
//!
//! let client = Client::new("YOUR_APP_ID");
//! let rates = ExchangeRates::try_from(client.get_historical("2023-01-15", None, None)?)?;
//! println!("{:?}", rates.convert(100.0, "EUR", "JPY"));
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]

mod client;
pub use client::Client;

pub mod config;
pub use config::{ClientConfig, ConfigError, DEFAULT_API_BASE};

pub mod currency;
pub use currency::{CurrencyCode, Symbols};

mod error;
pub use error::{Error, Result};

pub mod model;

mod transport;
pub use transport::{Response, Transport};

pub mod url;
pub use self::url::{Endpoint, Params, Request};
