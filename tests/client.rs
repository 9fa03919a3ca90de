use httpmock::{Method::GET, MockServer};
use openexchangerates::{
	model::{Currencies, ExchangeRates},
	Client, ClientConfig, Error, Symbols,
};
use serde_json::json;

fn client(server: &MockServer) -> Client {
	let api_base = format!("{}/api/", server.base_url());
	Client::with_config(ClientConfig::new("KEY").with_api_base(api_base))
}

#[test]
fn currencies() {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(GET).path("/api/currencies.json").query_param("app_id", "KEY");
		then.status(200)
			.header("content-type", "application/json")
			.body(r#"{"EUR":"Euro","USD":"United States Dollar"}"#);
	});

	let payload = client(&server).get_currencies().unwrap();
	mock.assert();
	assert_eq!(payload, json!({ "EUR": "Euro", "USD": "United States Dollar" }));
	let currencies: Currencies = serde_json::from_value(payload).unwrap();
	assert_eq!(currencies.keys().collect::<Vec<_>>(), ["EUR", "USD"]);
	assert_eq!(currencies["USD"], "United States Dollar");
}

#[test]
fn latest_with_filters() {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(GET)
			.path("/api/latest.json")
			.query_param("app_id", "KEY")
			.query_param("base", "EUR")
			.query_param("symbols", "USD,EUR,JPY");
		let body = json!({
			"disclaimer": "d",
			"license": "l",
			"timestamp": 1673740800,
			"base": "EUR",
			"rates": { "USD": 1.08, "EUR": 1.0, "JPY": 140.1 }
		});
		then.status(200).header("content-type", "application/json").body(body.to_string());
	});

	let symbols = Symbols::from(["USD", "EUR", "JPY"]);
	let payload = client(&server).get_latest(Some("EUR"), Some(symbols)).unwrap();
	mock.assert();
	let rates = ExchangeRates::try_from(payload).unwrap();
	assert_eq!(rates.base, "EUR");
	assert_eq!(rates.rate("JPY"), Some(140.1));
}

#[test]
fn latest_payload_unchanged() {
	let server = MockServer::start();
	server.mock(|when, then| {
		when.method(GET).path("/api/latest.json");
		then.status(200).body(r#"{"USD":1.0,"EUR":0.9}"#);
	});

	assert_eq!(client(&server).get_latest(None, None).unwrap(), json!({ "USD": 1.0, "EUR": 0.9 }));
}

#[test]
fn historical_date_in_path() {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(GET).path("/api/historical/2023-01-15.json").query_param("app_id", "KEY");
		then.status(200).body(r#"{"base":"USD","rates":{}}"#);
	});

	client(&server).get_historical("2023-01-15", None, None).unwrap();
	mock.assert();
}

#[test]
fn time_series_range() {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(GET)
			.path("/api/time-series.json")
			.query_param("app_id", "KEY")
			.query_param("start", "2013-01-01")
			.query_param("end", "2013-01-31")
			.query_param("symbols", "BTC");
		then.status(200).body(
			r#"{"start_date":"2013-01-01","end_date":"2013-01-31","base":"USD","rates":{}}"#,
		);
	});

	client(&server).get_time_series("2013-01-01", "2013-01-31", None, Some("BTC".into())).unwrap();
	mock.assert();
}

#[test]
fn convert_path() {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(GET).path("/api/convert/100/USD/EUR").query_param("app_id", "KEY");
		then.status(200).body(r#"{"response":90.5}"#);
	});

	let payload = client(&server).convert(100, "USD", "EUR").unwrap();
	mock.assert();
	assert_eq!(payload["response"], json!(90.5));
}

#[test]
fn unauthorized_is_status_error() {
	let server = MockServer::start();
	server.mock(|when, then| {
		when.method(GET);
		then.status(401)
			.header("x-reason", "invalid_app_id")
			.body(r#"{"error":true,"status":401,"message":"invalid_app_id"}"#);
	});

	let client = client(&server);
	let results = [
		client.get_currencies(),
		client.get_latest(None, None),
		client.get_historical("2023-01-15", None, None),
		client.get_time_series("2023-01-01", "2023-01-02", None, None),
		client.convert(1, "USD", "EUR"),
	];
	for result in results {
		match result {
			Err(error @ Error::Status { .. }) => {
				let response = error.response().unwrap();
				assert_eq!(response.status().as_u16(), 401);
				assert_eq!(response.headers()["x-reason"], "invalid_app_id");
				assert!(response.body().contains("invalid_app_id"));
				assert!(error.request().unwrap().url().as_str().starts_with(&server.base_url()));
			}
			other => panic!("expected a status error, got {other:?}"),
		}
	}
}

#[test]
fn malformed_date_surfaces_as_status_error() {
	let server = MockServer::start();
	server.mock(|when, then| {
		when.method(GET).path("/api/historical/15-01-2023.json");
		then.status(400).body(r#"{"error":true,"status":400,"message":"invalid_date"}"#);
	});

	let error = client(&server).get_historical("15-01-2023", None, None).unwrap_err();
	assert!(error.is_status());
}

#[test]
fn empty_body_is_decode_error() {
	let server = MockServer::start();
	server.mock(|when, then| {
		when.method(GET);
		then.status(200).body("");
	});

	let client = client(&server);
	assert!(matches!(client.get_currencies(), Err(Error::Decode { .. })));
	assert!(matches!(client.get_latest(None, None), Err(Error::Decode { .. })));
	assert!(matches!(client.convert(5, "EUR", "USD"), Err(Error::Decode { .. })));
}

#[test]
fn unreachable_server_is_transport_error() {
	let client = Client::with_config(ClientConfig::new("KEY").with_api_base("http://127.0.0.1:1"));
	let error = client.get_latest(None, None).unwrap_err();
	assert!(matches!(error, Error::Transport(_)));
	assert!(error.request().is_none());
}
