use clap::{Parser, Subcommand};
use openexchangerates::{Client, ClientConfig, CurrencyCode, Symbols};

#[derive(Parser, Debug)]
pub struct Cli {
	/// App ID, read from `OXR_APP_ID` when omitted.
	#[clap(long)]
	app_id: Option<String>,
	/// API base URL.
	#[clap(long)]
	api_base: Option<String>,
	#[clap(subcommand)]
	command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
	Currencies,
	Latest {
		#[clap(long)]
		base: Option<CurrencyCode>,
		symbols: Vec<CurrencyCode>,
	},
	Historical {
		date: String,
		#[clap(long)]
		base: Option<CurrencyCode>,
		symbols: Vec<CurrencyCode>,
	},
	TimeSeries {
		start: String,
		end: String,
		#[clap(long)]
		base: Option<CurrencyCode>,
		symbols: Vec<CurrencyCode>,
	},
	Convert {
		amount: f64,
		from: CurrencyCode,
		to: CurrencyCode,
	},
}

fn symbols(codes: Vec<CurrencyCode>) -> Option<Symbols> {
	(!codes.is_empty()).then(|| codes.into())
}

fn main() {
	let cli = Cli::parse();
	let config = match cli.app_id {
		Some(app_id) => ClientConfig::new(app_id),
		None => ClientConfig::from_env().unwrap(),
	};
	let config = match cli.api_base {
		Some(api_base) => config.with_api_base(api_base),
		None => config,
	};
	let client = Client::with_config(config);

	let base = |base: Option<CurrencyCode>| base.map(|code| code.to_string());
	let payload = match cli.command {
		CliCommand::Currencies => client.get_currencies(),
		CliCommand::Latest { base: b, symbols: s } => {
			client.get_latest(base(b).as_deref(), symbols(s))
		}
		CliCommand::Historical { date, base: b, symbols: s } => {
			client.get_historical(&date, base(b).as_deref(), symbols(s))
		}
		CliCommand::TimeSeries { start, end, base: b, symbols: s } => {
			client.get_time_series(&start, &end, base(b).as_deref(), symbols(s))
		}
		CliCommand::Convert { amount, from, to } => {
			client.convert(amount, &from.to_string(), &to.to_string())
		}
	};
	match payload {
		Ok(payload) => println!("{payload:#}"),
		Err(error) => {
			eprintln!("{error}");
			if let Some(response) = error.response() {
				eprintln!("{}", response.body());
			}
			std::process::exit(1);
		}
	}
}
