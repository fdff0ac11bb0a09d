use std::time::Duration;

use clap::{Parser, Subcommand};
use flights::{DEFAULT_FLIGHT_LIMIT, live_flights_schema, parse_states};
use serde_json::Value;
use tracing_subscriber::EnvFilter;


const DEFAULT_OPENSKY_API_URL: &str = "https://opensky-network.org/api/states/all";
const OPENSKY_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("limit must be greater than zero")]
    ZeroLimit,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {body}")]
    ServerError { status: u16, body: String },
    #[error("unexpected response shape: {0}")]
    Parse(#[from] flights::ParseError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "skydeck", about = "SkyDeck live-flight debug CLI")]
struct Cli {
    #[arg(long, env = "SKYDECK_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the `live_flights` table schema.
    Schema,
    /// Fetch OpenSky directly and print parsed records as JSON lines.
    Fetch {
        #[arg(long, env = "OPENSKY_API_URL", default_value = DEFAULT_OPENSKY_API_URL)]
        api_url: String,
        #[arg(long, default_value_t = DEFAULT_FLIGHT_LIMIT)]
        limit: usize,
    },
    /// List flights from the server.
    Flights {
        #[arg(long, default_value_t = 50)]
        limit: usize,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        airborne: Option<bool>,
    },
    /// Look up one aircraft by ICAO 24-bit address.
    Flight { icao24: String },
    /// Print aggregate flight statistics from the server.
    Summary,
    /// Print the server's last sync checkpoint.
    Status,
    Ping,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let base_url = normalize_base_url(&cli.base_url)?;

    match cli.command {
        Command::Schema => print_json(&serde_json::to_value(live_flights_schema())?),
        Command::Fetch { api_url, limit } => run_fetch(&api_url, limit).await,
        Command::Flights { limit, country, airborne } => {
            if limit == 0 {
                return Err(CliError::ZeroLimit);
            }
            let request = flights_request(&reqwest::Client::new(), &base_url, limit, country.as_deref(), airborne);
            print_json(&send_json(request).await?)
        }
        Command::Flight { icao24 } => {
            let path = format!("/api/flights/{}", icao24.trim().to_ascii_lowercase());
            print_json(&api_get(&base_url, &path).await?)
        }
        Command::Summary => print_json(&api_get(&base_url, "/api/flights/summary").await?),
        Command::Status => print_json(&api_get(&base_url, "/api/sync/status").await?),
        Command::Ping => run_ping(&base_url).await,
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let response = reqwest::get(format!("{base_url}/healthz")).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), body: "health check failed".to_owned() });
    }
    println!("ok");
    Ok(())
}

async fn run_fetch(api_url: &str, limit: usize) -> Result<(), CliError> {
    if limit == 0 {
        return Err(CliError::ZeroLimit);
    }
    let client = reqwest::Client::builder().timeout(OPENSKY_TIMEOUT).build()?;
    tracing::debug!(api_url, limit, "fetching OpenSky states");
    let response = client.get(api_url).send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CliError::ServerError { status: status.as_u16(), body });
    }
    let body = response.json::<Value>().await?;
    let parsed = parse_states(&body, limit)?;

    for record in &parsed.records {
        println!("{}", serde_json::to_string(record)?);
    }
    eprintln!("fetched {} flights (skipped {})", parsed.records.len(), parsed.skipped);
    Ok(())
}

async fn api_get(base_url: &str, path: &str) -> Result<Value, CliError> {
    send_json(reqwest::Client::new().get(format!("{base_url}{path}"))).await
}

async fn send_json(request: reqwest::RequestBuilder) -> Result<Value, CliError> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CliError::ServerError { status: status.as_u16(), body });
    }
    Ok(response.json::<Value>().await?)
}

fn normalize_base_url(base_url: &str) -> Result<String, CliError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_owned())
    } else {
        Err(CliError::InvalidBaseUrl(base_url.to_owned()))
    }
}

fn flights_request(
    client: &reqwest::Client,
    base_url: &str,
    limit: usize,
    country: Option<&str>,
    airborne: Option<bool>,
) -> reqwest::RequestBuilder {
    let mut query = vec![("limit", limit.to_string())];
    if let Some(country) = country.map(str::trim).filter(|c| !c.is_empty()) {
        query.push(("country", country.to_owned()));
    }
    if let Some(airborne) = airborne {
        query.push(("airborne", airborne.to_string()));
    }
    client.get(format!("{base_url}/api/flights")).query(&query)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
