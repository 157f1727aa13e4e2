use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;

use vacation_points::api::{AppState, RankingReport, RecordsRequest, create_router};
use vacation_points::calculation::compute_ranking;
use vacation_points::config::ConfigLoader;
use vacation_points::error::EngineError;
use vacation_points::report::{render_ranking, render_weights};
use vacation_points::telemetry::{self, TelemetryError};

const DEFAULT_CONFIG_DIR: &str = "./config/standard";

#[derive(Parser, Debug)]
#[command(
    name = "vacation-points",
    about = "Score vacation periods by seasonal month weights and rank employees",
    version
)]
struct Cli {
    /// Log level or filter directive, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service
    Serve(ServeArgs),
    /// Print the ranking for a JSON file of employees and vacations
    Ranking(RankingArgs),
    /// Print the month weight table
    Weights(ConfigArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Configuration directory; built-in weights are used when it is absent
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    /// Port to listen on
    #[arg(long, default_value_t = 3000)]
    port: u16,
    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Args, Debug)]
struct RankingArgs {
    /// JSON file shaped like the `/ranking` request body
    #[arg(long)]
    input: PathBuf,
    /// Print the JSON report instead of the text table
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid listen address '{0}'")]
    Address(String),
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level)?;

    match cli.command {
        Command::Serve(args) => serve(args).await,
        Command::Ranking(args) => ranking(args),
        Command::Weights(args) => {
            let loader = load_config(args.config.as_deref())?;
            print!("{}", render_weights(loader.weights()));
            Ok(())
        }
    }
}

/// Loads the given directory, or `./config/standard` when it exists, or the
/// built-in defaults.
fn load_config(dir: Option<&Path>) -> Result<ConfigLoader, CliError> {
    match dir {
        Some(dir) => Ok(ConfigLoader::load(dir)?),
        None if Path::new(DEFAULT_CONFIG_DIR).is_dir() => {
            Ok(ConfigLoader::load(DEFAULT_CONFIG_DIR)?)
        }
        None => {
            info!("No configuration directory found, using built-in month weights");
            Ok(ConfigLoader::default())
        }
    }
}

async fn serve(args: ServeArgs) -> Result<(), CliError> {
    let loader = load_config(args.config.config.as_deref())?;
    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|_| CliError::Address(format!("{}:{}", args.host, args.port)))?;

    let app = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Vacation points engine listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn ranking(args: RankingArgs) -> Result<(), CliError> {
    let loader = load_config(args.config.config.as_deref())?;
    let text = std::fs::read_to_string(&args.input)?;
    let request: RecordsRequest = serde_json::from_str(&text)?;

    let store = request.into_store(loader.max_period_days())?;
    let ranking = compute_ranking(&store, loader.weights())?;

    if args.json {
        let report = RankingReport::build(ranking, loader.weights())?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_ranking(&ranking, loader.weights())?);
    }
    Ok(())
}
