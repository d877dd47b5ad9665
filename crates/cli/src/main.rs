use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use idokep_core::{
    FetchConfig, Fetcher, FileFetcher, HttpFetcher, IdokepProvider, JsonConfig, ProviderConfig, TextConfig,
    TextFormatter, WeatherProvider, to_json,
};
use owo_colors::OwoColorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use url::Url;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for weather records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(format!("Invalid format: {}. Valid options: json, text", s)),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Current conditions
    Current {
        /// City name as used on idokep.hu
        city: String,
    },
    /// Multi-day forecast
    Days {
        /// City name as used on idokep.hu
        city: String,
    },
    /// Hour-by-hour forecast
    Hours {
        /// City name as used on idokep.hu
        city: String,
    },
}

impl Command {
    fn city(&self) -> &str {
        match self {
            Command::Current { city } | Command::Days { city } | Command::Hours { city } => city,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Command::Current { .. } => "current conditions",
            Command::Days { .. } => "daily forecast",
            Command::Hours { .. } => "hourly forecast",
        }
    }
}

/// Read current conditions and forecasts from idokep.hu
#[derive(Parser, Debug)]
#[command(name = "idokep")]
#[command(version)]
#[command(about = "Read current conditions and forecasts from idokep.hu", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output format (json, text)
    #[arg(short, long, global = true, default_value = "json", value_name = "FORMAT")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Read the page from a saved HTML file instead of fetching it
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Site root to fetch pages from
    #[arg(long, global = true, default_value = idokep_core::DEFAULT_BASE_URL, value_name = "URL")]
    base_url: Url,

    /// Date used to place forecast columns (default: today)
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    today: Option<NaiveDate>,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, global = true, value_name = "UA")]
    user_agent: Option<String>,

    /// Single-line JSON instead of pretty printed
    #[arg(long, global = true)]
    compact: bool,

    /// Include icon URLs in text output
    #[arg(long, global = true)]
    images: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("idokep_core=debug,idokep=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the selected command and render its records
async fn render<F: Fetcher>(provider: &IdokepProvider<F>, args: &Args) -> anyhow::Result<String> {
    let city = args.command.city();
    let json = JsonConfig { pretty: !args.compact };
    let text = TextFormatter::new(TextConfig { header: Some(city.to_string()), include_images: args.images });

    let output = match &args.command {
        Command::Current { .. } => {
            let current = provider.get_current(city).await.context("Failed to read current conditions")?;
            match args.format {
                OutputFormat::Json => to_json(&current, &json)?,
                OutputFormat::Text => text.current(&current),
            }
        }
        Command::Days { .. } => {
            let days = provider.get_days(city).await.context("Failed to read daily forecast")?;
            if args.verbose {
                echo::print_count("Days", days.len());
            }
            match args.format {
                OutputFormat::Json => to_json(&days, &json)?,
                OutputFormat::Text => text.days(&days),
            }
        }
        Command::Hours { .. } => {
            let hours = provider.get_hours(city).await.context("Failed to read hourly forecast")?;
            if args.verbose {
                echo::print_count("Hours", hours.len());
            }
            match args.format {
                OutputFormat::Json => to_json(&hours, &json)?,
                OutputFormat::Text => text.hours(&hours),
            }
        }
    };

    Ok(output)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.verbose {
        echo::print_banner();
        echo::print_step(
            1,
            2,
            &format!("Reading {} for {}", args.command.label(), args.command.city().bright_white()),
        );
    }

    let mut config = ProviderConfig::builder().base_url(args.base_url.clone());
    if let Some(today) = args.today {
        config = config.today(today);
    }
    let config = config.build();

    let output = match &args.file {
        Some(path) => {
            if args.verbose {
                echo::print_info(&format!("Using saved page {}", path.display().bright_white()));
            }
            debug!(path = %path.display(), "reading page from file");
            let provider = IdokepProvider::new(FileFetcher::new(path.clone()), config);
            render(&provider, &args).await?
        }
        None => {
            let fetch_config = FetchConfig {
                timeout: args.timeout,
                user_agent: args.user_agent.clone().unwrap_or_else(|| FetchConfig::default().user_agent),
            };
            debug!(timeout = args.timeout, base_url = %args.base_url, "fetching over HTTP");
            let fetcher = HttpFetcher::new(fetch_config).context("Failed to build HTTP client")?;
            let provider = IdokepProvider::new(fetcher, config);
            render(&provider, &args).await?
        }
    };

    if args.verbose {
        echo::print_step(2, 2, "Writing output");
        eprintln!(
            "  {} {}",
            "Format:".dimmed(),
            format!("{:?}", args.format).bright_white()
        );
        eprintln!();
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", output);
            if args.format == OutputFormat::Json {
                println!();
            }
        }
    }

    Ok(())
}
