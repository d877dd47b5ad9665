pub mod dates;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod formatters;
pub mod number;
pub mod parse;
pub mod provider;
pub mod types;

pub use dates::{DateCursor, anchor_date, infer_dates};
pub use error::{Result, WeatherError};
pub use extract::{extract_current, extract_days, extract_hours};
pub use fetch::{FetchConfig, FileFetcher, Fetcher, HttpFetcher};
pub use formatters::{JsonConfig, TextConfig, TextFormatter, current_to_text, days_to_text, hours_to_text, to_json};
pub use number::{PLACEHOLDER, is_placeholder, parse_integer, parse_number};
pub use parse::{Document, Element};
pub use provider::{
    DEFAULT_BASE_URL, IdokepProvider, ProviderConfig, ProviderConfigBuilder, ProviderRegistry, WeatherProvider,
};
pub use types::{CurrentWeather, DayForecast, HourForecast, Precipitation, TemperatureRange};
