use chrono::NaiveDate;
use tracing::debug;
use url::Url;

use crate::dates::DateCursor;
use crate::number::{is_placeholder, parse_integer, parse_number};
use crate::parse::{Document, Element};
use crate::types::{CurrentWeather, DayForecast, HourForecast, Precipitation, TemperatureRange};
use crate::{Result, WeatherError};

/// Selectors for the idokep.hu page layout
pub mod selectors {
    pub const CURRENT_CONTAINER: &str = ".current-weather-lockup";
    pub const CURRENT_ICON: &str = ".current-weather-icon > img";
    pub const CURRENT_TEMPERATURE: &str = ".current-temperature";

    pub const DAY_COLUMN: &str = ".dailyForecastCol";
    pub const DAY_NUMBER: &str = ".dfColHeader .dfDayNum";
    pub const DAY_RAIN_LEVEL: &str = ".rainlevel-container .mm";
    pub const DAY_MIN_MAX: &str = ".min-max-container a";

    pub const HOUR_CARD: &str = ".new-hourly-forecast-card";
    pub const HOUR_LABEL: &str = ".new-hourly-forecast-hour";
    pub const HOUR_TEMPERATURE: &str = ".tempValue > a";
    pub const HOUR_RAIN_CHANCE: &str = ".hourly-rain-chance > .interact";

    pub const FORECAST_ICON: &str = ".forecast-icon";
}

use selectors::*;

/// Resolve the `src` of the first `selector` match against the site base
///
/// Site-absolute paths are resolved under the base path, so a base with a
/// path prefix (a mirror or proxy) keeps it. Absolute URLs are kept as is.
fn image_url(scope: &Element<'_>, selector: &str, base: &Url) -> Result<String> {
    let src = scope.find_one(selector)?.attr("src").ok_or_else(|| WeatherError::MissingAttribute {
        selector: selector.to_string(),
        attribute: "src".to_string(),
    })?;
    let src = src.trim();

    if let Ok(absolute) = Url::parse(src) {
        return Ok(absolute.to_string());
    }

    let url = if src.starts_with("//") {
        base.join(src)
    } else {
        directory_of(base).join(src.trim_start_matches('/'))
    };

    url.map(|url| url.to_string())
        .map_err(|e| WeatherError::InvalidUrl(format!("{}: {}", src, e)))
}

/// `base` with a trailing slash so joins land beneath its path
fn directory_of(base: &Url) -> Url {
    let mut dir = base.clone();
    if !dir.path().ends_with('/') {
        let path = format!("{}/", dir.path());
        dir.set_path(&path);
    }
    dir
}

/// Extract the current conditions from an `/idojaras/` page
pub fn extract_current(doc: &Document, base: &Url) -> Result<CurrentWeather> {
    let container = doc.find_one(CURRENT_CONTAINER)?;

    Ok(CurrentWeather {
        image: image_url(&container, CURRENT_ICON, base)?,
        temperature: parse_integer(&container.find_one(CURRENT_TEMPERATURE)?.text())?,
    })
}

/// Daily rain volume; absent badge or placeholder text means none, negatives clamp to 0
fn day_precipitation(column: &Element<'_>) -> Result<f64> {
    let levels = column.find_all_or_empty(DAY_RAIN_LEVEL)?;

    match levels.first() {
        Some(level) => {
            let text = level.text();
            if is_placeholder(&text) { Ok(0.0) } else { Ok(parse_number(&text)?.max(0.0)) }
        }
        None => Ok(0.0),
    }
}

fn day_number(cell: &Element<'_>) -> Result<u32> {
    let text = cell.text();
    text.trim()
        .parse::<u32>()
        .map_err(|_| WeatherError::ParseError { text: text.clone() })
}

/// Extract the multi-day forecast from an `/elorejelzes/` page
///
/// Columns without a day number are layout placeholders and are skipped.
/// The min/max links are read positionally: the page lists the maximum
/// first and the minimum second, and values are kept as listed.
pub fn extract_days(doc: &Document, base: &Url, today: NaiveDate) -> Result<Vec<DayForecast>> {
    let columns = doc.find_all(DAY_COLUMN)?;
    let mut cursor = DateCursor::new(today);
    let mut days = Vec::with_capacity(columns.len());

    for (index, column) in columns.iter().enumerate() {
        let Some(cell) = column.find_first(DAY_NUMBER)? else {
            debug!(column = index, "skipping forecast column without day number");
            continue;
        };

        let day = day_number(&cell)?;
        let value = day_precipitation(column)?;

        let links = column.find_exactly(DAY_MIN_MAX, 2)?;
        let max = parse_integer(&links[0].text())?;
        let min = parse_integer(&links[1].text())?;

        let image = image_url(column, FORECAST_ICON, base)?;
        let date = cursor.advance(day)?;

        days.push(DayForecast {
            image,
            day,
            date,
            temperature: TemperatureRange { min, max },
            precipitation: Precipitation { value, probability: None },
        });
    }

    debug!(days = days.len(), "extracted daily forecast");
    Ok(days)
}

/// Hour from a `HH:MM` label
fn hour_of(label: &str) -> Result<u32> {
    let hour = label
        .split(':')
        .next()
        .map(str::trim)
        .and_then(|h| h.parse::<u32>().ok())
        .ok_or_else(|| WeatherError::InvalidHour(label.to_string()))?;

    if hour > 23 {
        return Err(WeatherError::InvalidHour(label.to_string()));
    }
    Ok(hour)
}

/// Extract the hourly forecast from an `/elorejelzes/` page
///
/// A card without a rain-chance badge reports a probability of 0.
pub fn extract_hours(doc: &Document, base: &Url) -> Result<Vec<HourForecast>> {
    let cards = doc.find_all(HOUR_CARD)?;
    let mut hours = Vec::with_capacity(cards.len());

    for card in &cards {
        let probability = match card.find_first(HOUR_RAIN_CHANCE)? {
            Some(badge) => parse_integer(&badge.text())?.max(0) as u32,
            None => 0,
        };

        hours.push(HourForecast {
            hour: hour_of(&card.find_one(HOUR_LABEL)?.text())?,
            image: image_url(card, FORECAST_ICON, base)?,
            temperature: parse_integer(&card.find_one(HOUR_TEMPERATURE)?.text())?,
            precipitation: Precipitation { value: 0.0, probability: Some(probability) },
        });
    }

    debug!(hours = hours.len(), "extracted hourly forecast");
    Ok(hours)
}
