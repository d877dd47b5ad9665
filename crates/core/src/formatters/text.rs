use std::fmt::Write;

use crate::types::{CurrentWeather, DayForecast, HourForecast};

/// Configuration for plain text output
#[derive(Debug, Clone, Default)]
pub struct TextConfig {
    /// Title line printed above the table, e.g. the city name
    pub header: Option<String>,

    /// Include the icon URL column
    pub include_images: bool,
}

/// Plain text formatter for weather records
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn current(&self, current: &CurrentWeather) -> String {
        current_to_text(current, &self.config)
    }

    pub fn days(&self, days: &[DayForecast]) -> String {
        days_to_text(days, &self.config)
    }

    pub fn hours(&self, hours: &[HourForecast]) -> String {
        hours_to_text(hours, &self.config)
    }
}

fn push_header(output: &mut String, config: &TextConfig) {
    if let Some(header) = &config.header {
        output.push_str(header);
        output.push('\n');
        output.push_str(&"=".repeat(header.chars().count()));
        output.push_str("\n\n");
    }
}

/// Render current conditions as `key: value` lines
pub fn current_to_text(current: &CurrentWeather, config: &TextConfig) -> String {
    let mut output = String::new();
    push_header(&mut output, config);

    let _ = writeln!(output, "Temperature: {}°C", current.temperature);
    if config.include_images {
        let _ = writeln!(output, "Icon: {}", current.image);
    }

    output
}

/// Render the daily forecast as an aligned table
pub fn days_to_text(days: &[DayForecast], config: &TextConfig) -> String {
    let mut output = String::new();
    push_header(&mut output, config);

    let _ = write!(output, "{:<10}  {:>3}  {:>4}  {:>4}  {:>7}", "Date", "Day", "Max", "Min", "Rain mm");
    if config.include_images {
        output.push_str("  Icon");
    }
    output.push('\n');

    for day in days {
        let _ = write!(
            output,
            "{:<10}  {:>3}  {:>4}  {:>4}  {:>7.1}",
            day.date.to_string(),
            day.day,
            day.temperature.max,
            day.temperature.min,
            day.precipitation.value
        );
        if config.include_images {
            let _ = write!(output, "  {}", day.image);
        }
        output.push('\n');
    }

    output
}

/// Render the hourly forecast as an aligned table
pub fn hours_to_text(hours: &[HourForecast], config: &TextConfig) -> String {
    let mut output = String::new();
    push_header(&mut output, config);

    let _ = write!(output, "{:<5}  {:>4}  {:>6}", "Hour", "Temp", "Rain %");
    if config.include_images {
        output.push_str("  Icon");
    }
    output.push('\n');

    for hour in hours {
        let _ = write!(
            output,
            "{:02}:00  {:>4}  {:>6}",
            hour.hour,
            hour.temperature,
            hour.precipitation.probability.unwrap_or(0)
        );
        if config.include_images {
            let _ = write!(output, "  {}", hour.image);
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Precipitation, TemperatureRange};
    use chrono::NaiveDate;

    fn sample_day() -> DayForecast {
        DayForecast {
            image: "https://www.idokep.hu/assets/sun.svg".to_string(),
            day: 14,
            date: NaiveDate::from_ymd_opt(2026, 11, 14).unwrap(),
            temperature: TemperatureRange { min: 3, max: 11 },
            precipitation: Precipitation { value: 2.4, probability: None },
        }
    }

    #[test]
    fn test_current_text() {
        let current = CurrentWeather { image: "https://www.idokep.hu/assets/sun.svg".to_string(), temperature: 12 };
        let config = TextConfig { header: Some("Budapest".to_string()), include_images: true };
        let text = current_to_text(&current, &config);

        assert!(text.starts_with("Budapest\n========\n"));
        assert!(text.contains("Temperature: 12°C"));
        assert!(text.contains("Icon: https://www.idokep.hu/assets/sun.svg"));
    }

    #[test]
    fn test_days_table() {
        let text = days_to_text(&[sample_day()], &TextConfig::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Date"));
        assert!(lines[1].starts_with("2026-11-14"));
        assert!(lines[1].ends_with("2.4"));
        assert!(!text.contains("https://"));
    }

    #[test]
    fn test_hours_table() {
        let hour = HourForecast {
            hour: 9,
            image: "https://www.idokep.hu/assets/cloud.svg".to_string(),
            temperature: 5,
            precipitation: Precipitation { value: 0.0, probability: Some(0) },
        };
        let formatter = TextFormatter::new(TextConfig::default());
        let text = formatter.hours(&[hour]);

        assert!(text.lines().nth(1).unwrap().starts_with("09:00"));
    }
}
