//! Weather observation model and Open-Meteo provider
//!
//! The provider is a thin HTTPS GET against the Open-Meteo forecast
//! endpoint. WMO weather codes are collapsed into a small condition enum
//! by fixed numeric ranges. Callers own caching and degrade fetch errors
//! to "no data"; the tip generator never sees an error.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const WEATHER_API_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Current-sky condition, collapsed from WMO weather codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    Clear,
    PartlyCloudy,
    Foggy,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
    Unknown,
}

impl WeatherCondition {
    /// Map a WMO weather code to a condition by fixed ranges
    pub fn from_wmo_code(code: u32) -> Self {
        match code {
            0 => WeatherCondition::Clear,
            1..=3 => WeatherCondition::PartlyCloudy,
            4..=49 => WeatherCondition::Foggy,
            50..=59 => WeatherCondition::Drizzle,
            60..=69 => WeatherCondition::Rain,
            70..=79 => WeatherCondition::Snow,
            80..=99 => WeatherCondition::Thunderstorm,
            _ => WeatherCondition::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::PartlyCloudy => "Partly Cloudy",
            WeatherCondition::Foggy => "Foggy",
            WeatherCondition::Drizzle => "Drizzle",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::Unknown => "Unknown",
        }
    }
}

/// One current-conditions observation. Owned by the caller; the advisory
/// engine never persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Degrees Celsius, rounded to the nearest integer
    pub temperature_c: i32,
    /// Relative humidity percent in [0, 100]
    pub humidity_pct: f64,
    pub condition: WeatherCondition,
    /// Human-readable location label ("lat, lon")
    pub location: String,
    pub observed_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    weather_code: u32,
}

/// Open-Meteo client
pub struct WeatherClient {
    client: reqwest::Client,
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the current observation for a coordinate pair
    pub async fn fetch_current(&self, latitude: f64, longitude: f64) -> Result<WeatherObservation> {
        let url = format!(
            "{}?latitude={}&longitude={}&current=temperature_2m,relative_humidity_2m,weather_code",
            WEATHER_API_URL, latitude, longitude
        );

        tracing::debug!(latitude, longitude, "fetching current weather");

        let response = self
            .client
            .get(&url)
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await
            .context("Failed to reach weather service")?;

        if !response.status().is_success() {
            anyhow::bail!("Weather API returned error: {}", response.status());
        }

        let data: ForecastResponse = response
            .json()
            .await
            .context("Failed to parse weather response JSON")?;

        Ok(WeatherObservation {
            temperature_c: data.current.temperature_2m.round() as i32,
            humidity_pct: data.current.relative_humidity_2m,
            condition: WeatherCondition::from_wmo_code(data.current.weather_code),
            location: format!("{:.2}, {:.2}", latitude, longitude),
            observed_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wmo_range_boundaries() {
        assert_eq!(WeatherCondition::from_wmo_code(0), WeatherCondition::Clear);
        assert_eq!(
            WeatherCondition::from_wmo_code(1),
            WeatherCondition::PartlyCloudy
        );
        assert_eq!(
            WeatherCondition::from_wmo_code(3),
            WeatherCondition::PartlyCloudy
        );
        assert_eq!(WeatherCondition::from_wmo_code(4), WeatherCondition::Foggy);
        assert_eq!(WeatherCondition::from_wmo_code(49), WeatherCondition::Foggy);
        assert_eq!(
            WeatherCondition::from_wmo_code(50),
            WeatherCondition::Drizzle
        );
        assert_eq!(WeatherCondition::from_wmo_code(60), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_wmo_code(69), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_wmo_code(70), WeatherCondition::Snow);
        assert_eq!(
            WeatherCondition::from_wmo_code(80),
            WeatherCondition::Thunderstorm
        );
        assert_eq!(
            WeatherCondition::from_wmo_code(99),
            WeatherCondition::Thunderstorm
        );
        assert_eq!(
            WeatherCondition::from_wmo_code(100),
            WeatherCondition::Unknown
        );
    }

    #[test]
    fn test_forecast_response_shape() {
        let raw = r#"{
            "current": {
                "temperature_2m": 23.6,
                "relative_humidity_2m": 71.0,
                "weather_code": 61
            }
        }"#;
        let parsed: ForecastResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.current.temperature_2m, 23.6);
        assert_eq!(
            WeatherCondition::from_wmo_code(parsed.current.weather_code),
            WeatherCondition::Rain
        );
    }
}
