//! Weather Report
//!
//! Turns the raw forecast into what the weather card shows.

use serde::Deserialize;

use crate::i18n::{Locale, LocalizedText};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub current_weather: CurrentWeather,
}

/// Descriptive temperature band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherBand {
    VeryHot,
    Warm,
    Mild,
    Cold,
}

impl WeatherBand {
    /// Bands are exclusive at the lower bound: 35 is warm, 36 is very hot.
    pub fn classify(temp_c: i64) -> Self {
        if temp_c > 35 {
            WeatherBand::VeryHot
        } else if temp_c > 25 {
            WeatherBand::Warm
        } else if temp_c > 15 {
            WeatherBand::Mild
        } else {
            WeatherBand::Cold
        }
    }

    pub fn label(self) -> LocalizedText {
        match self {
            WeatherBand::VeryHot => LocalizedText::new("🔥 حار جداً", "🔥 Very hot"),
            WeatherBand::Warm => LocalizedText::new("☀️ دافئ", "☀️ Warm"),
            WeatherBand::Mild => LocalizedText::new("🌤️ معتدل", "🌤️ Mild"),
            WeatherBand::Cold => LocalizedText::new("❄️ بارد", "❄️ Cold"),
        }
    }
}

/// Rounded values ready for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherReport {
    pub temperature: i64,
    pub windspeed: i64,
    pub band: WeatherBand,
}

/// Round half up, so -2.5 becomes -2 and 2.5 becomes 3
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

impl From<CurrentWeather> for WeatherReport {
    fn from(current: CurrentWeather) -> Self {
        let temperature = round_half_up(current.temperature);
        Self {
            temperature,
            windspeed: round_half_up(current.windspeed),
            band: WeatherBand::classify(temperature),
        }
    }
}

impl WeatherReport {
    pub fn temperature_text(&self) -> String {
        format!("{}°C", self.temperature)
    }

    pub fn wind_text(&self, locale: Locale) -> String {
        let unit = LocalizedText::new("كم/س", "km/h");
        format!("{} {}", self.windspeed, unit.get(locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands() {
        assert_eq!(WeatherBand::classify(36), WeatherBand::VeryHot);
        assert_eq!(WeatherBand::classify(35), WeatherBand::Warm);
        assert_eq!(WeatherBand::classify(30), WeatherBand::Warm);
        assert_eq!(WeatherBand::classify(25), WeatherBand::Mild);
        assert_eq!(WeatherBand::classify(20), WeatherBand::Mild);
        assert_eq!(WeatherBand::classify(15), WeatherBand::Cold);
        assert_eq!(WeatherBand::classify(-4), WeatherBand::Cold);
    }

    #[test]
    fn test_report_rounds_before_classifying() {
        // 35.6 rounds to 36
        let report = WeatherReport::from(CurrentWeather { temperature: 35.6, windspeed: 12.4 });
        assert_eq!(report.temperature, 36);
        assert_eq!(report.band, WeatherBand::VeryHot);
        assert_eq!(report.temperature_text(), "36°C");
        assert_eq!(report.wind_text(Locale::En), "12 km/h");
        assert_eq!(report.wind_text(Locale::Ar), "12 كم/س");
    }

    #[test]
    fn test_halves_round_up() {
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.6), -3);

        let report = WeatherReport::from(CurrentWeather { temperature: 35.5, windspeed: 0.5 });
        assert_eq!(report.temperature, 36);
        assert_eq!(report.windspeed, 1);
        assert_eq!(report.band, WeatherBand::VeryHot);
    }

    #[test]
    fn test_parse_forecast() {
        let json = r#"{"latitude":21.5,"current_weather":{"temperature":31.2,"windspeed":18.0,"weathercode":0}}"#;
        let resp: ForecastResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.current_weather, CurrentWeather { temperature: 31.2, windspeed: 18.0 });
    }
}
