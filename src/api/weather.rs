//! Weather API
//!
//! Single unauthenticated call to the public Open-Meteo forecast endpoint.

use crate::config::WeatherConfig;
use crate::weather::{CurrentWeather, ForecastResponse};
use super::{send_json, ApiResult};

pub async fn fetch_current_weather(config: &WeatherConfig) -> ApiResult<CurrentWeather> {
    let builder = reqwest::Client::new().get(config.forecast_url());
    let resp: ForecastResponse = send_json(builder).await?;
    Ok(resp.current_weather)
}
