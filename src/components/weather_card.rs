//! Weather & Time Card Component
//!
//! Lifecycle: inject stylesheet once, render, then start the clock tick and
//! the weather refresh. Both intervals belong to the card and are cancelled
//! when it unmounts.

use std::sync::Arc;

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::fetch_current_weather;
use crate::clock::{local_clock_face, ClockFace};
use crate::config::WeatherConfig;
use crate::context::use_app_context;
use crate::i18n::LocalizedText;
use crate::store::{use_app_store, use_localized, StorefrontStateStoreFields};
use crate::weather::WeatherReport;

const STYLE_ID: &str = "weatherCardStyles";

const TITLE: LocalizedText = LocalizedText::new("الطقس والوقت", "Weather & time");
const LOADING: LocalizedText = LocalizedText::new("⏳ جاري تحميل بيانات الطقس...", "⏳ Loading weather...");
const FAILED: LocalizedText = LocalizedText::new("❌ فشل في تحميل بيانات الطقس", "❌ Could not load the weather");
const FAILED_HINT: LocalizedText = LocalizedText::new("تحقق من الاتصال بالإنترنت", "Check your internet connection");
const WIND: LocalizedText = LocalizedText::new("💨 الرياح", "💨 Wind");
const LOCATION: LocalizedText = LocalizedText::new("📍 الموقع", "📍 Location");
const REFRESH: LocalizedText = LocalizedText::new("🔄 تحديث", "🔄 Refresh");

const STYLES: &str = r#"
.weather-card {
  background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
  border-radius: 20px;
  padding: 25px;
  margin: 20px auto;
  max-width: 500px;
  box-shadow: 0 10px 40px rgba(0,0,0,0.2);
  color: white;
}
.weather-header {
  display: flex;
  align-items: center;
  gap: 10px;
  margin-bottom: 20px;
  padding-bottom: 15px;
  border-bottom: 2px solid rgba(255,255,255,0.2);
}
.weather-icon { font-size: 2rem; }
.weather-header h3 { margin: 0; font-size: 1.5rem; }
.time-section { text-align: center; margin-bottom: 25px; }
.current-time { font-size: 3rem; font-weight: bold; margin-bottom: 10px; }
.current-date { font-size: 1.1rem; opacity: 0.9; }
.weather-section {
  background: rgba(255,255,255,0.15);
  border-radius: 15px;
  padding: 20px;
}
.loading-weather, .weather-error { text-align: center; padding: 20px; }
.weather-info { text-align: center; }
.weather-temp { font-size: 3.5rem; font-weight: bold; margin-bottom: 10px; }
.weather-desc { font-size: 1.3rem; margin-bottom: 20px; }
.weather-details { display: grid; grid-template-columns: 1fr 1fr; gap: 15px; }
.weather-detail { background: rgba(255,255,255,0.1); padding: 12px; border-radius: 10px; }
.detail-label { display: block; font-size: 0.9rem; opacity: 0.8; }
.detail-value { display: block; font-size: 1.1rem; font-weight: bold; }
.refresh-weather-btn {
  width: 100%;
  margin-top: 20px;
  background: rgba(255,255,255,0.2);
  border: 2px solid rgba(255,255,255,0.3);
  color: white;
  padding: 12px;
  border-radius: 10px;
  cursor: pointer;
}
@media (max-width: 600px) {
  .weather-card { margin: 10px; padding: 20px; }
  .current-time { font-size: 2.5rem; }
}
"#;

#[derive(Debug, Clone, Copy, PartialEq)]
enum WeatherState {
    Loading,
    Loaded(WeatherReport),
    Failed,
}

/// Every timer the card started; dropping a handle cancels it
struct CardTimers<H = Interval> {
    handles: Vec<H>,
}

impl<H> CardTimers<H> {
    /// Schedule the clock tick and the weather refresh, tracking both
    fn start(
        tick_ms: u32,
        tick: impl FnMut() + 'static,
        refresh_ms: u32,
        refresh: impl FnMut() + 'static,
        schedule: impl Fn(u32, Box<dyn FnMut()>) -> H,
    ) -> Self {
        let mut timers = Self { handles: Vec::new() };
        timers.track(schedule(tick_ms, Box::new(tick)));
        timers.track(schedule(refresh_ms, Box::new(refresh)));
        timers
    }

    fn track(&mut self, handle: H) {
        self.handles.push(handle);
    }

    fn len(&self) -> usize {
        self.handles.len()
    }

    fn stop(&mut self) {
        log::debug!("[WEATHER] Cancelling {} timers", self.len());
        self.handles.clear();
    }
}

/// Add the card stylesheet to `<head>` unless already present
fn inject_styles() {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if doc.get_element_by_id(STYLE_ID).is_some() {
        return;
    }
    let (Some(head), Ok(style)) = (doc.head(), doc.create_element("style")) else {
        return;
    };
    style.set_id(STYLE_ID);
    style.set_text_content(Some(STYLES));
    if head.append_child(&style).is_err() {
        log::warn!("[WEATHER] Could not inject styles");
    }
}

#[component]
pub fn WeatherCard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let config: Arc<WeatherConfig> = Arc::new(ctx.config.weather.clone());
    let tick_ms = ctx.config.clock_tick_ms;
    let refresh_ms = config.refresh_ms();

    let (clock, set_clock) = signal(ClockFace::blank());
    let (weather, set_weather) = signal(WeatherState::Loading);

    inject_styles();

    let tick = move || set_clock.set(local_clock_face(store.locale().get_untracked()));

    let refresh = {
        let config = Arc::clone(&config);
        move || {
            let config = Arc::clone(&config);
            set_weather.set(WeatherState::Loading);
            spawn_local(async move {
                match fetch_current_weather(&config).await {
                    Ok(current) => {
                        let report = WeatherReport::from(current);
                        log::info!("[WEATHER] {} ({:?})", report.temperature_text(), report.band);
                        set_weather.set(WeatherState::Loaded(report));
                    }
                    Err(e) => {
                        log::error!("[WEATHER] Fetch failed: {}", e);
                        set_weather.set(WeatherState::Failed);
                    }
                }
            });
        }
    };

    // Start: immediate update, then periodic
    tick();
    refresh();
    let timers = StoredValue::new_local(CardTimers::start(
        tick_ms,
        tick,
        refresh_ms,
        refresh.clone(),
        |ms, callback| Interval::new(ms, callback),
    ));
    on_cleanup(move || {
        timers.try_update_value(CardTimers::stop);
    });

    // Re-render the clock right away when the language changes
    Effect::new(move |_| {
        set_clock.set(local_clock_face(store.locale().get()));
    });

    let location = config.location.clone();
    let wind_label = use_localized(WIND);
    let location_label = use_localized(LOCATION);
    let loading_text = use_localized(LOADING);
    let failed_text = use_localized(FAILED);
    let failed_hint = use_localized(FAILED_HINT);

    let weather_view = move || {
        let locale = store.locale().get();
        match weather.get() {
            WeatherState::Loading => view! {
                <div class="loading-weather">{loading_text}</div>
            }.into_any(),
            WeatherState::Loaded(report) => view! {
                <div class="weather-info">
                    <div class="weather-temp">{report.temperature_text()}</div>
                    <div class="weather-desc">{report.band.label().get(locale)}</div>
                    <div class="weather-details">
                        <div class="weather-detail">
                            <span class="detail-label">{wind_label}</span>
                            <span class="detail-value">{report.wind_text(locale)}</span>
                        </div>
                        <div class="weather-detail">
                            <span class="detail-label">{location_label}</span>
                            <span class="detail-value">{location.get(locale).to_string()}</span>
                        </div>
                    </div>
                </div>
            }.into_any(),
            WeatherState::Failed => view! {
                <div class="weather-error">
                    {failed_text}
                    <br />
                    <small>{failed_hint}</small>
                </div>
            }.into_any(),
        }
    };

    view! {
        <div id="weatherTimeCard">
            <div class="weather-card">
                <div class="weather-header">
                    <span class="weather-icon">"🌤️"</span>
                    <h3>{use_localized(TITLE)}</h3>
                </div>
                <div class="weather-body">
                    <div class="time-section">
                        <div class="current-time" id="currentTime">{move || clock.get().time}</div>
                        <div class="current-date" id="currentDate">{move || clock.get().date}</div>
                    </div>
                    <div class="weather-section" id="weatherSection">
                        {weather_view}
                    </div>
                </div>
                <button class="refresh-weather-btn" on:click=move |_| refresh()>
                    {use_localized(REFRESH)}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_tracks_tick_and_refresh() {
        let mut timers = CardTimers::start(1000, || {}, 600_000, || {}, |ms, _| ms);

        assert_eq!(timers.len(), 2);
        assert_eq!(timers.handles, vec![1000, 600_000]);

        timers.stop();
        assert_eq!(timers.len(), 0);
    }
}
