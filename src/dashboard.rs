//! View state and the four transitions that are allowed to mutate it.

use chrono::Local;
use reqwest::Url;

use crate::{
    api::{
        FetchError,
        forecast::{EnergyForecast, EnergyForecastClient},
        window::{ChargeDuration, ChargingWindow, ChargingWindowClient},
    },
    chart::{ChartData, DAY_LABELS},
    dates::format_timestamp,
    prelude::*,
};

/// Everything the dashboard renders from.
///
/// Owned exclusively by [`DashboardViewModel`]; nothing else mutates it.
#[derive(Default)]
pub struct ViewState {
    pub forecast: Option<EnergyForecast>,
    pub duration: ChargeDuration,
    pub window: Option<ChargingWindow>,
    pub is_fetching_window: bool,
}

pub struct DashboardViewModel {
    forecast_client: EnergyForecastClient,
    window_client: ChargingWindowClient,
    state: ViewState,
    /// Tag of the most recently issued window request. A continuation only
    /// applies while its tag still matches, so a slow stale response can
    /// never overwrite a fresher one.
    window_request_seq: u64,
}

impl DashboardViewModel {
    pub fn try_new(base_url: Url) -> Result<Self> {
        Ok(Self {
            forecast_client: EnergyForecastClient::try_new(base_url.clone())?,
            window_client: ChargingWindowClient::try_new(base_url)?,
            state: ViewState::default(),
            window_request_seq: 0,
        })
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Startup transition: fetch the 3-day forecast once.
    pub async fn load_forecast(&mut self) {
        let result = self.forecast_client.fetch_forecast(Local::now().date_naive()).await;
        self.apply_forecast(result);
    }

    fn apply_forecast(&mut self, result: Result<EnergyForecast, FetchError>) {
        match result {
            Ok(forecast) => self.state.forecast = Some(forecast),
            // Not user-surfaced: the forecast panel stays silently empty.
            Err(error) => error.swallow("forecast fetch"),
        }
    }

    /// Store the duration for the next window search. No network call.
    pub fn set_duration(&mut self, hours: i64) {
        self.state.duration = ChargeDuration::clamp(hours);
    }

    /// Window-search transition, issued with the current duration.
    pub async fn find_window(&mut self) {
        self.state.is_fetching_window = true;
        self.window_request_seq += 1;
        let seq = self.window_request_seq;
        let result = self
            .window_client
            .fetch_optimal_window(Local::now().date_naive(), self.state.duration)
            .await;
        self.apply_window(seq, result);
    }

    fn apply_window(&mut self, seq: u64, result: Result<ChargingWindow, FetchError>) {
        if seq != self.window_request_seq {
            debug!(seq, "dropping a stale charging-window response");
            return;
        }
        self.state.is_fetching_window = false;
        match result {
            Ok(window) => self.state.window = Some(window),
            // The previous window, if any, stays on screen.
            Err(error) => error.swallow("charging-window fetch"),
        }
    }

    /// Chart-ready projection of the three day panels, or `None` until the
    /// first successful forecast fetch.
    #[must_use]
    pub fn day_slots(&self) -> Option<[DaySlot; 3]> {
        let days = self.state.forecast.as_ref()?.days();
        Some(std::array::from_fn(|offset| DaySlot {
            label: DAY_LABELS[offset],
            clean_percentage: (days[offset].clean_energy_percentage * 10.0).round() / 10.0,
            chart: ChartData::from_mix(days[offset]),
        }))
    }

    /// Formatted window summary, or `None` until the first successful search.
    #[must_use]
    pub fn window_summary(&self) -> Option<WindowSummary> {
        self.state.window.as_ref().map(|window| WindowSummary {
            start_display: format_timestamp(window.start_date),
            end_display: format_timestamp(window.end_date),
            average_display: format!("{:.2}%", window.average_clean_energy_percentage),
        })
    }
}

/// One of the three day panels, ready to hand to the chart widget.
pub struct DaySlot {
    pub label: &'static str,
    pub clean_percentage: f64,
    pub chart: ChartData,
}

pub struct WindowSummary {
    pub start_display: String,
    pub end_display: String,
    pub average_display: String,
}
