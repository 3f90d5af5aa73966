//! 3-day generation-mix forecast endpoint.

use chrono::NaiveDate;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::{
    api::{FetchError, client},
    chart::FuelKind,
    dates::{DateRange, format_for_wire},
    prelude::*,
};

pub struct EnergyForecastClient {
    client: Client,
    base_url: Url,
}

impl EnergyForecastClient {
    pub fn try_new(base_url: Url) -> Result<Self> {
        Ok(Self { client: client::try_new()?, base_url })
    }

    /// Fetch the mix forecast for the given day and the two following days.
    #[instrument(name = "Fetching the generation-mix forecast…", fields(today = %today), skip_all)]
    pub async fn fetch_forecast(&self, today: NaiveDate) -> Result<EnergyForecast, FetchError> {
        let range = DateRange::forecast_horizon(today);
        let url = format!(
            "{}/{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            format_for_wire(range.from),
            format_for_wire(range.to),
        );
        Ok(self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<EnergyForecast>()
            .await?)
    }
}

/// One forecast response: today, tomorrow, and the day after.
///
/// Replaced wholesale on each successful fetch.
#[derive(Clone, Debug, Deserialize)]
pub struct EnergyForecast {
    day1: DayForecast,
    day2: DayForecast,
    day3: DayForecast,
}

impl EnergyForecast {
    /// Day forecasts ordered by offset from today.
    #[must_use]
    pub fn days(&self) -> [&DayForecast; 3] {
        [&self.day1, &self.day2, &self.day3]
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct DayForecast {
    /// Reported by the backend, not recomputed client-side.
    #[serde(rename = "cleanEnergyPercentage")]
    pub clean_energy_percentage: f64,

    pub mix: Vec<FuelMixEntry>,
}

/// Share of one generation source. Entries for a day are expected, but not
/// verified, to sum to 100.
#[derive(Clone, Debug, Deserialize)]
pub struct FuelMixEntry {
    pub fuel: FuelKind,

    #[serde(rename = "perc")]
    pub percentage: f64,
}
