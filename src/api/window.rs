//! Optimal charging-window endpoint.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, NaiveDate, Utc};
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::{
    api::{FetchError, client},
    dates::{DateRange, format_for_wire},
    prelude::*,
};

/// Requested window length in whole hours, clamped to the service's
/// supported range of 1 through 6.
///
/// The service does not re-validate, so out-of-range values must never be
/// put on the wire.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChargeDuration(u8);

impl ChargeDuration {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(6);

    /// Clamp arbitrary user input into the supported range.
    #[must_use]
    pub fn clamp(hours: i64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self(hours.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0)) as u8)
    }

    #[must_use]
    pub const fn hours(self) -> u8 {
        self.0
    }
}

impl Default for ChargeDuration {
    fn default() -> Self {
        Self::MIN
    }
}

impl Display for ChargeDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} h", self.0)
    }
}

pub struct ChargingWindowClient {
    client: Client,
    base_url: Url,
}

impl ChargingWindowClient {
    pub fn try_new(base_url: Url) -> Result<Self> {
        Ok(Self { client: client::try_new()?, base_url })
    }

    /// Ask the service for the best contiguous window of the given duration
    /// within the 3-day horizon.
    #[instrument(
        name = "Fetching the optimal charging window…",
        fields(today = %today, duration = %duration),
        skip_all,
    )]
    pub async fn fetch_optimal_window(
        &self,
        today: NaiveDate,
        duration: ChargeDuration,
    ) -> Result<ChargingWindow, FetchError> {
        let range = DateRange::forecast_horizon(today);
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            format_for_wire(range.from),
            format_for_wire(range.to),
            duration.hours(),
        );
        Ok(self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<ChargingWindow>()
            .await?)
    }
}

/// The best contiguous interval reported by the service.
///
/// Replaced wholesale on each successful fetch; kept as-is on failure.
#[derive(Clone, Debug, Deserialize)]
pub struct ChargingWindow {
    #[serde(rename = "startDate")]
    pub start_date: DateTime<Utc>,

    #[serde(rename = "endDate")]
    pub end_date: DateTime<Utc>,

    #[serde(rename = "averageCleanEnergyPer")]
    pub average_clean_energy_percentage: f64,
}

#[cfg(test)]
mod tests {
    use chrono::Local;

    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(ChargeDuration::clamp(0), ChargeDuration::MIN);
        assert_eq!(ChargeDuration::clamp(-3), ChargeDuration::MIN);
        assert_eq!(ChargeDuration::clamp(4).hours(), 4);
        assert_eq!(ChargeDuration::clamp(7), ChargeDuration::MAX);
    }

    #[test]
    fn test_deserialize_window_ok() -> Result {
        let window: ChargingWindow = serde_json::from_str(
            r#"{
                "startDate": "2024-06-10T01:00:00Z",
                "endDate": "2024-06-10T04:00:00+02:00",
                "averageCleanEnergyPer": 83.333
            }"#,
        )?;
        assert!(window.start_date < window.end_date);
        Ok(())
    }

    #[tokio::test]
    #[ignore = "makes the API request"]
    async fn test_fetch_optimal_window_ok() -> Result {
        let client =
            ChargingWindowClient::try_new(Url::parse("https://spyrosoftbackend.onrender.com")?)?;
        let window = client
            .fetch_optimal_window(Local::now().date_naive(), ChargeDuration::clamp(2))
            .await?;
        assert!((0.0..=100.0).contains(&window.average_clean_energy_percentage));
        Ok(())
    }
}
