//! Fuel kinds, the display palette, and chart-ready series.

use std::fmt::{Display, Formatter};

use serde::Deserialize;

use crate::api::forecast::DayForecast;

/// Positional labels for day offsets 0, 1, and 2.
pub const DAY_LABELS: [&str; 3] = ["Today", "Tomorrow", "Day after tomorrow"];

/// Color for fuel names the palette does not know.
pub const FALLBACK_COLOR: &str = "#9ca3af";

/// Generation source as reported by the backend.
///
/// The known set is closed-ish: the backend may start reporting new fuel
/// names at any time, and those must still render, so unknown names are
/// preserved rather than rejected.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(from = "String")]
pub enum FuelKind {
    Biomass,
    Coal,
    Imports,
    Gas,
    Nuclear,
    Other,
    Hydro,
    Solar,
    Wind,
    Unrecognized(String),
}

impl From<String> for FuelKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "biomass" => Self::Biomass,
            "coal" => Self::Coal,
            "imports" => Self::Imports,
            "gas" => Self::Gas,
            "nuclear" => Self::Nuclear,
            "other" => Self::Other,
            "hydro" => Self::Hydro,
            "solar" => Self::Solar,
            "wind" => Self::Wind,
            _ => Self::Unrecognized(name),
        }
    }
}

impl Display for FuelKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Biomass => write!(f, "biomass"),
            Self::Coal => write!(f, "coal"),
            Self::Imports => write!(f, "imports"),
            Self::Gas => write!(f, "gas"),
            Self::Nuclear => write!(f, "nuclear"),
            Self::Other => write!(f, "other"),
            Self::Hydro => write!(f, "hydro"),
            Self::Solar => write!(f, "solar"),
            Self::Wind => write!(f, "wind"),
            Self::Unrecognized(name) => write!(f, "{name}"),
        }
    }
}

/// Total over all fuels: every kind, known or not, gets a valid color token.
#[must_use]
pub const fn color_for(fuel: &FuelKind) -> &'static str {
    match fuel {
        FuelKind::Biomass | FuelKind::Wind => "#10b981",
        FuelKind::Coal => "#1f2937",
        FuelKind::Imports => "#8b5cf6",
        FuelKind::Gas => "#f59e0b",
        FuelKind::Nuclear => "#3b82f6",
        FuelKind::Other => "#6b7280",
        FuelKind::Hydro => "#06b6d4",
        FuelKind::Solar => "#fbbf24",
        FuelKind::Unrecognized(_) => FALLBACK_COLOR,
    }
}

/// The structure handed to the chart widget.
///
/// `labels`, `data`, and `background_color` are index-aligned.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub data: Vec<f64>,
    pub background_color: Vec<&'static str>,
}

impl ChartData {
    #[must_use]
    pub fn from_mix(day: &DayForecast) -> Self {
        Self {
            labels: day.mix.iter().map(|entry| entry.fuel.to_string()).collect(),
            datasets: vec![Dataset {
                data: day.mix.iter().map(|entry| entry.percentage).collect(),
                background_color: day.mix.iter().map(|entry| color_for(&entry.fuel)).collect(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{api::forecast::FuelMixEntry, prelude::*};

    fn day(mix: Vec<FuelMixEntry>) -> DayForecast {
        DayForecast { clean_energy_percentage: 0.0, mix }
    }

    fn entry(fuel: &str, percentage: f64) -> FuelMixEntry {
        FuelMixEntry { fuel: FuelKind::from(fuel.to_string()), percentage }
    }

    #[test]
    fn test_series_mapping_is_index_aligned() {
        let chart = ChartData::from_mix(&day(vec![entry("coal", 40.0), entry("solar", 60.0)]));
        assert_eq!(chart.labels, vec!["coal", "solar"]);
        assert_eq!(chart.datasets.len(), 1);
        assert_eq!(chart.datasets[0].data, vec![40.0, 60.0]);
        assert_eq!(chart.datasets[0].background_color, vec!["#1f2937", "#fbbf24"]);
    }

    #[test]
    fn test_unknown_fuel_gets_fallback_color() {
        let chart = ChartData::from_mix(&day(vec![entry("tidal", 100.0)]));
        assert_eq!(chart.labels, vec!["tidal"]);
        assert_eq!(chart.datasets[0].background_color, vec![FALLBACK_COLOR]);
    }

    #[test]
    fn test_every_known_fuel_has_a_valid_color() -> Result {
        for fuel in ["biomass", "coal", "imports", "gas", "nuclear", "other", "hydro", "solar", "wind"] {
            let color = color_for(&FuelKind::from(fuel.to_string()));
            ensure!(color.starts_with('#'));
            ensure!(color.len() == 7);
        }
        Ok(())
    }

    #[test]
    fn test_day_labels_are_positional() {
        assert_eq!(DAY_LABELS[0], "Today");
        assert_eq!(DAY_LABELS[1], "Tomorrow");
        assert_eq!(DAY_LABELS[2], "Day after tomorrow");
    }
}
