//! Terminal rendering of the dashboard projection.

use comfy_table::{Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::dashboard::{DaySlot, WindowSummary};

/// Decode a `#rrggbb` palette token into a terminal color.
fn swatch(hex: &str) -> Color {
    let byte = |range| u8::from_str_radix(hex.get(range).unwrap_or_default(), 16).unwrap_or(0);
    if hex.len() == 7 && hex.starts_with('#') {
        Color::Rgb { r: byte(1..3), g: byte(3..5), b: byte(5..7) }
    } else {
        Color::Grey
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

#[must_use]
pub fn build_day_table(slot: &DaySlot) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(slot.label),
        Cell::new(format!("{:.1}% clean", slot.clean_percentage)).fg(Color::Green),
    ]);
    if let Some(dataset) = slot.chart.datasets.first() {
        for ((label, value), color) in
            slot.chart.labels.iter().zip(&dataset.data).zip(&dataset.background_color)
        {
            table.add_row(vec![
                Cell::new(label).fg(swatch(color)),
                Cell::new(format!("{value}%")).set_alignment(CellAlignment::Right),
            ]);
        }
    }
    table
}

#[must_use]
pub fn build_window_table(summary: &WindowSummary) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Start", "End", "Average clean energy"]);
    table.add_row(vec![
        Cell::new(&summary.start_display),
        Cell::new(&summary.end_display),
        Cell::new(&summary.average_display)
            .set_alignment(CellAlignment::Right)
            .fg(Color::Green),
    ]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartData, Dataset, FALLBACK_COLOR};

    #[test]
    fn test_swatch_decodes_palette_tokens() {
        assert!(matches!(swatch("#fbbf24"), Color::Rgb { r: 0xfb, g: 0xbf, b: 0x24 }));
        assert!(matches!(swatch(FALLBACK_COLOR), Color::Rgb { r: 0x9c, g: 0xa3, b: 0xaf }));
        assert!(matches!(swatch("not-a-color"), Color::Grey));
    }

    #[test]
    fn test_build_day_table_has_one_row_per_fuel() {
        let slot = DaySlot {
            label: "Today",
            clean_percentage: 45.7,
            chart: ChartData {
                labels: vec!["coal".to_string(), "solar".to_string()],
                datasets: vec![Dataset {
                    data: vec![40.0, 60.0],
                    background_color: vec!["#1f2937", "#fbbf24"],
                }],
            },
        };
        assert_eq!(build_day_table(&slot).row_iter().count(), 2);
    }
}
