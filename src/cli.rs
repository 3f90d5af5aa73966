use clap::{Parser, Subcommand};
use reqwest::Url;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    /// Forecast service base URL.
    #[clap(
        long = "base-url",
        env = "GRIDMIX_BASE_URL",
        default_value = "https://spyrosoftbackend.onrender.com"
    )]
    pub base_url: Url,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the 3-day generation-mix dashboard.
    #[clap(name = "show")]
    Show(ShowArgs),

    /// Look up the optimal charging window only.
    #[clap(name = "window")]
    Window(WindowArgs),
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Also search for the optimal charging window of this many hours.
    #[clap(long = "duration-hours")]
    pub duration_hours: Option<i64>,
}

#[derive(Parser)]
pub struct WindowArgs {
    /// Charging duration in hours, clamped to 1 through 6.
    #[clap(long = "duration-hours", default_value = "1", env = "GRIDMIX_DURATION_HOURS")]
    pub duration_hours: i64,
}
