mod api;
mod chart;
mod cli;
mod dashboard;
mod dates;
mod prelude;
mod render;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command},
    dashboard::DashboardViewModel,
    prelude::*,
    render::{build_day_table, build_window_table},
};

#[tokio::main]
async fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut dashboard = DashboardViewModel::try_new(args.base_url)?;

    match args.command {
        Command::Show(show_args) => {
            dashboard.load_forecast().await;
            match dashboard.day_slots() {
                Some(slots) => {
                    for slot in &slots {
                        println!("{}", build_day_table(slot));
                    }
                }
                None => info!("No forecast available"),
            }
            if let Some(hours) = show_args.duration_hours {
                dashboard.set_duration(hours);
                dashboard.find_window().await;
                if let Some(summary) = dashboard.window_summary() {
                    println!("{}", build_window_table(&summary));
                }
            }
        }

        Command::Window(window_args) => {
            dashboard.set_duration(window_args.duration_hours);
            dashboard.find_window().await;
            match dashboard.window_summary() {
                Some(summary) => println!("{}", build_window_table(&summary)),
                None => info!("No charging window available"),
            }
        }
    }

    Ok(())
}
