use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod error;
mod reservation;
mod schedule;

use api::AppState;
use config::Config;
use reservation::{RandomDecider, SeatReservationService};
use schedule::NbaScheduleClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    // Fetch the schedule exactly once; any failure aborts startup
    let source = NbaScheduleClient::new(
        &config.schedule_url,
        Duration::from_secs(config.upstream_timeout_secs),
    )?;
    let index = schedule::load_index(&source).await?;
    if index.is_empty() {
        warn!("Schedule feed contained no games; every lookup will be empty");
    }

    let decider = RandomDecider::new(config.grant_probability);
    info!(
        "Seat reservations granted with probability {:.2}",
        decider.grant_probability()
    );

    let state = AppState {
        index: Arc::new(index),
        reservations: SeatReservationService::new(Arc::new(decider)),
    };
    let app = api::router(state);
    let addr: SocketAddr = config.listen_addr.parse()?;
    info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
