use anyhow::Context;
use chrono::Local;
use clock::Uptime;
use log::LevelFilter;
use monitor::{Monitor, TickOutcome};
use sensor::SoilSensor;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

mod average;
mod buffer;
mod clock;
mod config;
mod decision;
mod monitor;
mod report;
mod sample;
mod sensor;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    TermLogger::init(
        LevelFilter::Info,
        ConfigBuilder::new()
            .set_time_format_rfc3339()
            .set_time_offset_to_local()
            .map_err(|_| anyhow::anyhow!("Failed to set time offset to local"))?
            .build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;

    if let Err(e) = run().await {
        log::error!("{e}");
    }

    Ok(())
}

pub async fn run() -> Result<(), anyhow::Error> {
    let uptime = Uptime::start();
    let mut monitor = Monitor::new(SoilSensor::new(), config::SAMPLE_INTERVAL_MS, Local::now());

    log::info!(
        "Sampling every {} ms, reporting every {} samples",
        config::SAMPLE_INTERVAL_MS,
        config::CYCLE_SIZE
    );

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(config::POLL_PERIOD);
        let mut stdout = std::io::stdout();
        loop {
            ticker.tick().await;

            match monitor.tick(uptime.millis(), &mut stdout) {
                Ok(TickOutcome::Idle) => {}
                Ok(TickOutcome::Sampled { count }) => {
                    log::debug!("{count}/{} samples in current cycle", config::CYCLE_SIZE);
                }
                Ok(TickOutcome::Reported(cycle)) => {
                    log::info!(
                        "Cycle complete: {} ({} samples averaged)",
                        cycle.decision,
                        cycle.average.remaining
                    );
                    if cycle.decision.should_irrigate() {
                        log::info!("Irrigation requested");
                    }
                }
                Err(e) => log::error!("Failed to advance sampling cycle: {e:#}"),
            }
        }
    });

    tokio::signal::ctrl_c()
        .await
        .context("Failed to wait for Ctrl+C signal")?;

    log::info!("Stopping");
    Ok(())
}
