//! # robot-serviced — robot-service daemon
//!
//! Composition root that wires the controller together and runs the seed.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Install the `tracing` subscriber
//! - Construct the supplement repository and the controller
//! - Replay the configured seed through the controller
//! - Print the resulting statistics to stdout
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod seed;

use robot_service_app::in_memory::InMemorySupplementRepository;
use robot_service_app::services::controller::Controller;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .with_target(false)
        .compact()
        .init();

    let mut controller =
        Controller::with_capacities(InMemorySupplementRepository::new(), config.capacities());

    let report = seed::apply(&mut controller, &config.seed);
    tracing::info!(
        applied = report.applied,
        failed = report.failed,
        "seed applied"
    );

    println!("{}", controller.statistics());

    Ok(())
}
