use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_system::{
    AppState,
    config::Config,
    console::Console,
    controllers,
    models::Hall,
};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Logs go to stderr; stdout belongs to the interactive session.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(environment = %config.app.environment, "Starting cinema booking session");

    let mut console = Console::stdio();

    let dims = controllers::prompt_dimensions(&mut console)?;
    let hall = Hall::new(dims);
    info!(
        rows = dims.rows,
        seats_per_row = dims.seats_per_row,
        capacity = hall.capacity(),
        "Hall initialized"
    );

    let mut state = AppState::new(config, hall);
    controllers::run(&mut state, &mut console)?;

    info!("Session closed");
    Ok(())
}
