//! CIP Utils Runner - composition root binary
//!
//! Sets up logging, loads configuration and exercises each helper once.

use cip_utils::{log_info, log_warn, Utils, UtilsConfig};

#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
use anyhow::Context;
#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cip_utils=debug,cip_utils_runner=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CIP Utils runner");

    let config = UtilsConfig::from_env().context("Failed to load configuration")?;
    let utils = Utils::new(config);

    let message = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Network failed".to_string());
    render(&utils, &message);

    let settle = utils.config().debounce_delay + Duration::from_millis(50);
    debounce_demo(&utils);
    tokio::time::sleep(settle).await;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting CIP Utils runner");

    let utils = Utils::new(UtilsConfig::from_window());
    render(&utils, "Network failed");
    // Pending calls outlive the debouncer, so the last one still fires
    debounce_demo(&utils);
}

fn render(utils: &Utils, message: &str) {
    log_info!(
        utils.log(),
        "dev mode:",
        utils.config().is_dev_mode(),
        "icons:",
        utils.config().icon_registry.len()
    );
    println!("{}", utils.loading_html());
    println!("{}", utils.error_html(&utils.escape_html(message)));
}

fn debounce_demo(utils: &Utils) {
    let log = utils.log().clone();
    let mut search = utils.debounce(move |query: String| {
        log_warn!(log, "search fired for", query);
    });
    for query in ["c", "ci", "cip"] {
        search.call(query.to_string());
    }
}
