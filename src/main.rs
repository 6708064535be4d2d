mod catalog;
mod config;
mod daemon;
mod error;
mod file_logger;
mod generator;
mod history;
mod message;
mod notifier;
mod schedule;
mod scheduler;
mod screen;
mod selector;
mod service;

use crate::config::{Config, BOT_NAME};
use crate::scheduler::Cycle;
use crate::service::CycleService;
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Config::from_args()?;

    // Fork before any thread exists; logging is set up in the surviving child.
    let detached = if config.daemon {
        Some(daemon::daemonize())
    } else {
        None
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();

    if let Some(Err(e)) = detached {
        warn!("Could not run in background, staying in foreground: {}", e);
    }

    info!(
        interval_minutes = config.interval.as_secs() / 60,
        log_file = %config.log_file.display(),
        history_file = %config.history_file.display(),
        history_size = config.history_size,
        language = %config.language,
        dynamic = config.dynamic,
        notify = config.notify,
        "{} started",
        BOT_NAME
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(config))
}

/// `RUST_LOG` is used as given; `info` applies only when it is unset or
/// does not parse.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

async fn run(config: Config) -> anyhow::Result<()> {
    let mut service = CycleService::from_config(&config);

    if config.once {
        service.run_cycle()?;
        return Ok(());
    }

    scheduler::run(&mut service, config.interval, scheduler::shutdown_signal()).await;
    println!("[{}] Shutting down.", BOT_NAME);
    Ok(())
}
