use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use transit_planner::dataset::SnapshotFile;
use transit_planner::planner::{NetworkHandle, PlannerConfig, SearchError, StopRole};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match PlannerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Load the network (fail fast if the snapshot is unusable)
    let source = SnapshotFile::new(&config.snapshot_path);
    let handle = match NetworkHandle::load(&source).await {
        Ok(handle) => handle,
        Err(e) => {
            error!(error = %e, "Failed to load network");
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [from, to] => answer(&handle, from, to).await,
        [] => {
            spawn_refresh(&handle, source, &config);
            interactive(&handle).await
        }
        _ => {
            eprintln!("Usage: transit-planner [<from stop> <to stop>]");
            eprintln!();
            eprintln!("Without arguments, reads one query per line from stdin as `From | To`.");
            eprintln!("Environment:");
            eprintln!("  TRANSIT_SNAPSHOT      dataset snapshot (default cache/dataset.json)");
            eprintln!("  TRANSIT_REFRESH_SECS  rebuild interval, 0 to disable (default 86400)");
            ExitCode::FAILURE
        }
    }
}

/// Periodically rebuild the graph from the snapshot in the background.
fn spawn_refresh(handle: &NetworkHandle, source: SnapshotFile, config: &PlannerConfig) {
    let Some(period) = config.refresh_interval() else {
        return;
    };

    let handle = handle.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match handle.refresh(&source).await {
                Ok(stats) => info!(edges = stats.edges, "Refreshed network"),
                Err(e) => warn!(error = %e, "Failed to refresh network, keeping previous graph"),
            }
        }
    });
}

async fn interactive(handle: &NetworkHandle) -> ExitCode {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => return ExitCode::SUCCESS,
            Err(e) => {
                error!(error = %e, "Failed to read stdin");
                return ExitCode::FAILURE;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.split_once('|') {
            Some((from, to)) => {
                let _ = answer(handle, from.trim(), to.trim()).await;
            }
            None => eprintln!("Expected `From | To`, got {:?}", line),
        }
        println!();
    }
}

async fn answer(handle: &NetworkHandle, from: &str, to: &str) -> ExitCode {
    match handle.find_path(from, to).await {
        Ok(steps) if steps.is_empty() => {
            println!("Already at {}.", to);
            ExitCode::SUCCESS
        }
        Ok(steps) => {
            for (i, step) in steps.iter().enumerate() {
                println!("Step {}: {}", i + 1, step);
            }
            ExitCode::SUCCESS
        }
        Err(SearchError::StopNotFound { role, name }) => {
            let which = match role {
                StopRole::Source => "departure",
                StopRole::Target => "destination",
            };
            println!("Unknown {} stop: {}", which, name);
            ExitCode::FAILURE
        }
        Err(e @ SearchError::NoPathFound { .. }) => {
            println!("Sorry, {}.", e);
            ExitCode::FAILURE
        }
    }
}
