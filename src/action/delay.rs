use chrono::Local;
use std::time::Duration;
use tracing::{debug, info};

/// Wait before processing, giving concurrent edits of the pull request time
/// to settle
///
/// Returns the duration actually waited. A zero or negative delay returns
/// immediately.
pub async fn delay_action(delay_ms: i64) -> Duration {
    if delay_ms <= 0 {
        info!("No delay configured, immediate execution");
        return Duration::ZERO;
    }

    let duration = Duration::from_millis(delay_ms.unsigned_abs());
    info!("Waiting {} milliseconds ...", delay_ms);

    debug!("Start waiting at {}", Local::now().format("%H:%M:%S%.3f"));
    tokio::time::sleep(duration).await;
    debug!("Done waiting at {}", Local::now().format("%H:%M:%S%.3f"));

    duration
}
