use std::sync::Arc;

use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{debug, error, info};

use crate::AppState;

/// Starts background maintenance. Currently one job: every minute, drop
/// rate-limit windows that have expired so idle clients do not pile up.
pub async fn start_scheduler(state: Arc<AppState>) {
    let sched = match JobScheduler::new().await {
        Ok(sched) => sched,
        Err(e) => {
            error!("Failed to create scheduler: {:?}", e);
            return;
        }
    };

    let state_clone = Arc::clone(&state);
    let eviction_job = Job::new_async("0 * * * * *", move |_, _| {
        let state = state_clone.clone();
        Box::pin(async move {
            let removed = state.rate_limiter.evict_expired();
            if removed > 0 {
                info!(
                    "Evicted {} expired rate limit windows, {} still tracked",
                    removed,
                    state.rate_limiter.tracked_clients()
                );
            } else {
                debug!("No expired rate limit windows to evict");
            }
        })
    });

    let eviction_job = match eviction_job {
        Ok(job) => job,
        Err(e) => {
            error!("Failed to create rate limit eviction job: {:?}", e);
            return;
        }
    };

    if let Err(e) = sched.add(eviction_job).await {
        error!("Failed to schedule rate limit eviction job: {:?}", e);
        return;
    }

    if let Err(e) = sched.start().await {
        error!("Failed to start scheduler: {:?}", e);
    }
}
