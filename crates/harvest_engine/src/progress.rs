use harvest_log::{harvest_debug, harvest_info, harvest_warn};

use crate::{EngineEvent, Stage};

/// Receives engine events as a batch runs.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

/// Forwards events to the global logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn emit(&self, event: EngineEvent) {
        match event {
            EngineEvent::LinksGathered { listing_url, count } => {
                harvest_info!("Gathered {} article links from {}", count, listing_url);
            }
            EngineEvent::Progress(progress) => {
                // Download progress fires per chunk; only stage changes are worth a line.
                if progress.stage != Stage::Downloading || progress.bytes == Some(0) {
                    harvest_debug!("job {} -> {:?}", progress.job_id, progress.stage);
                }
            }
            EngineEvent::JobCompleted { job_id, url, result } => match result {
                Ok(outcome) => harvest_info!(
                    "job {} saved {:?} ({} blocks) to {:?}",
                    job_id,
                    outcome.title,
                    outcome.block_count,
                    outcome.saved_to
                ),
                Err(kind) => harvest_warn!("job {} skipped {}: {}", job_id, url, kind),
            },
        }
    }
}
