use std::path::{Path, PathBuf};

use serde_json::json;

use crate::persist::{AtomicFileWriter, PersistError};
use crate::pipeline::BatchSummary;

pub const MANIFEST_FILENAME: &str = "manifest.json";

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
    #[error("could not encode manifest: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Writes a JSON summary of one batch run next to the saved articles.
pub fn write_manifest(output_dir: &Path, summary: &BatchSummary) -> Result<PathBuf, ManifestError> {
    let manifest = json!({
        "listing_url": summary.listing_url,
        "links_found": summary.links_found,
        "saved_count": summary.saved.len(),
        "skipped_count": summary.skipped.len(),
        "failed_count": summary.failed.len(),
        "saved": summary.saved.iter().map(|entry| {
            json!({
                "url": entry.url,
                "title": entry.outcome.title,
                "date": entry.outcome.date,
                "blocks": entry.outcome.block_count,
                "filename": entry
                    .outcome
                    .saved_to
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned()),
            })
        }).collect::<Vec<_>>(),
        "skipped": summary.skipped,
        "failed": summary.failed.iter().map(|entry| {
            json!({
                "url": entry.url,
                "reason": entry.reason.to_string(),
            })
        }).collect::<Vec<_>>(),
    });

    let content = serde_json::to_string_pretty(&manifest)?;
    let writer = AtomicFileWriter::new(output_dir.to_path_buf());
    Ok(writer.write(MANIFEST_FILENAME, &content)?)
}
